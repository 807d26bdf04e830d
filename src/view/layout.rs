use serde::{Deserialize, Serialize};

use crate::view::error::PageError;
use crate::view::view_model::{DISPLAY_STYLE, Element, HIDDEN_CLASS};

/// Ids and class names the page core binds to.
pub mod ids {
    pub const ROOT: &str = "body";

    pub const REVEAL_BUTTON: &str = "reveal-btn";
    pub const SECRET_MESSAGE: &str = "secret-message";

    pub const CUPCAKE: &str = "cupcake";
    pub const CUPCAKE_STATUS: &str = "cupcake-status";

    pub const KEYBOARD_INPUT: &str = "keyboard-input";
    pub const KEYBOARD_OUTPUT: &str = "keyboard-output";

    pub const THEME_TOGGLE: &str = "theme-toggle";

    pub const FAQ_QUESTION_CLASS: &str = "faq-question";
    pub const FAQ_ANSWER_CLASS: &str = "faq-answer";

    pub const ORDER_FORM: &str = "order-form";
    pub const ORDER_SUCCESS: &str = "order-success";

    pub const NAME: &str = "name";
    pub const NAME_ERROR: &str = "name-error";
    pub const EMAIL: &str = "email";
    pub const EMAIL_ERROR: &str = "email-error";
    pub const PHONE: &str = "phone";
    pub const PHONE_ERROR: &str = "phone-error";
    pub const ORDER_DETAILS: &str = "order-details";
    pub const ORDER_ERROR: &str = "order-error";
    pub const DATE: &str = "date";
    pub const DATE_ERROR: &str = "date-error";
}

/// Serializable description of a page: its elements in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    #[serde(default)]
    pub title: String,

    pub elements: Vec<Element>,
}

impl PageLayout {
    pub fn from_yaml_str(content: &str) -> Result<Self, PageError> {
        serde_yaml::from_str(content).map_err(|e| PageError::Layout {
            context: "page layout".into(),
            source: e,
        })
    }

    pub fn load(path: &str) -> Result<Self, PageError> {
        let content = std::fs::read_to_string(path).map_err(|e| PageError::Io {
            path: path.to_string(),
            source: e,
        })?;
        serde_yaml::from_str(&content).map_err(|e| PageError::Layout {
            context: path.to_string(),
            source: e,
        })
    }
}

const FAQ: [(&str, &str); 3] = [
    (
        "How far in advance should I order?",
        "Please order at least two days ahead for custom designs.",
    ),
    (
        "Do you offer gluten-free cupcakes?",
        "Yes! Ask for our almond flour vanilla and chocolate options.",
    ),
    (
        "Can I pick up my order early?",
        "Pickup starts at 8am on the date you select.",
    ),
];

/// The bakery page as shipped: every element the core binds to, in its initial state.
pub fn default_layout() -> PageLayout {
    let mut elements = vec![
        Element::new(ids::ROOT, "body"),
        Element::new(ids::REVEAL_BUTTON, "button").with_text("Click Me!"),
        Element::new(ids::SECRET_MESSAGE, "p")
            .with_text("Surprise! Your next cupcake comes with extra sprinkles.")
            .with_class(HIDDEN_CLASS),
        Element::new(ids::CUPCAKE, "span").with_text("🧁"),
        Element::new(ids::CUPCAKE_STATUS, "p").with_text("Cupcake is ready for interaction"),
        Element::new(ids::KEYBOARD_INPUT, "input"),
        Element::new(ids::KEYBOARD_OUTPUT, "div").with_text("Your text will appear here"),
        Element::new(ids::THEME_TOGGLE, "button").with_text("Switch to Dark Mode"),
    ];

    for (i, (question, answer)) in FAQ.iter().enumerate() {
        elements.push(
            Element::new(&format!("faq-q{}", i + 1), "button")
                .with_text(&format!("➕ {}", question))
                .with_class(ids::FAQ_QUESTION_CLASS),
        );
        elements.push(
            Element::new(&format!("faq-a{}", i + 1), "div")
                .with_text(answer)
                .with_class(ids::FAQ_ANSWER_CLASS),
        );
    }

    elements.push(Element::new(ids::ORDER_FORM, "form"));
    for (input, error, tag) in [
        (ids::NAME, ids::NAME_ERROR, "input"),
        (ids::EMAIL, ids::EMAIL_ERROR, "input"),
        (ids::PHONE, ids::PHONE_ERROR, "input"),
        (ids::ORDER_DETAILS, ids::ORDER_ERROR, "textarea"),
        (ids::DATE, ids::DATE_ERROR, "input"),
    ] {
        elements.push(Element::new(input, tag));
        elements.push(
            Element::new(error, "span")
                .with_class("error-message")
                .with_style(DISPLAY_STYLE, "none"),
        );
    }
    elements.push(
        Element::new(ids::ORDER_SUCCESS, "div")
            .with_text("Thank you! Your order has been received.")
            .with_class(HIDDEN_CLASS),
    );

    PageLayout {
        title: "Sweet Treats Bakery".to_string(),
        elements,
    }
}
