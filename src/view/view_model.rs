use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::view::error::PageError;

pub const HIDDEN_CLASS: &str = "hidden";
pub const DISPLAY_STYLE: &str = "display";

/// Stable identifier of a view element, e.g. `reveal-btn`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        ElementId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        ElementId(id.to_string())
    }
}

/// State of one element as the view layer holds it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,

    #[serde(default = "default_tag")]
    pub tag: String,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub value: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub styles: BTreeMap<String, String>,
}

fn default_tag() -> String {
    "div".to_string()
}

impl Element {
    pub fn new(id: &str, tag: &str) -> Self {
        Element {
            id: ElementId::new(id),
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
        self
    }

    pub fn with_style(mut self, prop: &str, value: &str) -> Self {
        self.styles.insert(prop.to_string(), value.to_string());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn set_class(&mut self, class: &str, on: bool) {
        if on {
            if !self.has_class(class) {
                self.classes.push(class.to_string());
            }
        } else {
            self.classes.retain(|c| c != class);
        }
    }

    /// Hidden by class or by `display: none`.
    pub fn is_visible(&self) -> bool {
        !self.has_class(HIDDEN_CLASS)
            && self.styles.get(DISPLAY_STYLE).map(String::as_str) != Some("none")
    }
}

/// The view layer: everything the page core reads from or writes to.
///
/// Accessors on an id the view does not know return
/// [`PageError::MissingElement`].
pub trait View {
    fn contains(&self, id: &ElementId) -> bool;

    fn value(&self, id: &ElementId) -> Result<String, PageError>;
    fn set_value(&mut self, id: &ElementId, value: &str) -> Result<(), PageError>;

    fn text(&self, id: &ElementId) -> Result<String, PageError>;
    fn set_text(&mut self, id: &ElementId, text: &str) -> Result<(), PageError>;

    fn is_visible(&self, id: &ElementId) -> Result<bool, PageError>;
    fn set_visible(&mut self, id: &ElementId, visible: bool) -> Result<(), PageError>;

    fn has_class(&self, id: &ElementId, class: &str) -> Result<bool, PageError>;
    fn set_class(&mut self, id: &ElementId, class: &str, on: bool) -> Result<(), PageError>;

    fn style(&self, id: &ElementId, prop: &str) -> Result<Option<String>, PageError>;
    fn set_style(&mut self, id: &ElementId, prop: &str, value: &str) -> Result<(), PageError>;

    /// Ids of all elements carrying `class`, in document order.
    fn query_class(&self, class: &str) -> Vec<ElementId>;

    /// The element that follows `id` in document order.
    fn next_sibling(&self, id: &ElementId) -> Option<ElementId>;

    /// Digest of the whole view state, if the view can produce one.
    fn fingerprint(&self) -> Option<String> {
        None
    }

    /// Flip `class` on the element and return whether it is now present.
    fn toggle_class(&mut self, id: &ElementId, class: &str) -> Result<bool, PageError> {
        let on = !self.has_class(id, class)?;
        self.set_class(id, class, on)?;
        Ok(on)
    }
}
