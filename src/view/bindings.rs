use crate::form::form_model::Field;
use crate::view::error::PageError;
use crate::view::layout::ids;
use crate::view::view_model::{ElementId, View};

/// One collapsible FAQ entry: a question and the answer that follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct FaqItem {
    pub question: ElementId,
    pub answer: ElementId,
}

/// A form field's input element and its error-display element.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBinding {
    pub field: Field,
    pub input: ElementId,
    pub error: ElementId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormBindings {
    pub form: ElementId,
    pub success: ElementId,
    pub fields: Vec<FieldBinding>,
}

impl FormBindings {
    pub fn field(&self, field: Field) -> Option<&FieldBinding> {
        self.fields.iter().find(|b| b.field == field)
    }

    pub fn by_input(&self, input: &ElementId) -> Option<&FieldBinding> {
        self.fields.iter().find(|b| &b.input == input)
    }
}

/// Handles to every element the page core touches, resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct PageBindings {
    pub root: ElementId,
    pub reveal_button: ElementId,
    pub secret_message: ElementId,
    pub cupcake: ElementId,
    pub cupcake_status: ElementId,
    pub keyboard_input: ElementId,
    pub keyboard_output: ElementId,
    pub theme_toggle: ElementId,
    pub faq: Vec<FaqItem>,
    pub form: FormBindings,
}

impl PageBindings {
    /// Resolve all bindings against `view`.
    ///
    /// Fails with [`PageError::MissingElement`] on the first element the view
    /// does not contain. A FAQ question with no following element is missing
    /// its answer.
    pub fn resolve<V: View>(view: &V) -> Result<Self, PageError> {
        let faq = view
            .query_class(ids::FAQ_QUESTION_CLASS)
            .into_iter()
            .map(|question| -> Result<FaqItem, PageError> {
                let answer = view.next_sibling(&question).ok_or_else(|| {
                    PageError::missing(
                        &format!("{}+answer", question),
                        "FAQ question has no following answer",
                    )
                })?;
                Ok(FaqItem { question, answer })
            })
            .collect::<Result<Vec<_>, PageError>>()?;

        let fields = Field::ALL
            .iter()
            .map(|&field| -> Result<FieldBinding, PageError> {
                Ok(FieldBinding {
                    field,
                    input: require(view, field.input_id())?,
                    error: require(view, field.error_id())?,
                })
            })
            .collect::<Result<Vec<_>, PageError>>()?;

        Ok(PageBindings {
            root: require(view, ids::ROOT)?,
            reveal_button: require(view, ids::REVEAL_BUTTON)?,
            secret_message: require(view, ids::SECRET_MESSAGE)?,
            cupcake: require(view, ids::CUPCAKE)?,
            cupcake_status: require(view, ids::CUPCAKE_STATUS)?,
            keyboard_input: require(view, ids::KEYBOARD_INPUT)?,
            keyboard_output: require(view, ids::KEYBOARD_OUTPUT)?,
            theme_toggle: require(view, ids::THEME_TOGGLE)?,
            faq,
            form: FormBindings {
                form: require(view, ids::ORDER_FORM)?,
                success: require(view, ids::ORDER_SUCCESS)?,
                fields,
            },
        })
    }

    pub fn faq_item(&self, question: &ElementId) -> Option<&FaqItem> {
        self.faq.iter().find(|item| &item.question == question)
    }
}

fn require<V: View>(view: &V, id: &str) -> Result<ElementId, PageError> {
    let id = ElementId::new(id);
    if view.contains(&id) {
        Ok(id)
    } else {
        Err(PageError::missing(id.as_str(), "required at page initialization"))
    }
}
