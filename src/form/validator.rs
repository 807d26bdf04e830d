use chrono::NaiveDate;

use crate::form::form_model::{Field, FieldResult};
use crate::form::rules::check_field;
use crate::view::bindings::{FieldBinding, FormBindings};
use crate::view::error::PageError;
use crate::view::view_model::{ElementId, View};

pub fn show_error<V: View>(view: &mut V, error: &ElementId, message: &str) -> Result<(), PageError> {
    view.set_text(error, message)?;
    view.set_visible(error, true)
}

pub fn clear_error<V: View>(view: &mut V, error: &ElementId) -> Result<(), PageError> {
    view.set_text(error, "")?;
    view.set_visible(error, false)
}

/// Validate one field against its current input value and refresh its error display.
pub fn validate_binding<V: View>(
    view: &mut V,
    binding: &FieldBinding,
    today: NaiveDate,
) -> Result<FieldResult, PageError> {
    let value = view.value(&binding.input)?;
    let result = FieldResult::from_check(binding.field, check_field(binding.field, &value, today));

    match &result.message {
        Some(message) => show_error(view, &binding.error, message)?,
        None => clear_error(view, &binding.error)?,
    }

    Ok(result)
}

pub fn validate_field<V: View>(
    view: &mut V,
    form: &FormBindings,
    field: Field,
    today: NaiveDate,
) -> Result<FieldResult, PageError> {
    let binding = form
        .field(field)
        .ok_or_else(|| PageError::missing(field.input_id(), "field is not bound"))?;
    validate_binding(view, binding, today)
}

pub fn validate_name<V: View>(view: &mut V, form: &FormBindings, today: NaiveDate) -> Result<bool, PageError> {
    Ok(validate_field(view, form, Field::Name, today)?.valid)
}

pub fn validate_email<V: View>(view: &mut V, form: &FormBindings, today: NaiveDate) -> Result<bool, PageError> {
    Ok(validate_field(view, form, Field::Email, today)?.valid)
}

pub fn validate_phone<V: View>(view: &mut V, form: &FormBindings, today: NaiveDate) -> Result<bool, PageError> {
    Ok(validate_field(view, form, Field::Phone, today)?.valid)
}

pub fn validate_order<V: View>(view: &mut V, form: &FormBindings, today: NaiveDate) -> Result<bool, PageError> {
    Ok(validate_field(view, form, Field::OrderDetails, today)?.valid)
}

pub fn validate_date<V: View>(view: &mut V, form: &FormBindings, today: NaiveDate) -> Result<bool, PageError> {
    Ok(validate_field(view, form, Field::Date, today)?.valid)
}

/// Run every field validator. Never short-circuits: each error display is refreshed.
pub fn validate_all<V: View>(
    view: &mut V,
    form: &FormBindings,
    today: NaiveDate,
) -> Result<Vec<FieldResult>, PageError> {
    form.fields
        .iter()
        .map(|binding| validate_binding(view, binding, today))
        .collect()
}
