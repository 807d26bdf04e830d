use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::form::form_model::{Field, FieldResult, FormSnapshot};

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_INVALID: &str = "Please enter a valid phone number";
pub const ORDER_REQUIRED: &str = "Order details are required";
pub const ORDER_TOO_SHORT: &str = "Please provide more details about your order";
pub const DATE_REQUIRED: &str = "Please select a date";
pub const DATE_IN_PAST: &str = "Please select a future date";

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_ORDER_LEN: usize = 10;

/// Date inputs submit `YYYY-MM-DD`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// ASCII digits only; `\d` in `regex` is Unicode-aware.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}$").expect("phone pattern compiles")
});

/// Length in UTF-16 code units, which is what form controls count.
fn text_len(s: &str) -> usize {
    s.encode_utf16().count()
}

pub fn check_name(value: &str) -> Result<(), &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(NAME_REQUIRED)
    } else if text_len(trimmed) < MIN_NAME_LEN {
        Err(NAME_TOO_SHORT)
    } else {
        Ok(())
    }
}

/// The pattern is matched against the untrimmed value.
pub fn check_email(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err(EMAIL_REQUIRED)
    } else if !EMAIL_RE.is_match(value) {
        Err(EMAIL_INVALID)
    } else {
        Ok(())
    }
}

pub fn check_phone(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err(PHONE_REQUIRED)
    } else if !PHONE_RE.is_match(value) {
        Err(PHONE_INVALID)
    } else {
        Ok(())
    }
}

pub fn check_order_details(value: &str) -> Result<(), &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ORDER_REQUIRED)
    } else if text_len(trimmed) < MIN_ORDER_LEN {
        Err(ORDER_TOO_SHORT)
    } else {
        Ok(())
    }
}

/// `today` itself is accepted. A value that is not a date counts as no selection.
pub fn check_date(value: &str, today: NaiveDate) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err(DATE_REQUIRED);
    }
    match NaiveDate::parse_from_str(value.trim(), DATE_FORMAT) {
        Ok(selected) if selected < today => Err(DATE_IN_PAST),
        Ok(_) => Ok(()),
        Err(_) => Err(DATE_REQUIRED),
    }
}

pub fn check_field(field: Field, value: &str, today: NaiveDate) -> Result<(), &'static str> {
    match field {
        Field::Name => check_name(value),
        Field::Email => check_email(value),
        Field::Phone => check_phone(value),
        Field::OrderDetails => check_order_details(value),
        Field::Date => check_date(value, today),
    }
}

/// Check every field of a snapshot without touching any view.
pub fn check_snapshot(snapshot: &FormSnapshot, today: NaiveDate) -> Vec<FieldResult> {
    Field::ALL
        .iter()
        .map(|&field| FieldResult::from_check(field, check_field(field, snapshot.get(field), today)))
        .collect()
}
