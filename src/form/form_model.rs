use serde::{Deserialize, Serialize};

use crate::view::layout::ids;

/// The five order-form fields, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Phone,
    OrderDetails,
    Date,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::OrderDetails,
        Field::Date,
    ];

    pub fn input_id(self) -> &'static str {
        match self {
            Field::Name => ids::NAME,
            Field::Email => ids::EMAIL,
            Field::Phone => ids::PHONE,
            Field::OrderDetails => ids::ORDER_DETAILS,
            Field::Date => ids::DATE,
        }
    }

    pub fn error_id(self) -> &'static str {
        match self {
            Field::Name => ids::NAME_ERROR,
            Field::Email => ids::EMAIL_ERROR,
            Field::Phone => ids::PHONE_ERROR,
            Field::OrderDetails => ids::ORDER_ERROR,
            Field::Date => ids::DATE_ERROR,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::OrderDetails => "Order details",
            Field::Date => "Date",
        }
    }
}

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldResult {
    pub field: Field,
    pub valid: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldResult {
    pub fn from_check(field: Field, check: Result<(), &'static str>) -> Self {
        match check {
            Ok(()) => FieldResult {
                field,
                valid: true,
                message: None,
            },
            Err(msg) => FieldResult {
                field,
                valid: false,
                message: Some(msg.to_string()),
            },
        }
    }
}

/// The five field values as read at submit time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormSnapshot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub order_details: String,
    #[serde(default)]
    pub date: String,
}

impl FormSnapshot {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::OrderDetails => &self.order_details,
            Field::Date => &self.date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormPhase {
    Editing,
    Success { reset_due_ms: Option<u64> },
}

/// Result of one submit: every field's outcome and whether the form was accepted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitOutcome {
    pub results: Vec<FieldResult>,
    pub accepted: bool,
}

impl SubmitOutcome {
    pub fn from_results(results: Vec<FieldResult>) -> Self {
        let accepted = results.iter().all(|r| r.valid);
        SubmitOutcome { results, accepted }
    }

    pub fn failed_fields(&self) -> Vec<Field> {
        self.results
            .iter()
            .filter(|r| !r.valid)
            .map(|r| r.field)
            .collect()
    }
}
