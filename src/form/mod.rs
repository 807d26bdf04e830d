pub mod form_model;
pub mod reset_timer;
pub mod rules;
pub mod submit;
pub mod validator;
