pub mod faq;
pub mod keyboard;
pub mod toggles;
