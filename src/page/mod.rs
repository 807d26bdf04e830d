pub mod clock;
pub mod event;
pub mod page;
pub mod script;
