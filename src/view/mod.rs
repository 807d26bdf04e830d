pub mod bindings;
pub mod error;
pub mod layout;
pub mod memory;
pub mod snapshot;
pub mod view_model;
