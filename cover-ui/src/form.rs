//! Generate form page.

pub mod actions;
mod components;
pub mod lora_source;
mod page;
pub mod preset;
pub mod state;
pub mod validator;

pub use page::CoverForm;
