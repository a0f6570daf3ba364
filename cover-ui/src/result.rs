//! Result page: the generated cover and its follow-up actions.

pub mod actions;
mod page;

pub use page::{ResultPage, COVER_REVEAL_DELAY_MS};
