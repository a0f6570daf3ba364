pub mod api;
pub mod bootstrap;
pub mod components;
pub mod dispatch;
pub mod error;
pub mod form;
pub mod host;
pub mod interop;
pub mod result;

#[cfg(test)]
mod test_support;

pub use bootstrap::PageBootstrap;
pub use components::COVER_STYLES;
pub use form::CoverForm;
pub use result::ResultPage;
