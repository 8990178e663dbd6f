//! storefront-core: domain primitives for the storefront catalog
//!
//! Pure logic shared across the data layer. No database or runtime
//! dependencies live here.

pub mod slug;
pub mod views;

pub use slug::slugify;
pub use views::{NoopViewInvalidator, RecordingViewInvalidator, ViewInvalidator};
