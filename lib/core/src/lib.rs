//! Host-independent building blocks for the PrivacyMail web shell.
//!
//! This crate holds what the shell decides without touching a browser:
//! how service names are carried in route links, how the viewport meta tag
//! is rewritten, and the one-shot mount hook that drives that rewrite.

pub mod error;
pub mod lifecycle;
pub mod route;
pub mod viewport;

pub use error::ViewportError;
pub use lifecycle::MountHook;
pub use route::{SERVICE_PREFIX, decode_service_id, service_path};
pub use viewport::{
    VIEWPORT_META_SELECTOR, ViewportAdjustment, ViewportDescriptor, ViewportHost, adjust_viewport,
};
