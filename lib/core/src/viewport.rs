//! Mobile viewport workaround.
//!
//! On Android phones, opening the on-screen keyboard shrinks the layout
//! viewport and reflows the page. Pinning the viewport meta tag to the size
//! measured at mount keeps the layout stable; the cost is that the browser's
//! URL bar no longer hides on scroll.

use crate::error::ViewportError;
use std::fmt;

/// CSS selector for the document's viewport meta element.
pub const VIEWPORT_META_SELECTOR: &str = "meta[name=viewport]";

/// Pixel size of the viewport captured at mount time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportDescriptor {
    pub height_px: u32,
    pub width_px: u32,
}

impl ViewportDescriptor {
    #[must_use]
    pub const fn new(height_px: u32, width_px: u32) -> Self {
        Self {
            height_px,
            width_px,
        }
    }

    /// Builds a descriptor from CSS pixel sizes as reported by the browser.
    ///
    /// Fractional sizes are rounded. Returns `None` for negative, non-finite
    /// or out-of-range values.
    #[must_use]
    pub fn from_css_pixels(height: f64, width: f64) -> Option<Self> {
        Some(Self::new(to_px(height)?, to_px(width)?))
    }

    /// The `content` attribute value for the viewport meta tag.
    #[must_use]
    pub fn meta_content(&self) -> String {
        self.to_string()
    }
}

fn to_px(value: f64) -> Option<u32> {
    let rounded = value.round();
    if !rounded.is_finite() || rounded < 0.0 || rounded > f64::from(u32::MAX) {
        return None;
    }
    // Range checked above.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let px = rounded as u32;
    Some(px)
}

impl fmt::Display for ViewportDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "height={}px, width={}px, initial-scale=1.0",
            self.height_px, self.width_px
        )
    }
}

/// Access to the document hosting the shell.
pub trait ViewportHost {
    /// Handle to the viewport meta element.
    type Meta;

    /// Current viewport size, if the host can report one.
    fn viewport_size(&self) -> Option<ViewportDescriptor>;

    /// Looks up the viewport meta element.
    fn find_viewport_meta(&self) -> Option<Self::Meta>;

    /// Overwrites the meta element's `content` attribute.
    fn set_meta_content(&self, meta: &Self::Meta, content: &str) -> Result<(), ViewportError>;
}

/// Outcome of a viewport adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewportAdjustment {
    /// The meta tag now pins this size.
    Applied(ViewportDescriptor),
    /// The document has no viewport meta element; nothing was written.
    MetaMissing,
    /// The host could not report a usable size; nothing was written.
    SizeUnavailable,
    /// No browser window is available.
    NoWindow,
    /// The host refused the write.
    WriteRejected(ViewportError),
}

/// Pins the viewport meta tag to the host's current size.
///
/// Never fails: a missing meta element or a rejected write leave the
/// document untouched and are reported in the returned outcome.
pub fn adjust_viewport<H: ViewportHost>(host: &H) -> ViewportAdjustment {
    let Some(size) = host.viewport_size() else {
        tracing::debug!("viewport size unavailable, leaving meta tag untouched");
        return ViewportAdjustment::SizeUnavailable;
    };

    let Some(meta) = host.find_viewport_meta() else {
        tracing::debug!("no viewport meta element");
        return ViewportAdjustment::MetaMissing;
    };

    match host.set_meta_content(&meta, &size.meta_content()) {
        Ok(()) => {
            tracing::debug!(
                height_px = size.height_px,
                width_px = size.width_px,
                "pinned viewport"
            );
            ViewportAdjustment::Applied(size)
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to pin viewport");
            ViewportAdjustment::WriteRejected(e)
        }
    }
}
