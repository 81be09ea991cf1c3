//! Browser side of the viewport workaround.

use privacymail_core::ViewportAdjustment;

/// Pins the document's viewport meta tag to the current window size.
///
/// Outside the browser there is no window to measure.
pub fn adjust_browser_viewport() -> ViewportAdjustment {
    #[cfg(feature = "hydrate")]
    {
        let outcome = match browser::BrowserViewport::current() {
            Some(host) => privacymail_core::adjust_viewport(&host),
            None => ViewportAdjustment::NoWindow,
        };
        // No tracing subscriber runs in the browser.
        if let Some(message) = console_warning(&outcome) {
            web_sys::console::warn_1(&message.into());
        }
        outcome
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ViewportAdjustment::NoWindow
    }
}

/// Message to surface on the browser console for an outcome, if any.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn console_warning(outcome: &ViewportAdjustment) -> Option<String> {
    match outcome {
        ViewportAdjustment::WriteRejected(e) => Some(format!("failed to pin viewport: {e}")),
        _ => None,
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use privacymail_core::{
        VIEWPORT_META_SELECTOR, ViewportDescriptor, ViewportError, ViewportHost,
    };
    use web_sys::{Element, Window};

    /// The live `window`/`document` pair.
    pub struct BrowserViewport {
        window: Window,
    }

    impl BrowserViewport {
        pub fn current() -> Option<Self> {
            web_sys::window().map(|window| Self { window })
        }
    }

    impl ViewportHost for BrowserViewport {
        type Meta = Element;

        fn viewport_size(&self) -> Option<ViewportDescriptor> {
            let height = self.window.inner_height().ok()?.as_f64()?;
            let width = self.window.inner_width().ok()?.as_f64()?;
            ViewportDescriptor::from_css_pixels(height, width)
        }

        fn find_viewport_meta(&self) -> Option<Element> {
            self.window
                .document()?
                .query_selector(VIEWPORT_META_SELECTOR)
                .ok()
                .flatten()
        }

        fn set_meta_content(&self, meta: &Element, content: &str) -> Result<(), ViewportError> {
            meta.set_attribute("content", content)
                .map_err(|e| ViewportError::AttributeRejected {
                    reason: format!("{e:?}"),
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use privacymail_core::{ViewportDescriptor, ViewportError};

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn no_window_outside_browser() {
        assert_eq!(adjust_browser_viewport(), ViewportAdjustment::NoWindow);
    }

    #[test]
    fn rejected_write_is_surfaced_on_console() {
        let outcome = ViewportAdjustment::WriteRejected(ViewportError::AttributeRejected {
            reason: "NoModificationAllowedError".to_string(),
        });
        assert_eq!(
            console_warning(&outcome).as_deref(),
            Some("failed to pin viewport: viewport meta update rejected: NoModificationAllowedError")
        );
    }

    #[test]
    fn quiet_outcomes_stay_off_console() {
        for outcome in [
            ViewportAdjustment::Applied(ViewportDescriptor::new(800, 400)),
            ViewportAdjustment::MetaMissing,
            ViewportAdjustment::SizeUnavailable,
            ViewportAdjustment::NoWindow,
        ] {
            assert_eq!(console_warning(&outcome), None);
        }
    }
}
