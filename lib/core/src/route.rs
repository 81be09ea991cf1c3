//! Links into the shell's routes.
//!
//! The routes themselves are declared with `leptos_router` in the web crate.
//! Service names travel in the `:id` segment of `/service/:id`, so they are
//! percent-encoded on the way in and decoded on the way out.

/// Path prefix of the newsletter route.
pub const SERVICE_PREFIX: &str = "/service/";

/// Builds the newsletter page path for a service name.
///
/// The name is trimmed and percent-encoded. Returns `None` for names that
/// would not decode back to the same service: empty after trimming, or
/// containing `/` or `%`.
#[must_use]
pub fn service_path(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() || name.contains(['/', '%']) {
        return None;
    }
    Some(format!("{SERVICE_PREFIX}{}", urlencoding::encode(name)))
}

/// Decodes an `:id` route parameter into the service name.
///
/// Invalid escapes are left as they are.
#[must_use]
pub fn decode_service_id(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            tracing::debug!(raw, error = %e, "service id is not valid percent-encoding");
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Takes the `:id` segment back out of a built link.
    fn id_segment(path: &str) -> &str {
        path.strip_prefix(SERVICE_PREFIX).expect("newsletter path")
    }

    #[test]
    fn plain_names_are_kept_readable() {
        assert_eq!(
            service_path(" acme.com "),
            Some("/service/acme.com".to_string())
        );
        assert_eq!(
            service_path("news-letter_1~x"),
            Some("/service/news-letter_1~x".to_string())
        );
    }

    #[test]
    fn reserved_characters_are_encoded() {
        assert_eq!(
            service_path("acme?ref=x"),
            Some("/service/acme%3Fref%3Dx".to_string())
        );
        assert_eq!(
            service_path("news#letter"),
            Some("/service/news%23letter".to_string())
        );
        assert_eq!(service_path("a b"), Some("/service/a%20b".to_string()));
    }

    #[test]
    fn names_round_trip_through_the_id_segment() {
        for name in ["acme.com", "acme?ref=x", "news#letter", "a b", "bücher.de", "ニュース"] {
            let path = service_path(name).expect("should build");
            let segment = id_segment(&path);
            assert!(
                !segment.contains(['?', '#', ' ', '/']),
                "{segment} leaks a delimiter"
            );
            assert!(segment.is_ascii());
            assert_eq!(decode_service_id(segment), name);
        }
    }

    #[test]
    fn unroutable_names_are_rejected() {
        assert_eq!(service_path(""), None);
        assert_eq!(service_path("   "), None);
        assert_eq!(service_path("a/b"), None);
        assert_eq!(service_path("100%"), None);
    }

    #[test]
    fn decoding_plain_ids_is_identity() {
        assert_eq!(decode_service_id("acme.com"), "acme.com");
        assert_eq!(decode_service_id("bücher.de"), "bücher.de");
    }

    #[test]
    fn invalid_escapes_are_kept() {
        assert_eq!(decode_service_id("%FF"), "%FF");
    }
}
