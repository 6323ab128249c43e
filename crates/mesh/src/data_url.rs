//! Base64 data-URL handling for untrusted inline payloads.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::GeometryError;

/// Decode a `data:<mime>;base64,<payload>` string into raw bytes.
///
/// The declared MIME type must equal `expected_mime`; it is checked but not
/// otherwise interpreted. Only Base64-encoded data URLs are accepted.
pub fn data_url_to_bytes(data_url: &str, expected_mime: &str) -> Result<Vec<u8>, GeometryError> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or(GeometryError::NotADataUrl)?;
    let (header, payload) = rest.split_once(',').ok_or(GeometryError::NotADataUrl)?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or(GeometryError::NotADataUrl)?;
    if mime != expected_mime {
        return Err(GeometryError::MimeMismatch {
            expected: expected_mime.to_string(),
            found: mime.to_string(),
        });
    }
    STANDARD
        .decode(payload.trim())
        .map_err(|err| GeometryError::InvalidBase64(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_well_formed_data_url() {
        let url = format!("data:text/plain;base64,{}", STANDARD.encode("hello"));
        let bytes = data_url_to_bytes(&url, "text/plain").unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn rejects_inputs_without_the_data_scheme() {
        let err = data_url_to_bytes("http://example.com", "text/plain").unwrap_err();
        assert_eq!(err, GeometryError::NotADataUrl);
    }

    #[test]
    fn rejects_non_base64_data_urls() {
        let err = data_url_to_bytes("data:text/plain,hello", "text/plain").unwrap_err();
        assert_eq!(err, GeometryError::NotADataUrl);
    }

    #[test]
    fn rejects_a_mismatched_mime_type() {
        let url = format!("data:text/plain;base64,{}", STANDARD.encode("hello"));
        let err = data_url_to_bytes(&url, "application/3d-json").unwrap_err();
        assert!(matches!(err, GeometryError::MimeMismatch { .. }));
    }

    #[test]
    fn rejects_broken_base64() {
        let err = data_url_to_bytes("data:text/plain;base64,!!!!", "text/plain").unwrap_err();
        assert!(matches!(err, GeometryError::InvalidBase64(_)));
    }
}
