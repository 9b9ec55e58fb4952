//! Long URL validation.

use std::borrow::Cow;

use url::Url;
use validator::ValidationError;

/// Returns true if `candidate` parses as an absolute URL.
///
/// Relative references, bare hostnames and empty strings are rejected. The
/// scheme is not restricted.
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}

/// Returns the text to persist for `candidate`, or `None` if it is not an
/// absolute URL.
///
/// URLs are kept verbatim, except that a URL containing a NUL byte is replaced
/// by its serialized form (`%00`), since PostgreSQL `TEXT` cannot hold NUL.
pub fn storable_url(candidate: &str) -> Option<Cow<'_, str>> {
    let url = Url::parse(candidate).ok()?;

    if candidate.contains('\0') {
        Some(Cow::Owned(url.into()))
    } else {
        Some(Cow::Borrowed(candidate))
    }
}

/// `validator` hook for request DTOs.
pub fn validate_long_url(candidate: &str) -> Result<(), ValidationError> {
    if is_valid_url(candidate) {
        Ok(())
    } else {
        Err(ValidationError::new("url"))
    }
}
