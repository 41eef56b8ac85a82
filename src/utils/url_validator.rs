//! Validation of submitted URLs.
//!
//! A URL is accepted only if it is an absolute `http`/`https` URI with an
//! authority component, written entirely in URI characters.

use url::Url;

/// Reasons a candidate URL is rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid character {0:?} in URL")]
    InvalidCharacter(char),

    #[error("Malformed percent-encoding in URL")]
    MalformedEscape,

    #[error("URL has no scheme")]
    MissingScheme,

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no authority component")]
    MissingAuthority,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),
}

/// Returns `true` if `candidate` is a well-formed absolute web URL.
///
/// Pure function: no I/O and no DNS resolution.
pub fn is_valid_url(candidate: &str) -> bool {
    validate_url(candidate).is_ok()
}

/// Validates `candidate` and reports why it was rejected.
///
/// # Rules
///
/// 1. **Characters**: only ASCII unreserved/reserved URI characters and `%`
/// 2. **Escapes**: every `%` is followed by two hex digits
/// 3. **Scheme**: `http` or `https` (any case), followed by `//`
/// 4. **Authority**: non-empty, and the URL parses with a host
///
/// # Errors
///
/// Returns the first [`UrlValidationError`] encountered.
///
/// # Examples
///
/// ```
/// use shorturl::utils::url_validator::{UrlValidationError, validate_url};
///
/// assert!(validate_url("https://www.freecodecamp.org").is_ok());
/// assert_eq!(
///     validate_url("ftp://example.com"),
///     Err(UrlValidationError::UnsupportedProtocol)
/// );
/// ```
pub fn validate_url(candidate: &str) -> Result<(), UrlValidationError> {
    if candidate.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if let Some(c) = candidate.chars().find(|c| !is_uri_char(*c)) {
        return Err(UrlValidationError::InvalidCharacter(c));
    }

    check_escapes(candidate)?;

    let (scheme, rest) = candidate
        .split_once(':')
        .ok_or(UrlValidationError::MissingScheme)?;

    if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
        return Err(UrlValidationError::UnsupportedProtocol);
    }

    let authority = rest
        .strip_prefix("//")
        .map(|r| r.split(['/', '?', '#']).next().unwrap_or_default())
        .ok_or(UrlValidationError::MissingAuthority)?;

    if authority.is_empty() {
        return Err(UrlValidationError::MissingAuthority);
    }

    let url =
        Url::parse(candidate).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingAuthority),
    }
}

fn is_uri_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ":/?#[]@!$&'()*+,;=.-_~%".contains(c)
}

fn check_escapes(candidate: &str) -> Result<(), UrlValidationError> {
    let bytes = candidate.as_bytes();

    for (i, b) in bytes.iter().enumerate() {
        if *b != b'%' {
            continue;
        }

        let escape = bytes.get(i + 1..i + 3);
        if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            return Err(UrlValidationError::MalformedEscape);
        }
    }

    Ok(())
}
