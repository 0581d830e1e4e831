//! Log-safe views of customer data
//!
//! Order events go to the structured log, so contact details are masked
//! before they are formatted.

use std::fmt;

/// Keeps the first two characters of the local part and the whole domain
///
/// ```
/// use boost_desk::logging::MaskedEmail;
///
/// assert_eq!(MaskedEmail::new("player@example.com").to_string(), "pl***@example.com");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MaskedEmail<'a> {
    inner: &'a str,
}

impl<'a> MaskedEmail<'a> {
    pub fn new(email: &'a str) -> Self {
        Self { inner: email }
    }
}

impl fmt::Display for MaskedEmail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.split_once('@') {
            Some((local, domain)) => write!(f, "{}@{}", mask_prefix(local, 2), domain),
            None => write!(f, "***"),
        }
    }
}

/// Keeps the first two characters of a chat handle
///
/// ```
/// use boost_desk::logging::MaskedHandle;
///
/// assert_eq!(MaskedHandle::new("Player#1234").to_string(), "Pl***");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MaskedHandle<'a> {
    inner: &'a str,
}

impl<'a> MaskedHandle<'a> {
    pub fn new(handle: &'a str) -> Self {
        Self { inner: handle }
    }
}

impl fmt::Display for MaskedHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mask_prefix(self.inner, 2))
    }
}

fn mask_prefix(value: &str, visible: usize) -> String {
    // short values are hidden entirely
    if value.chars().count() <= visible {
        return "***".to_string();
    }
    let prefix: String = value.chars().take(visible).collect();
    format!("{}***", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_email() {
        assert_eq!(MaskedEmail::new("john.doe@example.com").to_string(), "jo***@example.com");
        assert_eq!(MaskedEmail::new("jo@example.com").to_string(), "***@example.com");
        assert_eq!(MaskedEmail::new("not-an-email").to_string(), "***");
    }

    #[test]
    fn test_masked_handle() {
        assert_eq!(MaskedHandle::new("Player#1234").to_string(), "Pl***");
        assert_eq!(MaskedHandle::new("ab").to_string(), "***");
    }

    #[test]
    fn test_masking_is_char_safe() {
        assert_eq!(MaskedHandle::new("Ünïcode").to_string(), "Ün***");
    }
}
