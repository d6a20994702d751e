//! Display Name Value Object
//!
//! Free-form name shown on stories. NFKC normalized and trimmed; any script
//! is allowed, control characters are not.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::{AuthError, AuthResult};

/// Maximum display name length (in characters)
pub const DISPLAY_NAME_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(raw: impl AsRef<str>) -> AuthResult<Self> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let name = normalized.trim();

        if name.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let length = name.chars().count();
        if length > DISPLAY_NAME_MAX_LENGTH {
            return Err(AuthError::InvalidName(format!(
                "Name must be at most {DISPLAY_NAME_MAX_LENGTH} characters (got {length})"
            )));
        }

        if name.chars().any(char::is_control) {
            return Err(AuthError::InvalidName(
                "Name contains invalid characters".to_string(),
            ));
        }

        Ok(Self(name.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_trimmed() {
        let name = DisplayName::new("  Ana Lima ").unwrap();
        assert_eq!(name.as_str(), "Ana Lima");
        assert_eq!(name.to_string(), "Ana Lima");
    }

    #[test]
    fn test_display_name_nfkc() {
        // Fullwidth letters fold to ASCII
        let name = DisplayName::new("Ａｎａ").unwrap();
        assert_eq!(name.as_str(), "Ana");
    }

    #[test]
    fn test_display_name_invalid() {
        assert!(matches!(DisplayName::new(""), Err(AuthError::MissingFields)));
        assert!(matches!(DisplayName::new("  "), Err(AuthError::MissingFields)));
        assert!(matches!(
            DisplayName::new("a".repeat(DISPLAY_NAME_MAX_LENGTH + 1)),
            Err(AuthError::InvalidName(_))
        ));
        assert!(matches!(
            DisplayName::new("Ana\u{0000}Lima"),
            Err(AuthError::InvalidName(_))
        ));
    }
}
