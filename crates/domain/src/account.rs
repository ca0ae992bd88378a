//! Accounts: per-employee credentials in one of five external systems.
//!
//! Account rows have no fixed shape at this layer: the caller's JSON object is
//! the row. Its keys name the columns and its values fill them. Only the
//! table is chosen here, through the `sub` selector.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A caller-shaped account row: column name → value.
pub type AccountRecord = serde_json::Map<String, serde_json::Value>;

/// The account family a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    Domain,
    Email,
    Gmail,
    Erp,
    Bpm,
}

impl AccountKind {
    /// Every account kind, in selector order.
    pub const ALL: [Self; 5] = [Self::Domain, Self::Email, Self::Gmail, Self::Erp, Self::Bpm];

    /// The `sub` query value selecting this kind.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Email => "email",
            Self::Gmail => "gmail",
            Self::Erp => "erp",
            Self::Bpm => "bpm",
        }
    }

    /// The table holding accounts of this kind.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Domain => "domain_account",
            Self::Email => "email_account",
            Self::Gmail => "gmail_account",
            Self::Erp => "erp_account",
            Self::Bpm => "bpm_account",
        }
    }

    /// Resolve an optional `sub` query value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingAccountKind`] when the selector is
    /// absent or empty, and [`ValidationError::InvalidAccountKind`] when it
    /// names no known kind.
    pub fn from_selector(selector: Option<&str>) -> Result<Self, ValidationError> {
        match selector {
            None | Some("") => Err(ValidationError::MissingAccountKind),
            Some(value) => value.parse(),
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for AccountKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.selector() == s)
            .ok_or_else(|| ValidationError::InvalidAccountKind(s.to_string()))
    }
}
