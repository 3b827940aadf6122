use thiserror::Error;

use super::types::TaxIdKind;

/// Errors that can occur when parsing a typed [`TaxId`](super::TaxId).
///
/// The boolean validators never return these; they exist for callers
/// that need to tell the user *why* an identifier was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TaxIdError {
    /// The input contained no digits at all.
    #[error("tax ID is empty")]
    Empty,

    /// The digit count is neither 11 (CPF) nor 14 (CNPJ).
    #[error("tax ID must have 11 (CPF) or 14 (CNPJ) digits, got {len}")]
    InvalidLength {
        /// Number of digits found after stripping punctuation.
        len: usize,
    },

    /// Every digit is the same (e.g. "000.000.000-00").
    #[error("tax ID consists of a single repeated digit")]
    RepeatedDigits,

    /// The two trailing check digits do not match the base digits.
    #[error("{kind} check digits do not match")]
    CheckDigitMismatch {
        /// Which identifier kind was being checked.
        kind: TaxIdKind,
    },

    /// The identifier is valid but of the wrong kind for its use.
    #[error("expected a {expected}, got a {found}")]
    KindMismatch {
        /// Kind the caller asked for.
        expected: TaxIdKind,
        /// Kind the input turned out to be.
        found: TaxIdKind,
    },
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the invalid field (e.g. "tax_id").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    /// Create a validation error for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
