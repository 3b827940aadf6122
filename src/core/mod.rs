//! Core tax-identifier types, validation, and formatting.
//!
//! Brazil issues two taxpayer identifiers: the 11-digit CPF for
//! individuals and the 14-digit CNPJ for organizations. Both end in two
//! modulo-11 check digits. This module validates and punctuates them
//! and offers a typed [`TaxId`] for code that wants to carry a value
//! that is known to be valid.

mod error;
mod tax_id;
mod types;
mod validation;

pub use error::*;
pub use tax_id::*;
pub use types::*;
pub use validation::*;
