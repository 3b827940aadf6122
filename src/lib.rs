//! # cadastro
//!
//! Registry helpers for Brazilian business software: CPF/CNPJ
//! validation and formatting, pt-BR display formatting, and a typed
//! configuration object for the REST backend the UI talks to.
//!
//! Monetary values use `rust_decimal::Decimal`, never floating point.
//! Every validator is a pure, total function: malformed input yields
//! `false` (or an unchanged digit string), never a panic.
//!
//! ## Quick Start
//!
//! ```rust
//! use cadastro::core::*;
//!
//! assert!(validate_cpf("529.982.247-25"));
//! assert!(validate_cnpj("11.444.777/0001-61"));
//! assert!(!validate_cpf("111.111.111-11"));
//!
//! assert_eq!(format_cpf("52998224725"), "529.982.247-25");
//! assert_eq!(format_cnpj("11444777000161"), "11.444.777/0001-61");
//!
//! let id: TaxId = "11444777000161".parse().unwrap();
//! assert_eq!(id.kind(), TaxIdKind::Organization);
//! assert_eq!(id.person_type(), PersonType::PJ);
//! assert_eq!(id.to_string(), "11.444.777/0001-61");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | CPF/CNPJ validation, formatting, typed [`TaxId`](core::TaxId); e-mail shape check |
//! | `format` | BRL currency, date, file-size formatting |
//! | `api` | Typed backend configuration: endpoints, auth scheme, status messages |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "format")]
pub mod format;

#[cfg(feature = "api")]
pub mod api;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
