//! pt-BR display formatting.
//!
//! Renders amounts, dates, and file sizes the way a Brazilian UI shows
//! them. Missing values render as `N/A` (or `R$ 0,00` for money) instead
//! of failing.
//!
//! # Example
//!
//! ```rust
//! use cadastro::format::*;
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(format_brl(dec!(1234.5)), "R$ 1.234,50");
//! assert_eq!(parse_and_format_date("2024-06-15"), "15/06/2024");
//! assert_eq!(format_file_size(1536), "1.5 KB");
//! ```

mod currency;
mod date;
mod size;

pub use currency::{format_brl, format_brl_opt};
pub use date::{INVALID_DATE, NOT_AVAILABLE, format_date, format_datetime, parse_and_format_date};
pub use size::format_file_size;
