//! Brazilian real (BRL) currency formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount as Brazilian reais, e.g. `R$ 1.234,56`.
///
/// Rounds half away from zero to two places, groups thousands with `.`
/// and separates cents with `,`. Negative amounts render as
/// `-R$ 1.234,56`.
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let s = format!("{:.2}", rounded.abs());
    let (int_part, cents) = s.split_once('.').unwrap_or((s.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}R$ {},{cents}", group_thousands(int_part))
}

/// Like [`format_brl`], rendering a missing amount as `R$ 0,00`.
pub fn format_brl_opt(value: Option<Decimal>) -> String {
    format_brl(value.unwrap_or(Decimal::ZERO))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
