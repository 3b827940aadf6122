//! CPF / CNPJ normalization, check-digit validation, and formatting.

use super::types::TaxIdKind;

/// Number of digits in a CPF.
pub const CPF_LEN: usize = 11;

/// Number of digits in a CNPJ.
pub const CNPJ_LEN: usize = 14;

/// Strip every character that is not an ASCII decimal digit.
///
/// Digits keep their relative order. Empty input yields an empty string.
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Numeric digit values of `input`, punctuation dropped.
pub(crate) fn digit_values(input: &str) -> Vec<u8> {
    input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

pub(crate) fn all_same(digits: &[u8]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

/// One CPF check digit over `digits` (9 base digits, or 10 for the second).
///
/// Weights run from `len + 1` down to 2.
fn cpf_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (top - i as u32))
        .sum();
    let rest = (sum * 10) % 11;
    if rest >= 10 { 0 } else { rest as u8 }
}

/// One CNPJ check digit over `digits` (12 base digits, or 13 for the second).
///
/// The weight starts at `len - 7` (5 or 6) and cycles 9..=2.
fn cnpj_digit(digits: &[u8]) -> u8 {
    let mut weight = digits.len() as u32 - 7;
    let mut sum = 0u32;
    for &d in digits {
        sum += u32::from(d) * weight;
        weight -= 1;
        if weight < 2 {
            weight = 9;
        }
    }
    let rest = sum % 11;
    if rest < 2 { 0 } else { (11 - rest) as u8 }
}

fn cpf_pair(base: &[u8]) -> [u8; 2] {
    let mut digits = base.to_vec();
    let first = cpf_digit(&digits);
    digits.push(first);
    [first, cpf_digit(&digits)]
}

fn cnpj_pair(base: &[u8]) -> [u8; 2] {
    let mut digits = base.to_vec();
    let first = cnpj_digit(&digits);
    digits.push(first);
    [first, cnpj_digit(&digits)]
}

/// Compute the two CPF check digits for a 9-digit base.
///
/// Punctuation in `base` is ignored. Returns `None` unless exactly nine
/// digits remain. Repeated-digit bases are not rejected here; they
/// produce check digits like any other base.
pub fn cpf_check_digits(base: &str) -> Option<[u8; 2]> {
    let digits = digit_values(base);
    (digits.len() == CPF_LEN - 2).then(|| cpf_pair(&digits))
}

/// Compute the two CNPJ check digits for a 12-digit base.
///
/// Same contract as [`cpf_check_digits`], for twelve digits.
pub fn cnpj_check_digits(base: &str) -> Option<[u8; 2]> {
    let digits = digit_values(base);
    (digits.len() == CNPJ_LEN - 2).then(|| cnpj_pair(&digits))
}

pub(crate) fn cpf_digits_valid(digits: &[u8]) -> bool {
    digits.len() == CPF_LEN && !all_same(digits) && cpf_pair(&digits[..9]) == digits[9..]
}

pub(crate) fn cnpj_digits_valid(digits: &[u8]) -> bool {
    digits.len() == CNPJ_LEN && !all_same(digits) && cnpj_pair(&digits[..12]) == digits[12..]
}

/// Validate a CPF (individual taxpayer number).
///
/// Accepts bare digits or the punctuated `DDD.DDD.DDD-DD` form; any
/// non-digit character is ignored. Returns `false` for wrong length,
/// a single repeated digit, or mismatching check digits.
pub fn validate_cpf(input: &str) -> bool {
    cpf_digits_valid(&digit_values(input))
}

/// Validate a CNPJ (organization taxpayer number).
///
/// Accepts bare digits or the punctuated `DD.DDD.DDD/DDDD-DD` form.
pub fn validate_cnpj(input: &str) -> bool {
    cnpj_digits_valid(&digit_values(input))
}

/// Guess the identifier kind from its digit count alone.
///
/// 11 digits is a CPF, 14 a CNPJ; anything else is `None`. No checksum
/// is computed.
pub fn detect_kind(input: &str) -> Option<TaxIdKind> {
    match digit_values(input).len() {
        CPF_LEN => Some(TaxIdKind::Individual),
        CNPJ_LEN => Some(TaxIdKind::Organization),
        _ => None,
    }
}

/// Validate a CPF or CNPJ, dispatching on the digit count.
pub fn validate_tax_id(input: &str) -> bool {
    let digits = digit_values(input);
    match digits.len() {
        CPF_LEN => cpf_digits_valid(&digits),
        CNPJ_LEN => cnpj_digits_valid(&digits),
        _ => false,
    }
}

/// Punctuate a CPF as `DDD.DDD.DDD-DD`.
///
/// If the input does not hold exactly 11 digits, the normalized digit
/// string is returned unchanged.
pub fn format_cpf(input: &str) -> String {
    let d = normalize(input);
    if d.len() != CPF_LEN {
        return d;
    }
    format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..])
}

/// Punctuate a CNPJ as `DD.DDD.DDD/DDDD-DD`.
///
/// If the input does not hold exactly 14 digits, the normalized digit
/// string is returned unchanged.
pub fn format_cnpj(input: &str) -> String {
    let d = normalize(input);
    if d.len() != CNPJ_LEN {
        return d;
    }
    format!(
        "{}.{}.{}/{}-{}",
        &d[..2],
        &d[2..5],
        &d[5..8],
        &d[8..12],
        &d[12..]
    )
}

/// Punctuate a CPF or CNPJ according to its digit count.
pub fn format_tax_id(input: &str) -> String {
    match detect_kind(input) {
        Some(TaxIdKind::Individual) => format_cpf(input),
        Some(TaxIdKind::Organization) => format_cnpj(input),
        None => normalize(input),
    }
}
