use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::TaxIdError;
use super::tax_id::{
    CNPJ_LEN, CPF_LEN, all_same, cnpj_digits_valid, cpf_digits_valid, digit_values, format_cnpj,
    format_cpf,
};

/// Which of the two Brazilian taxpayer identifiers a value is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxIdKind {
    /// CPF, 11 digits, issued to natural persons.
    Individual,
    /// CNPJ, 14 digits, issued to legal entities.
    Organization,
}

impl TaxIdKind {
    /// Number of digits an identifier of this kind has.
    pub fn digit_count(&self) -> usize {
        match self {
            Self::Individual => CPF_LEN,
            Self::Organization => CNPJ_LEN,
        }
    }

    /// Short acronym ("CPF" / "CNPJ").
    pub fn acronym(&self) -> &'static str {
        match self {
            Self::Individual => "CPF",
            Self::Organization => "CNPJ",
        }
    }
}

impl fmt::Display for TaxIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.acronym())
    }
}

/// Person type of a client record (pessoa física / pessoa jurídica).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PersonType {
    /// Pessoa física: natural person, identified by CPF.
    #[default]
    PF,
    /// Pessoa jurídica: legal entity, identified by CNPJ.
    PJ,
}

impl PersonType {
    /// Two-letter code as stored by the backend.
    pub fn code(&self) -> &'static str {
        match self {
            Self::PF => "PF",
            Self::PJ => "PJ",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PF => "Pessoa Física",
            Self::PJ => "Pessoa Jurídica",
        }
    }

    /// Parse the two-letter code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "PF" => Some(Self::PF),
            "PJ" => Some(Self::PJ),
            _ => None,
        }
    }

    /// Identifier kind a client of this person type carries.
    pub fn tax_id_kind(&self) -> TaxIdKind {
        match self {
            Self::PF => TaxIdKind::Individual,
            Self::PJ => TaxIdKind::Organization,
        }
    }
}

impl From<TaxIdKind> for PersonType {
    fn from(kind: TaxIdKind) -> Self {
        match kind {
            TaxIdKind::Individual => Self::PF,
            TaxIdKind::Organization => Self::PJ,
        }
    }
}

/// A CPF or CNPJ that has passed check-digit validation.
///
/// Holds only the normalized digits. Serializes as the bare digit
/// string; deserializes from bare or punctuated input and rejects
/// anything invalid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaxId {
    kind: TaxIdKind,
    digits: String,
}

impl TaxId {
    /// Parse and validate a CPF or CNPJ, picking the kind by digit count.
    pub fn parse(input: &str) -> Result<Self, TaxIdError> {
        let digits = digit_values(input);
        let kind = match digits.len() {
            0 => return Err(TaxIdError::Empty),
            CPF_LEN => TaxIdKind::Individual,
            CNPJ_LEN => TaxIdKind::Organization,
            len => return Err(TaxIdError::InvalidLength { len }),
        };
        if all_same(&digits) {
            return Err(TaxIdError::RepeatedDigits);
        }
        let valid = match kind {
            TaxIdKind::Individual => cpf_digits_valid(&digits),
            TaxIdKind::Organization => cnpj_digits_valid(&digits),
        };
        if !valid {
            return Err(TaxIdError::CheckDigitMismatch { kind });
        }
        Ok(Self {
            kind,
            digits: digits.iter().map(|d| char::from(b'0' + d)).collect(),
        })
    }

    /// Parse and additionally require a specific kind.
    ///
    /// Useful when the person type is already known, e.g. a PJ client
    /// must carry a CNPJ.
    pub fn parse_as(input: &str, expected: TaxIdKind) -> Result<Self, TaxIdError> {
        let id = Self::parse(input)?;
        if id.kind != expected {
            return Err(TaxIdError::KindMismatch {
                expected,
                found: id.kind,
            });
        }
        Ok(id)
    }

    /// CPF or CNPJ.
    pub fn kind(&self) -> TaxIdKind {
        self.kind
    }

    /// The person type this identifier belongs to.
    pub fn person_type(&self) -> PersonType {
        self.kind.into()
    }

    /// Normalized digits, no punctuation.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Punctuated display form.
    pub fn formatted(&self) -> String {
        match self.kind {
            TaxIdKind::Individual => format_cpf(&self.digits),
            TaxIdKind::Organization => format_cnpj(&self.digits),
        }
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for TaxId {
    type Err = TaxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TaxId {
    type Error = TaxIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<TaxId> for String {
    fn from(id: TaxId) -> Self {
        id.digits
    }
}

impl AsRef<str> for TaxId {
    fn as_ref(&self) -> &str {
        &self.digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cpf() {
        let id = TaxId::parse("529.982.247-25").unwrap();
        assert_eq!(id.kind(), TaxIdKind::Individual);
        assert_eq!(id.digits(), "52998224725");
        assert_eq!(id.to_string(), "529.982.247-25");
        assert_eq!(id.person_type(), PersonType::PF);
    }

    #[test]
    fn parse_cnpj() {
        let id: TaxId = "11444777000161".parse().unwrap();
        assert_eq!(id.kind(), TaxIdKind::Organization);
        assert_eq!(id.formatted(), "11.444.777/0001-61");
        assert_eq!(id.person_type(), PersonType::PJ);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(TaxId::parse(""), Err(TaxIdError::Empty));
        assert_eq!(TaxId::parse("--"), Err(TaxIdError::Empty));
        assert_eq!(
            TaxId::parse("12345"),
            Err(TaxIdError::InvalidLength { len: 5 })
        );
        assert_eq!(
            TaxId::parse("000.000.000-00"),
            Err(TaxIdError::RepeatedDigits)
        );
        assert_eq!(
            TaxId::parse("52998224726"),
            Err(TaxIdError::CheckDigitMismatch {
                kind: TaxIdKind::Individual
            })
        );
        assert_eq!(
            TaxId::parse("11444777000162"),
            Err(TaxIdError::CheckDigitMismatch {
                kind: TaxIdKind::Organization
            })
        );
    }

    #[test]
    fn parse_as_enforces_kind() {
        assert!(TaxId::parse_as("52998224725", TaxIdKind::Individual).is_ok());
        assert_eq!(
            TaxId::parse_as("52998224725", TaxIdKind::Organization),
            Err(TaxIdError::KindMismatch {
                expected: TaxIdKind::Organization,
                found: TaxIdKind::Individual,
            })
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            TaxIdError::InvalidLength { len: 12 }.to_string(),
            "tax ID must have 11 (CPF) or 14 (CNPJ) digits, got 12"
        );
        assert_eq!(
            TaxIdError::CheckDigitMismatch {
                kind: TaxIdKind::Organization
            }
            .to_string(),
            "CNPJ check digits do not match"
        );
    }

    #[test]
    fn person_type_codes() {
        assert_eq!(PersonType::from_code("pj"), Some(PersonType::PJ));
        assert_eq!(PersonType::from_code(" PF "), Some(PersonType::PF));
        assert_eq!(PersonType::from_code("XX"), None);
        assert_eq!(PersonType::PJ.label(), "Pessoa Jurídica");
        assert_eq!(PersonType::default(), PersonType::PF);
    }

    #[test]
    fn person_type_kind_mapping() {
        for kind in [TaxIdKind::Individual, TaxIdKind::Organization] {
            assert_eq!(PersonType::from(kind).tax_id_kind(), kind);
        }
    }

    #[test]
    fn kind_lengths() {
        assert_eq!(TaxIdKind::Individual.digit_count(), 11);
        assert_eq!(TaxIdKind::Organization.digit_count(), 14);
    }
}
