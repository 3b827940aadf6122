use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::types::{PersonType, TaxId};

/// The identifying fields of a client record, as submitted by a form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientIdentity {
    /// PF or PJ.
    pub person_type: PersonType,
    /// Full name or corporate name (razão social).
    pub name: String,
    /// CPF or CNPJ, bare or punctuated.
    pub tax_id: String,
    /// Contact e-mail.
    pub email: String,
}

/// Check an e-mail address for the basic `local@domain.tld` shape.
///
/// No whitespace, exactly one `@`, a non-empty local part, and a domain
/// with at least one dot that has text on both sides. Deliverability
/// is not checked.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validate a client record's identifying fields.
///
/// Returns all failures at once, empty if the record is acceptable. The
/// tax ID must pass check-digit validation and match the person type:
/// PF clients carry a CPF, PJ clients a CNPJ.
pub fn validate_client(client: &ClientIdentity) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if client.name.trim().is_empty() {
        errors.push(ValidationError::new("name", "name must not be empty"));
    }

    if let Err(e) = TaxId::parse_as(&client.tax_id, client.person_type.tax_id_kind()) {
        errors.push(ValidationError::new("tax_id", e.to_string()));
    }

    if client.email.trim().is_empty() {
        errors.push(ValidationError::new("email", "email must not be empty"));
    } else if !is_valid_email(client.email.trim()) {
        errors.push(ValidationError::new(
            "email",
            format!("'{}' is not a valid email address", client.email),
        ));
    }

    errors
}
