#![cfg(feature = "core")]

use cadastro::core::*;

// ---------------------------------------------------------------------------
// CPF
// ---------------------------------------------------------------------------

#[test]
fn cpf_known_valid() {
    assert!(validate_cpf("52998224725"));
}

#[test]
fn cpf_known_valid_samples() {
    for cpf in ["111.444.777-35", "935.411.347-80", "390.533.447-05"] {
        assert!(validate_cpf(cpf), "{cpf} should be valid");
    }
}

#[test]
fn cpf_last_digit_sensitivity() {
    assert!(validate_cpf("52998224725"));
    assert!(!validate_cpf("52998224726"));
}

#[test]
fn cpf_all_identical_rejected() {
    assert!(!validate_cpf("11111111111"));
    assert!(!validate_cpf("000.000.000-00"));
}

#[test]
fn cpf_total_over_garbage() {
    for input in ["", " ", "abc", "529-982", "💥52998224725💥", "5 2 9 9 8 2 2 4 7 2 5"] {
        let _ = validate_cpf(input);
    }
    assert!(validate_cpf("💥52998224725💥"));
    assert!(validate_cpf("5 2 9 9 8 2 2 4 7 2 5"));
}

#[test]
fn cpf_format() {
    assert_eq!(format_cpf("52998224725"), "529.982.247-25");
}

// ---------------------------------------------------------------------------
// CNPJ
// ---------------------------------------------------------------------------

#[test]
fn cnpj_known_valid() {
    assert!(validate_cnpj("11444777000161"));
}

#[test]
fn cnpj_known_valid_samples() {
    for cnpj in ["11.222.333/0001-81", "45.997.418/0001-53"] {
        assert!(validate_cnpj(cnpj), "{cnpj} should be valid");
    }
}

#[test]
fn cnpj_last_digit_sensitivity() {
    assert!(!validate_cnpj("11444777000160"));
}

#[test]
fn cnpj_all_identical_rejected() {
    assert!(!validate_cnpj("11111111111111"));
    assert!(!validate_cnpj("00.000.000/0000-00"));
}

#[test]
fn cnpj_format() {
    assert_eq!(format_cnpj("11444777000161"), "11.444.777/0001-61");
}

#[test]
fn cpf_is_not_a_cnpj() {
    assert!(!validate_cnpj("52998224725"));
    assert!(!validate_cpf("11444777000161"));
}

// ---------------------------------------------------------------------------
// Typed TaxId
// ---------------------------------------------------------------------------

#[test]
fn tax_id_display_and_digits() {
    let cpf: TaxId = "529.982.247-25".parse().unwrap();
    assert_eq!(cpf.to_string(), "529.982.247-25");
    assert_eq!(cpf.as_ref(), "52998224725");

    let cnpj = TaxId::parse("11444777000161").unwrap();
    assert_eq!(cnpj.to_string(), "11.444.777/0001-61");
}

#[test]
fn tax_id_serde_uses_digit_string() {
    let id = TaxId::parse("11.444.777/0001-61").unwrap();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, r#""11444777000161""#);

    let back: TaxId = serde_json::from_str(r#""529.982.247-25""#).unwrap();
    assert_eq!(back.kind(), TaxIdKind::Individual);
    assert_eq!(back.digits(), "52998224725");
}

#[test]
fn tax_id_serde_rejects_invalid() {
    let err = serde_json::from_str::<TaxId>(r#""52998224726""#).unwrap_err();
    assert!(err.to_string().contains("CPF check digits do not match"));
}

#[test]
fn tax_id_error_display() {
    let messages: Vec<String> = ["", "123", "22222222222", "11444777000162"]
        .iter()
        .map(|s| TaxId::parse(s).unwrap_err().to_string())
        .collect();
    insta::assert_snapshot!(messages.join("\n"), @r"
    tax ID is empty
    tax ID must have 11 (CPF) or 14 (CNPJ) digits, got 3
    tax ID consists of a single repeated digit
    CNPJ check digits do not match
    ");
}

#[test]
fn person_type_serde() {
    let json = serde_json::to_string(&PersonType::PJ).unwrap();
    assert_eq!(json, r#""PJ""#);
    let client: ClientIdentity = serde_json::from_str(
        r#"{"person_type":"PJ","name":"Agro Ltda","tax_id":"11444777000161","email":"a@agro.com"}"#,
    )
    .unwrap();
    assert!(validate_client(&client).is_empty());
}

// ---------------------------------------------------------------------------
// Check-digit generation
// ---------------------------------------------------------------------------

#[test]
fn generated_cpf_validates() {
    let base = "123456789";
    let [a, b] = cpf_check_digits(base).unwrap();
    let full = format!("{base}{a}{b}");
    assert_eq!(full, "12345678909");
    assert!(validate_cpf(&full));
}

#[test]
fn generated_cnpj_validates() {
    let base = "112223330001";
    let [a, b] = cnpj_check_digits(base).unwrap();
    assert_eq!([a, b], [8, 1]);
    assert!(validate_cnpj(&format!("{base}{a}{b}")));
}

// ---------------------------------------------------------------------------
// Client records
// ---------------------------------------------------------------------------

#[test]
fn email_check_ships_with_core() {
    assert!(cadastro::is_valid_email("fiscal@agro.com.br"));
    assert!(!cadastro::is_valid_email("fiscal@agro"));
}
