use cadastro::core::*;

fn main() {
    // Boolean checks, as a form would run them on every keystroke
    for input in ["529.982.247-25", "52998224726", "11.444.777/0001-61", "111.111.111-11"] {
        println!("{input:>20}  valid: {}", validate_tax_id(input));
    }

    // Typed parse with a reason on failure
    match TaxId::parse("11444777000162") {
        Ok(id) => println!("parsed {} ({})", id, id.kind()),
        Err(e) => println!("rejected: {e}"),
    }

    // Whole-record validation
    let client = ClientIdentity {
        person_type: PersonType::PJ,
        name: "Fazenda Boa Vista Ltda".into(),
        tax_id: "529.982.247-25".into(),
        email: "financeiro@boavista".into(),
    };
    let errors = validate_client(&client);
    println!("client validation: {} errors", errors.len());
    for e in &errors {
        println!("  {e}");
    }
}
