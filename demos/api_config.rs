use cadastro::api::*;

fn main() -> Result<(), ConfigError> {
    let config = ApiConfig::from_json(
        r#"{
            "base_url": "https://erp.example.com/api",
            "auth_scheme": "bearer",
            "endpoints": { "products": "/estoque" }
        }"#,
    )?;

    println!("clients:  {}", config.collection_url(Endpoint::Clients)?);
    println!("product:  {}", config.resource_url(Endpoint::Products, 42)?);
    println!(
        "action:   {}",
        config.action_url(Endpoint::Invoices, 7, "change_status")?
    );
    if let Some(header) = config.authorization("s3cr3t") {
        println!("header:   Authorization: {header}");
    }
    for status in [200, 401, 404, 422, 500] {
        println!("{status}: {:?}", config.status_message(status));
    }
    Ok(())
}
