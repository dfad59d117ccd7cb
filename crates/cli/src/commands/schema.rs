use ::common::openapi::ResourceSchemas;
use utoipa::OpenApi;

pub fn handle_schema() -> anyhow::Result<()> {
    let json = ResourceSchemas::openapi().to_pretty_json()?;
    println!("{json}");
    Ok(())
}
