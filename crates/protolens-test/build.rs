use protolens::build::CompileOptions;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let options = CompileOptions::new().include_path("schema");
    let _units = protolens::build!("directory.json", options)?;

    Ok(())
}
