//! ddgs-project: canonical scenario file format and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_scenario};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Parse a scenario from YAML text, clamping inputs into form range.
pub fn parse_scenario(text: &str) -> ProjectResult<Scenario> {
    let mut scenario: Scenario = serde_yaml::from_str(text)?;
    validate_scenario(&mut scenario)?;
    Ok(scenario)
}

pub fn load_scenario(path: &std::path::Path) -> ProjectResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    parse_scenario(&content)
}

pub fn save_scenario(path: &std::path::Path, scenario: &Scenario) -> ProjectResult<()> {
    let content = serde_yaml::to_string(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}
