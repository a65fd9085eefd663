use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("collaborator reported an error: {0}")]
    Collaborator(String),

    #[error("no JSON object found in response")]
    NoJson,

    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
