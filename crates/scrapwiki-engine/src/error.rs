/// Errors raised at the engine's fallible edges.
///
/// Rendering itself never fails; these cover building the collaborators
/// that rendering consults (rewrite patterns, tag registries, tag indexes).
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid image rewrite pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("Image rewrite pattern {0:?} has no capture group")]
    MissingCaptureGroup(String),

    #[error("Failed to decode tag data: {0}")]
    Json(#[from] serde_json::Error),
}
