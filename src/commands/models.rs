use std::path::PathBuf;

/// Arguments for the check command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Path to the v1 event snapshot JSON
    pub v1: PathBuf,

    /// Path to the v2 event snapshot JSON
    pub v2: PathBuf,

    /// Path to write the JSON report envelope (optional)
    pub output: Option<PathBuf>,
}
