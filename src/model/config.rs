use std::time::Duration;

/// The default quiet period before a keyword is searched.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// The default time a search request may take before it fails.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration of the query pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// The quiet period an edit must be followed by before its keyword is searched.
    pub debounce: Duration,
}

impl PipelineConfig {
    /// Creates a new `PipelineConfig` with the given debounce period.
    pub fn new(debounce: Duration) -> Self {
        Self { debounce }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
