use serde::{Deserialize, Serialize};

pub const DEFAULT_RUN_LABEL: &str = "boolean_run";
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Knobs for turning result sets into run lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Written in the last column of every run line.
    pub run_label: String,
    /// Entries kept per query. Scores count down from this value.
    pub max_results: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { run_label: DEFAULT_RUN_LABEL.to_string(), max_results: DEFAULT_MAX_RESULTS }
    }
}

impl RetrievalConfig {
    pub fn new(run_label: impl Into<String>) -> Self {
        Self { run_label: run_label.into(), ..Self::default() }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: RetrievalConfig = serde_json::from_str(r#"{"run_label": "trial"}"#).unwrap();
        assert_eq!(cfg.run_label, "trial");
        assert_eq!(cfg.max_results, DEFAULT_MAX_RESULTS);
    }
}
