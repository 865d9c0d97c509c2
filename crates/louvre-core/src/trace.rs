use serde::{Deserialize, Serialize};

pub const TRACE_SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceStepType {
    TableLookup,
    FlagOverride,
    WeatherAdoption,
    FinalMerge,
    PatternMatch,
    ConfidenceSort,
    FallbackPad,
    CatalogLookup,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceStep {
    pub step_type: TraceStepType,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceWarning {
    pub message: String,
}

/// Ordered record of every decision the engines took for one selection run.
/// Rendered by the CLI in verbose mode and serialised alongside results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionTrace {
    pub trace_schema_version: String,
    pub steps: Vec<TraceStep>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<TraceWarning>,
}

impl Default for SelectionTrace {
    fn default() -> Self {
        Self {
            trace_schema_version: TRACE_SCHEMA_VERSION.to_string(),
            steps: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl SelectionTrace {
    pub fn step(&mut self, step_type: TraceStepType, message: impl Into<String>) {
        self.steps.push(TraceStep {
            step_type,
            message: message.into(),
        });
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(TraceWarning {
            message: message.into(),
        });
    }
}
