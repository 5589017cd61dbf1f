use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Dimension '{name}' is empty")]
    EmptyDimension { name: &'static str },

    #[error("Metric '{name}' not found in active schema")]
    UnknownMetric { name: String },

    #[error("Metric '{name}' declared more than once")]
    DuplicateMetric { name: String },

    #[error("Metric '{metric}' has invalid bounds: lo {lo} >= hi {hi}")]
    InvalidBounds { metric: String, lo: f64, hi: f64 },

    #[error("Slider value {value} outside [0, 100]")]
    SliderOutOfRange { value: u32 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type DashResult<T> = Result<T, DashboardError>;
