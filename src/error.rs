use thiserror::Error;

use crate::core::{Axis, Metric};

pub type ScatterResult<T> = Result<T, ScatterError>;

#[derive(Debug, Error)]
pub enum ScatterError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column `{column}`")]
    MissingColumn { column: &'static str },

    #[error("dataset contains no records")]
    EmptyDataset,

    #[error("invalid record at row {row}: {reason}")]
    InvalidRecord { row: usize, reason: String },

    #[error("unknown metric name `{0}`")]
    UnknownMetric(String),

    #[error("metric `{metric}` cannot drive the {axis} axis")]
    MetricAxisMismatch { metric: Metric, axis: Axis },

    #[error("invalid axis domain: {0}")]
    InvalidDomain(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
