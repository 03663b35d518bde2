use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid color `{0}`: expected #RRGGBB or #RGB")]
    InvalidColor(String),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
