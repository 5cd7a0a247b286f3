use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("no records supplied")]
    EmptyInput,

    #[error("invalid scale domain: {0}")]
    InvalidDomain(String),

    #[error("container `{0}` not found")]
    ContainerMissing(String),

    #[error("invalid timestamp `{value}`")]
    InvalidTimestamp { value: String },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
