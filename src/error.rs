use thiserror::Error;

/// Errors that can occur while clustering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClusterError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("cluster {index} received no points in iteration {iteration}")]
    DegenerateCluster { index: usize, iteration: usize },
}
