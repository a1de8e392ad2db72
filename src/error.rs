use thiserror::Error;

/// Resource limits a bounded sort can run into. Neither is retried, the same input under the
/// same limits fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("input of {len} elements exceeds the limit of {max_len}")]
    InputTooLarge { len: usize, max_len: usize },

    /// The slice holds a permutation of its input, partially sorted.
    #[error("recursion depth {depth} exceeds the limit of {max_depth}")]
    DepthLimitExceeded { depth: usize, max_depth: usize },
}

/// Errors of the empirical analysis harness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("sample count must be at least 1")]
    NoSamples,

    #[error("no input sizes given")]
    NoSizes,

    #[error("no input distributions given")]
    NoDistributions,

    #[error("{variant} produced unsorted output for {distribution} input of {len} elements")]
    Unsorted {
        variant: &'static str,
        distribution: String,
        len: usize,
    },
}
