use thiserror::Error;

/// The error type for detector construction and detection calls.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured detection method is not one of the recognized variants.
    ///
    /// Raised at construction, before any data is processed. Not recoverable.
    #[error("invalid method {method:?}, expected \"iqr\" or \"zscore\"")]
    InvalidConfiguration {
        /// The unrecognized method string as supplied by the caller
        method: String,
    },

    /// The dataset handed to a detection call contains no data points.
    ///
    /// Quartiles and standard scores are undefined over nothing, so this is rejected
    /// up front instead of propagating NaN arithmetic.
    #[error("cannot detect outliers in an empty dataset")]
    EmptyDataset,
}

/// A specialized `Result` for detector operations.
pub type Result<T> = ::std::result::Result<T, Error>;
