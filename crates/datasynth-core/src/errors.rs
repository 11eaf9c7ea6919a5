use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    /// A builder or noise parameter cannot produce a well-formed table
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A channel or metric label outside the known set
    #[error("Unknown {kind} '{label}'")]
    UnknownCategory { kind: &'static str, label: String },

    /// Folder creation or file IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The xlsx serializer rejected the workbook
    #[error("Xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// The Arrow kernel produced an error while building or writing CSV
    #[error("Arrow computation error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// The temporary file could not be moved onto the destination path
    #[error("Failed to persist '{path}': {source}")]
    Persist {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl GenerationError {
    pub fn invalid(message: impl Into<String>) -> Self {
        GenerationError::InvalidParameter(message.into())
    }
}
