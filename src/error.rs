use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors. Everything that is not listed here is logged and skipped
/// while parsing or rendering.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("invalid DOCX: {0}")]
    InvalidDocx(String),

    #[error("document has not been parsed with these options; call init first")]
    NotInitialized,

    #[error("malformed XML in {part}: {source}")]
    Xml {
        part: String,
        #[source]
        source: roxmltree::Error,
    },
}
