pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Unknown text encoding: {label}")]
    UnknownEncoding { label: String },

    #[error("Text encoding {label} can be read but not written")]
    UnsupportedEncoding { label: String },

    #[error("Markup is not valid {encoding} text")]
    Decode { encoding: &'static str },

    #[error("Markup contains characters that cannot be written as {encoding}")]
    Encode { encoding: &'static str },

    #[error("Invalid configuration: {message}")]
    Config { message: String },
}
