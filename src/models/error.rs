use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    FileNotFound(PathBuf),
    ParserError(String),
    SchemaError(String),
    ResourceError(String),
    UnsupportedLanguage(String),
    RenderError(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileNotFound(path) => write!(f, "File Not Found: {}", path.display()),
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::SchemaError(msg) => write!(f, "Schema Error: {}", msg),
            Error::ResourceError(msg) => write!(f, "Resource Error: {}", msg),
            Error::UnsupportedLanguage(code) => write!(f, "Unsupported Language: {}", code),
            Error::RenderError(msg) => write!(f, "Render Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::ParserError(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::IoError(err.into())
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Error {
        Error::RenderError(err.to_string())
    }
}

impl From<lindera::error::LinderaError> for Error {
    fn from(err: lindera::error::LinderaError) -> Error {
        Error::ResourceError(err.to_string())
    }
}
