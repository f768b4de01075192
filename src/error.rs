use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ErrorType {
    ParseError,
    IoError,
    EncodingError,
    LogicError,
}

#[derive(Debug, Clone, Serialize)]
pub struct Error {
    #[serde(flatten)]
    type_: ErrorType,
    msg: String,
}

impl Error {
    pub fn new(type_: ErrorType, msg: String) -> Self {
        Error { type_, msg }
    }

    pub fn new_s(type_: ErrorType, msg: &str) -> Self {
        Error {
            type_,
            msg: msg.into(),
        }
    }

    pub fn convert<T>(type_: ErrorType, msg: &str, err: &T) -> Self
    where
        T: fmt::Display,
    {
        Error::new(type_, format!("{}: {}", msg, err))
    }

    pub fn get_type(&self) -> ErrorType {
        self.type_
    }

    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.type_, self.msg)
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::new(ErrorType::IoError, value.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(value: quick_xml::Error) -> Self {
        Error::new(ErrorType::ParseError, value.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(value: quick_xml::events::attributes::AttrError) -> Self {
        Error::new(ErrorType::ParseError, value.to_string())
    }
}

impl From<gpx::errors::GpxError> for Error {
    fn from(value: gpx::errors::GpxError) -> Self {
        Error::new(ErrorType::EncodingError, value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        let error_type = match value.classify() {
            serde_json::error::Category::Io => ErrorType::IoError,
            _ => ErrorType::EncodingError,
        };
        Error::new(error_type, value.to_string())
    }
}
