// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Image(String),
    Config(String),
}

impl Error {
    /// Returns the i18n message key shown in the status line for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "status-error-io",
            Error::Image(_) => "status-error-image",
            Error::Config(_) => "status-error-config",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(io) => Error::Io(io.to_string()),
            other => Error::Image(other.to_string()),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn image_io_error_maps_to_io_variant() {
        let err: Error = image_rs::ImageError::IoError(std::io::Error::other("gone")).into();
        assert!(matches!(err, Error::Io(message) if message.contains("gone")));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn invalid_toml_maps_to_config_variant() {
        let parse_err = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn i18n_keys_are_distinct() {
        assert_eq!(Error::Io(String::new()).i18n_key(), "status-error-io");
        assert_eq!(Error::Image(String::new()).i18n_key(), "status-error-image");
        assert_eq!(Error::Config(String::new()).i18n_key(), "status-error-config");
    }
}
