/// Photo payload validation errors.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PhotoError {
    #[error("photo.missing")]
    Missing,
    #[error("photo.malformed_data_uri")]
    MalformedDataUri,
    #[error("photo.unsupported_media_type")]
    UnsupportedMediaType,
    #[error("photo.invalid_encoding")]
    InvalidEncoding,
    #[error("photo.empty")]
    Empty,
    #[error("photo.too_large")]
    TooLarge,
    #[error("photo.not_an_image")]
    NotAnImage,
}

impl std::str::FromStr for PhotoError {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "photo.missing" => Ok(PhotoError::Missing),
            "photo.malformed_data_uri" => Ok(PhotoError::MalformedDataUri),
            "photo.unsupported_media_type" => Ok(PhotoError::UnsupportedMediaType),
            "photo.invalid_encoding" => Ok(PhotoError::InvalidEncoding),
            "photo.empty" => Ok(PhotoError::Empty),
            "photo.too_large" => Ok(PhotoError::TooLarge),
            "photo.not_an_image" => Ok(PhotoError::NotAnImage),
            _ => Err(format!("Invalid photo error code: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_error_back_from_its_code() {
        for error in [
            PhotoError::Missing,
            PhotoError::MalformedDataUri,
            PhotoError::UnsupportedMediaType,
            PhotoError::InvalidEncoding,
            PhotoError::Empty,
            PhotoError::TooLarge,
            PhotoError::NotAnImage,
        ] {
            let code = error.to_string();
            assert_eq!(code.parse::<PhotoError>(), Ok(error));
        }
    }

    #[test]
    fn should_reject_unknown_code() {
        assert!("dish.unavailable".parse::<PhotoError>().is_err());
    }
}
