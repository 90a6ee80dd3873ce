use super::errors::PhotoError;
use super::model::PhotoPayload;

pub const DEFAULT_MAX_PHOTO_BYTES: usize = 10 * 1024 * 1024;

/// Boundary validation applied to every incoming photo before any
/// capability sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoPolicy {
    pub max_bytes: usize,
}

impl Default for PhotoPolicy {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_PHOTO_BYTES,
        }
    }
}

impl PhotoPolicy {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    /// Parses a raw data URI and checks it against the policy.
    ///
    /// Business rules:
    /// - Blank input -> Missing
    /// - Decoded size above `max_bytes` -> TooLarge
    /// - No recognised image signature -> NotAnImage
    pub fn accept(&self, raw: &str) -> Result<PhotoPayload, PhotoError> {
        let photo = PhotoPayload::from_data_uri(raw)?;
        self.check(&photo)?;
        Ok(photo)
    }

    pub fn check(&self, photo: &PhotoPayload) -> Result<(), PhotoError> {
        if photo.len() > self.max_bytes {
            return Err(PhotoError::TooLarge);
        }
        if photo.format().is_none() {
            return Err(PhotoError::NotAnImage);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;

    fn jpeg_data_uri(len: usize) -> String {
        let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xE0];
        bytes.resize(len, 0x00);
        format!("data:image/jpeg;base64,{}", STANDARD.encode(bytes))
    }

    #[test]
    fn should_accept_jpeg_within_limit() {
        let policy = PhotoPolicy::new(1024);

        let photo = policy.accept(&jpeg_data_uri(512)).unwrap();

        assert_eq!(photo.len(), 512);
    }

    #[test]
    fn should_accept_photo_exactly_at_limit() {
        let policy = PhotoPolicy::new(64);
        assert!(policy.accept(&jpeg_data_uri(64)).is_ok());
    }

    #[test]
    fn should_reject_photo_over_limit() {
        let policy = PhotoPolicy::new(64);
        assert_eq!(policy.accept(&jpeg_data_uri(65)), Err(PhotoError::TooLarge));
    }

    #[test]
    fn should_reject_bytes_without_image_signature() {
        let raw = format!("data:image/png;base64,{}", STANDARD.encode(b"plain text"));
        assert_eq!(
            PhotoPolicy::default().accept(&raw),
            Err(PhotoError::NotAnImage)
        );
    }

    #[test]
    fn should_propagate_parse_errors() {
        assert_eq!(PhotoPolicy::default().accept(""), Err(PhotoError::Missing));
    }

    #[test]
    fn should_default_to_ten_mebibytes() {
        assert_eq!(PhotoPolicy::default().max_bytes, 10 * 1024 * 1024);
    }
}
