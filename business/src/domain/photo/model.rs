use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

use super::errors::PhotoError;
use super::format::ImageFormat;

static DATA_URI: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"(?is)^data:([a-z0-9!#$&^_.+-]+/[a-z0-9!#$&^_.+-]+)((?:;[^;,]*)*);base64,(.*)$")
        .ok()
});

static MEDIA_TYPE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[a-z0-9!#$&^_.+-]+/[a-z0-9!#$&^_.+-]+$").ok());

/// A declared media type such as `image/png`, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType(String);

impl MediaType {
    pub fn parse(raw: &str) -> Result<Self, PhotoError> {
        let lowered = raw.trim().to_ascii_lowercase();
        let valid = MEDIA_TYPE
            .as_ref()
            .map(|re| re.is_match(&lowered))
            .unwrap_or(false);
        if !valid {
            return Err(PhotoError::UnsupportedMediaType);
        }
        Ok(Self(lowered))
    }

    /// Guesses the media type from a file extension (without the dot).
    pub fn from_extension(extension: &str) -> Option<Self> {
        let media_type = match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" | "jfif" => "image/jpeg",
            "png" => "image/png",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "bmp" => "image/bmp",
            "tif" | "tiff" => "image/tiff",
            "heic" | "heif" => "image/heic",
            "avif" => "image/avif",
            _ => return None,
        };
        Some(Self(media_type.to_string()))
    }

    pub fn is_image(&self) -> bool {
        self.0.starts_with("image/")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An encoded photo plus its declared media type.
///
/// Travels by value across the operation boundary. The bytes are kept
/// exactly as decoded so that `to_data_uri` and `from_data_uri` round-trip.
#[derive(Clone, PartialEq, Eq)]
pub struct PhotoPayload {
    media_type: MediaType,
    bytes: Vec<u8>,
}

impl PhotoPayload {
    pub fn new(media_type: MediaType, bytes: Vec<u8>) -> Result<Self, PhotoError> {
        if !media_type.is_image() {
            return Err(PhotoError::UnsupportedMediaType);
        }
        if bytes.is_empty() {
            return Err(PhotoError::Empty);
        }
        Ok(Self { media_type, bytes })
    }

    /// Parses `data:<mimetype>[;param]*;base64,<data>`.
    ///
    /// Whitespace inside the base64 section is ignored, as browsers and
    /// mail clients sometimes wrap long payloads.
    pub fn from_data_uri(raw: &str) -> Result<Self, PhotoError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(PhotoError::Missing);
        }

        let captures = DATA_URI
            .as_ref()
            .and_then(|re| re.captures(raw))
            .ok_or(PhotoError::MalformedDataUri)?;

        let media_type = captures
            .get(1)
            .map(|m| MediaType::parse(m.as_str()))
            .ok_or(PhotoError::MalformedDataUri)??;

        let encoded: String = captures
            .get(3)
            .map(|m| m.as_str())
            .unwrap_or("")
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        let bytes = STANDARD
            .decode(encoded.as_bytes())
            .map_err(|_| PhotoError::InvalidEncoding)?;

        Self::new(media_type, bytes)
    }

    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.media_type,
            STANDARD.encode(&self.bytes)
        )
    }

    pub fn media_type(&self) -> &MediaType {
        &self.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn format(&self) -> Option<ImageFormat> {
        ImageFormat::sniff(&self.bytes)
    }

    /// Short SHA-256 digest for log lines; the payload itself is never logged.
    pub fn fingerprint(&self) -> String {
        let digest = format!("{:x}", Sha256::digest(&self.bytes));
        digest[..12].to_string()
    }
}

impl std::fmt::Debug for PhotoPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoPayload")
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}
