/// Image container formats recognised from their leading signature bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    WebP,
    Bmp,
    Tiff,
    Heif,
    Avif,
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormat::Jpeg => write!(f, "jpeg"),
            ImageFormat::Png => write!(f, "png"),
            ImageFormat::Gif => write!(f, "gif"),
            ImageFormat::WebP => write!(f, "webp"),
            ImageFormat::Bmp => write!(f, "bmp"),
            ImageFormat::Tiff => write!(f, "tiff"),
            ImageFormat::Heif => write!(f, "heif"),
            ImageFormat::Avif => write!(f, "avif"),
        }
    }
}

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8, 0xFF];
const HEIF_BRANDS: &[&[u8]] = &[b"heic", b"heix", b"hevc", b"hevx", b"mif1", b"msf1"];
const AVIF_BRANDS: &[&[u8]] = &[b"avif", b"avis"];

impl ImageFormat {
    /// Detects the image format from the first bytes of `bytes`.
    ///
    /// Returns `None` when no known signature matches.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(JPEG_SIGNATURE) {
            return Some(ImageFormat::Jpeg);
        }
        if bytes.starts_with(PNG_SIGNATURE) {
            return Some(ImageFormat::Png);
        }
        if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            return Some(ImageFormat::Gif);
        }
        if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            return Some(ImageFormat::WebP);
        }
        if bytes.starts_with(b"II*\0") || bytes.starts_with(b"MM\0*") {
            return Some(ImageFormat::Tiff);
        }
        if bytes.len() >= 12 && &bytes[4..8] == b"ftyp" {
            let brand = &bytes[8..12];
            if AVIF_BRANDS.contains(&brand) {
                return Some(ImageFormat::Avif);
            }
            if HEIF_BRANDS.contains(&brand) {
                return Some(ImageFormat::Heif);
            }
        }
        // "BM" alone is too weak; require the reserved header words to be zero.
        if bytes.len() >= 14 && bytes.starts_with(b"BM") && bytes[6..10] == [0, 0, 0, 0] {
            return Some(ImageFormat::Bmp);
        }
        None
    }
}
