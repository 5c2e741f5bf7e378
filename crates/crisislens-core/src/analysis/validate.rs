//! Upload validation for analysis requests.

use image::ImageFormat;

use crate::error::{LensError, LensResult};

/// Media types accepted for uploaded images.
pub const SUPPORTED_MEDIA_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// A validated image upload ready to be sent to the model.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// Check the declared media type and decode the bytes as a raster image.
///
/// Runs before the model call so malformed uploads never produce an
/// external request. The decoded pixels are discarded; only the original
/// bytes travel to the API.
pub fn validate_upload(media_type: &str, bytes: Vec<u8>) -> LensResult<ImageUpload> {
    let format = match media_type {
        "image/jpeg" => ImageFormat::Jpeg,
        "image/png" => ImageFormat::Png,
        other => return Err(LensError::UnsupportedMediaType(other.to_string())),
    };

    image::load_from_memory_with_format(&bytes, format)
        .map_err(|e| LensError::InvalidImage(e.to_string()))?;

    Ok(ImageUpload {
        media_type: media_type.to_string(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(format: ImageFormat) -> Vec<u8> {
        let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            4,
            4,
            image::Rgb([180, 40, 20]),
        ));
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, format).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_accepts_png() {
        let upload = validate_upload("image/png", encode(ImageFormat::Png)).unwrap();
        assert_eq!(upload.media_type, "image/png");
        assert!(!upload.bytes.is_empty());
    }

    #[test]
    fn test_accepts_jpeg() {
        let upload = validate_upload("image/jpeg", encode(ImageFormat::Jpeg)).unwrap();
        assert_eq!(upload.media_type, "image/jpeg");
    }

    #[test]
    fn test_rejects_unsupported_media_type() {
        // Valid PNG bytes do not rescue a bad declared type.
        let err = validate_upload("image/gif", encode(ImageFormat::Png)).unwrap_err();
        assert!(matches!(err, LensError::UnsupportedMediaType(_)));
    }

    #[test]
    fn test_rejects_undecodable_bytes() {
        let err = validate_upload("image/png", b"definitely not pixels".to_vec()).unwrap_err();
        assert!(matches!(err, LensError::InvalidImage(_)));
    }

    #[test]
    fn test_rejects_mismatched_format() {
        // JPEG bytes declared as PNG fail the decode for the declared format.
        let err = validate_upload("image/png", encode(ImageFormat::Jpeg)).unwrap_err();
        assert!(matches!(err, LensError::InvalidImage(_)));
    }
}
