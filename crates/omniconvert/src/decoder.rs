use omniconvert_core::capabilities::ImageDecoder;
use omniconvert_core::transform::image::DecodedImage;
use omniconvert_core::ConvertError;
use std::path::Path;

/// [`ImageDecoder`] backed by the `image` crate (PNG, JPEG, GIF).
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCrateDecoder;

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, ConvertError> {
        let rgba = image::load_from_memory(bytes)
            .map_err(|e| ConvertError::ImageDecode(e.to_string()))?
            .to_rgba8();

        Ok(DecodedImage {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        })
    }
}

/// MIME type guessed from the file extension.
pub fn guess_mime(path: &Path) -> &'static str {
    if let Ok(format) = image::ImageFormat::from_path(path) {
        return format.to_mime_type();
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => "application/json",
        Some("html" | "htm") => "text/html",
        Some("css") => "text/css",
        Some("js" | "mjs" | "cjs") => "text/javascript",
        _ => "text/plain",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba(pixel));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_png() {
        let decoded = ImageCrateDecoder.decode(&png(3, 2, [255, 0, 0, 255])).unwrap();
        assert_eq!((decoded.width, decoded.height), (3, 2));
        assert_eq!(decoded.rgba.len(), 3 * 2 * 4);
        assert_eq!(&decoded.rgba[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_decode_garbage() {
        let err = ImageCrateDecoder.decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ConvertError::ImageDecode(_)));
    }

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime(Path::new("photo.PNG")), "image/png");
        assert_eq!(guess_mime(Path::new("photo.jpg")), "image/jpeg");
        assert_eq!(guess_mime(Path::new("data.json")), "application/json");
        assert_eq!(guess_mime(Path::new("notes")), "text/plain");
    }
}
