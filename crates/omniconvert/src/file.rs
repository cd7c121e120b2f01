use crate::decoder::{guess_mime, ImageCrateDecoder};
use crate::prelude::{eprintln, *};
use crate::render::{output_fields, output_json, Fields};
use colored::Colorize;
use omniconvert_core::capabilities::ImageDecoder;
use omniconvert_core::transform::image::{extract_colors, image_metadata, ExtractedColor, ImageMetadata};
use omniconvert_core::{detect_file_type, DetectedType, FileInfo};
use serde::Serialize;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct FileOptions {
    /// Path of the file to inspect
    path: PathBuf,

    /// Number of dominant colors to extract from images
    #[arg(long, default_value = "5")]
    colors: usize,
}

#[derive(Debug, Serialize)]
pub struct ImageReport {
    #[serde(rename = "type")]
    pub kind: DetectedType,
    pub metadata: ImageMetadata,
    pub colors: Vec<ExtractedColor>,
}

pub fn inspect_image(bytes: &[u8], mime_type: &str, max_colors: usize) -> Result<ImageReport> {
    let decoded = ImageCrateDecoder.decode(bytes)?;

    Ok(ImageReport {
        kind: DetectedType::Image,
        metadata: image_metadata(&decoded, mime_type, bytes.len() as u64),
        colors: extract_colors(&decoded, max_colors),
    })
}

fn image_fields(report: &ImageReport) -> Fields {
    let meta = &report.metadata;
    vec![
        ("dimensions", f!("{} x {}", meta.width, meta.height)),
        ("mime type", meta.mime_type.clone()),
        ("size", f!("{} ({} bytes)", meta.size_human, meta.size_bytes)),
        ("aspect ratio", meta.aspect_ratio.clone()),
        ("megapixels", meta.megapixels.to_string()),
    ]
}

fn format_palette(colors: &[ExtractedColor], is_tty: bool) -> String {
    let mut result = String::new();
    for color in colors {
        let swatch = match (is_tty, hex_channels(&color.hex)) {
            (true, Some((r, g, b))) => f!("{} ", "  ".on_truecolor(r, g, b)),
            _ => String::new(),
        };
        result.push_str(&f!("{swatch}{} {:>5.1}%\n", color.hex, color.percentage));
    }
    result
}

fn hex_channels(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

pub fn run(options: FileOptions, global: crate::Global) -> Result<()> {
    let path = &options.path;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime_type = guess_mime(path);
    let kind = detect_file_type(&FileInfo::new(mime_type, name));
    log::debug!("{} classified as {kind} ({mime_type})", path.display());

    if global.verbose {
        eprintln!("File: {} ({mime_type})", path.display());
    }

    if kind == DetectedType::Image {
        let bytes = std::fs::read(path)
            .map_err(|e| Error::Input(f!("{}: {e}", path.display())))?;
        let report = inspect_image(&bytes, mime_type, options.colors)
            .with_context(|| f!("Failed to decode {}", path.display()))?;

        if let Some(top) = report.colors.first() {
            crate::clipboard::copy_if_requested(&global, &top.hex)?;
        }

        if global.json {
            return output_json(&report);
        }
        output_fields("image", &image_fields(&report))?;
        print!("{}", format_palette(&report.colors, std::io::stdout().is_terminal()));
        return Ok(());
    }

    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::Input(f!("{}: {e}", path.display())))?;
    let forced = (kind != DetectedType::Text).then(|| kind.as_str());
    let formats = crate::convert::convert_text(&text, forced, &global)?;
    crate::convert::output(&formats, &global)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    #[test]
    fn test_inspect_image() {
        let mut img = RgbaImage::from_pixel(4, 2, Rgba([0, 0, 255, 255]));
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();

        let report = inspect_image(&bytes, "image/png", 3).unwrap();
        assert_eq!(report.metadata.aspect_ratio, "2:1");
        assert_eq!(report.colors.len(), 2);
        assert_eq!(report.colors[0].hex, "#1010f0");
        assert_eq!(report.colors[0].percentage, 87.5);
    }

    #[test]
    fn test_format_palette_piped() {
        let colors = vec![ExtractedColor {
            hex: "#1010f0".to_string(),
            rgb: "rgb(16, 16, 240)".to_string(),
            percentage: 62.5,
        }];
        assert_eq!(format_palette(&colors, false), "#1010f0  62.5%\n");
    }

    #[test]
    fn test_hex_channels() {
        assert_eq!(hex_channels("#10f0a0"), Some((16, 240, 160)));
        assert_eq!(hex_channels("nope"), None);
    }
}
