//! Image metadata and dominant-color extraction over decoded RGBA pixels.
//!
//! Decoding itself is delegated to an [`crate::capabilities::ImageDecoder`].

use std::collections::HashMap;

use serde::Serialize;

use crate::transform::color::{rgb_to_hex, ColorRgb};
use crate::transform::number::format_bytes;

/// Upper bound on pixels inspected by [`extract_colors`].
const MAX_SAMPLES: usize = 10_000;
/// Pixels with alpha below this are treated as transparent and skipped.
const MIN_ALPHA: u8 = 128;
/// Width of the per-channel quantization bucket.
const BUCKET: u8 = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8 pixels, `width * height * 4` bytes.
    pub rgba: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    pub mime_type: String,
    pub size_bytes: u64,
    pub size_human: String,
    pub aspect_ratio: String,
    pub megapixels: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedColor {
    pub hex: String,
    pub rgb: String,
    /// Share of sampled, non-transparent pixels, in percent.
    pub percentage: f64,
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

pub fn aspect_ratio(width: u32, height: u32) -> String {
    match gcd(width, height) {
        0 => "0:0".to_string(),
        divisor => format!("{}:{}", width / divisor, height / divisor),
    }
}

pub fn image_metadata(image: &DecodedImage, mime_type: &str, size_bytes: u64) -> ImageMetadata {
    let pixels = f64::from(image.width) * f64::from(image.height);

    ImageMetadata {
        width: image.width,
        height: image.height,
        mime_type: mime_type.to_string(),
        size_bytes,
        size_human: format_bytes(size_bytes),
        aspect_ratio: aspect_ratio(image.width, image.height),
        megapixels: (pixels / 10_000.0).round() / 100.0,
    }
}

fn quantize(channel: u8) -> u8 {
    (channel / BUCKET) * BUCKET + BUCKET / 2
}

/// Most frequent colors among a bounded sample of the image's pixels.
///
/// Channels are quantized into buckets so near-identical shades merge.
/// Colors are ordered by share; ties keep the order they were first seen.
pub fn extract_colors(image: &DecodedImage, max_colors: usize) -> Vec<ExtractedColor> {
    let pixel_count = image.rgba.len() / 4;
    if pixel_count == 0 || max_colors == 0 {
        return Vec::new();
    }

    let step = (pixel_count / MAX_SAMPLES).max(1);
    let mut buckets: HashMap<(u8, u8, u8), (usize, usize)> = HashMap::new();
    let mut sampled = 0usize;

    for (index, pixel) in image.rgba.chunks_exact(4).step_by(step).enumerate() {
        if pixel[3] < MIN_ALPHA {
            continue;
        }
        sampled += 1;

        let key = (quantize(pixel[0]), quantize(pixel[1]), quantize(pixel[2]));
        buckets.entry(key).or_insert((0, index)).0 += 1;
    }

    if sampled == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<_> = buckets.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));

    ranked
        .into_iter()
        .take(max_colors)
        .map(|((r, g, b), (count, _))| {
            let percentage = count as f64 / sampled as f64 * 100.0;
            ExtractedColor {
                hex: rgb_to_hex(&ColorRgb::opaque(r, g, b)),
                rgb: format!("rgb({r}, {g}, {b})"),
                percentage: (percentage * 10.0).round() / 10.0,
            }
        })
        .collect()
}
