//! Color parsing and conversion.
//!
//! RGB is the pivot representation: every input is parsed into [`ColorRgb`]
//! and every other format (HSL, CMYK, hex, Tailwind name) is derived from it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HEX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

static RGB_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([\d.]+)\s*)?\)$")
        .unwrap()
});

static HSL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^hsla?\(\s*(\d{1,3})\s*,\s*(\d{1,3})%\s*,\s*(\d{1,3})%\s*(?:,\s*([\d.]+)\s*)?\)$",
    )
    .unwrap()
});

/// Tailwind palette used for nearest-name matching. Order matters: on equal
/// distance the earlier entry wins.
const TAILWIND_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("slate-500", (100, 116, 139)),
    ("gray-500", (107, 114, 128)),
    ("zinc-500", (113, 113, 122)),
    ("neutral-500", (115, 115, 115)),
    ("stone-500", (120, 113, 108)),
    ("red-500", (239, 68, 68)),
    ("orange-500", (249, 115, 22)),
    ("amber-500", (245, 158, 11)),
    ("yellow-500", (234, 179, 8)),
    ("lime-500", (132, 204, 22)),
    ("green-500", (34, 197, 94)),
    ("emerald-500", (16, 185, 129)),
    ("teal-500", (20, 184, 166)),
    ("cyan-500", (6, 182, 212)),
    ("sky-500", (14, 165, 233)),
    ("blue-500", (59, 130, 246)),
    ("indigo-500", (99, 102, 241)),
    ("violet-500", (139, 92, 246)),
    ("purple-500", (168, 85, 247)),
    ("fuchsia-500", (217, 70, 239)),
    ("pink-500", (236, 72, 153)),
    ("rose-500", (244, 63, 94)),
    ("red-300", (252, 165, 165)),
    ("red-700", (185, 28, 28)),
    ("yellow-300", (253, 224, 71)),
    ("green-700", (21, 128, 61)),
    ("blue-300", (147, 197, 253)),
    ("blue-700", (29, 78, 216)),
    ("gray-200", (229, 231, 235)),
    ("gray-800", (31, 41, 55)),
    ("white", (255, 255, 255)),
    ("black", (0, 0, 0)),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorRgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

/// HSL kept unrounded so that converting back to RGB is lossless up to
/// integer rounding. Strings round to whole degrees and percents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorHsl {
    /// Hue in degrees, `[0, 360)`.
    pub h: f64,
    /// Saturation percent, `[0, 100]`.
    pub s: f64,
    /// Lightness percent, `[0, 100]`.
    pub l: f64,
    pub a: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorFormats {
    pub hex: String,
    pub hex8: String,
    pub rgb: String,
    pub rgba: String,
    pub hsl: String,
    pub hsla: String,
    pub cmyk: String,
    pub rgb_vector: String,
    pub tailwind: String,
    pub complementary: String,
    pub values: ColorRgb,
}

impl ColorRgb {
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

fn clamp_channel(value: &str) -> u8 {
    value.parse::<u32>().map(|v| v.min(255) as u8).unwrap_or(0)
}

fn parse_alpha(value: Option<regex::Match<'_>>) -> f64 {
    value
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .map(|a| a.clamp(0.0, 1.0))
        .unwrap_or(1.0)
}

fn parse_hex(hex: &str) -> Option<ColorRgb> {
    let digits = hex.trim_start_matches('#');
    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    let channel = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();

    let a = if expanded.len() == 8 {
        f64::from(channel(6)?) / 255.0
    } else {
        1.0
    };

    Some(ColorRgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
        a,
    })
}

/// Parse `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb()/rgba()` or `hsl()/hsla()`.
///
/// Out-of-range components are clamped rather than rejected.
pub fn parse_color(input: &str) -> Option<ColorRgb> {
    let input = input.trim();

    if HEX_PATTERN.is_match(input) {
        return parse_hex(input);
    }

    if let Some(caps) = RGB_PATTERN.captures(input) {
        return Some(ColorRgb {
            r: clamp_channel(&caps[1]),
            g: clamp_channel(&caps[2]),
            b: clamp_channel(&caps[3]),
            a: parse_alpha(caps.get(4)),
        });
    }

    if let Some(caps) = HSL_PATTERN.captures(input) {
        let hsl = ColorHsl {
            h: caps[1].parse::<f64>().unwrap_or(0.0) % 360.0,
            s: caps[2].parse::<f64>().unwrap_or(0.0).min(100.0),
            l: caps[3].parse::<f64>().unwrap_or(0.0).min(100.0),
            a: parse_alpha(caps.get(4)),
        };
        return Some(hsl_to_rgb(&hsl));
    }

    None
}

/// Whether the trimmed input is exactly one of the supported color syntaxes.
pub fn is_color(input: &str) -> bool {
    HEX_PATTERN.is_match(input) || RGB_PATTERN.is_match(input) || HSL_PATTERN.is_match(input)
}

pub fn rgb_to_hsl(rgb: &ColorRgb) -> ColorHsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return ColorHsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
            a: rgb.a,
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    ColorHsl {
        h: h * 60.0,
        s: s * 100.0,
        l: l * 100.0,
        a: rgb.a,
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

pub fn hsl_to_rgb(hsl: &ColorHsl) -> ColorRgb {
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    let to_channel = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;

    if s == 0.0 {
        let v = to_channel(l);
        return ColorRgb {
            r: v,
            g: v,
            b: v,
            a: hsl.a,
        };
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    ColorRgb {
        r: to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        g: to_channel(hue_to_rgb(p, q, h)),
        b: to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        a: hsl.a,
    }
}

pub fn rgb_to_hex(rgb: &ColorRgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

pub fn rgb_to_hex8(rgb: &ColorRgb) -> String {
    let alpha = (rgb.a * 255.0).round() as u8;
    format!("{}{:02x}", rgb_to_hex(rgb), alpha)
}

/// CMYK percentages via K extraction.
pub fn rgb_to_cmyk(rgb: &ColorRgb) -> (u8, u8, u8, u8) {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        return (0, 0, 0, 100);
    }

    let part = |v: f64| ((1.0 - v - k) / (1.0 - k) * 100.0).round() as u8;
    (part(r), part(g), part(b), (k * 100.0).round() as u8)
}

/// Per-channel inversion; alpha is preserved.
pub fn complementary(rgb: &ColorRgb) -> ColorRgb {
    ColorRgb {
        r: 255 - rgb.r,
        g: 255 - rgb.g,
        b: 255 - rgb.b,
        a: rgb.a,
    }
}

/// Closest Tailwind palette name by Euclidean distance in RGB space.
pub fn nearest_tailwind(rgb: &ColorRgb) -> &'static str {
    let distance = |(r, g, b): (u8, u8, u8)| {
        let dr = i32::from(rgb.r) - i32::from(r);
        let dg = i32::from(rgb.g) - i32::from(g);
        let db = i32::from(rgb.b) - i32::from(b);
        dr * dr + dg * dg + db * db
    };

    let mut best = TAILWIND_COLORS[0];
    let mut best_distance = distance(best.1);
    for entry in &TAILWIND_COLORS[1..] {
        let d = distance(entry.1);
        if d < best_distance {
            best = *entry;
            best_distance = d;
        }
    }

    best.0
}

fn format_alpha(a: f64) -> String {
    let rounded = (a * 100.0).round() / 100.0;
    format!("{rounded}")
}

pub fn color_to_formats(input: &str) -> Option<ColorFormats> {
    let rgb = parse_color(input)?;
    let hsl = rgb_to_hsl(&rgb);
    let (c, m, y, k) = rgb_to_cmyk(&rgb);
    let alpha = format_alpha(rgb.a);

    let h = hsl.h.round() as u16 % 360;
    let s = hsl.s.round() as u8;
    let l = hsl.l.round() as u8;

    Some(ColorFormats {
        hex: rgb_to_hex(&rgb),
        hex8: rgb_to_hex8(&rgb),
        rgb: format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b),
        rgba: format!("rgba({}, {}, {}, {alpha})", rgb.r, rgb.g, rgb.b),
        hsl: format!("hsl({h}, {s}%, {l}%)"),
        hsla: format!("hsla({h}, {s}%, {l}%, {alpha})"),
        cmyk: format!("cmyk({c}%, {m}%, {y}%, {k}%)"),
        rgb_vector: format!("{}, {}, {}", rgb.r, rgb.g, rgb.b),
        tailwind: nearest_tailwind(&rgb).to_string(),
        complementary: rgb_to_hex(&complementary(&rgb)),
        values: rgb,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_hex_variants() {
        assert_eq!(parse_color("#f00"), Some(ColorRgb::opaque(255, 0, 0)));
        assert_eq!(parse_color("#FF6B35"), Some(ColorRgb::opaque(255, 107, 53)));

        let with_alpha = parse_color("#00ff0080").unwrap();
        assert_eq!((with_alpha.r, with_alpha.g, with_alpha.b), (0, 255, 0));
        assert!((with_alpha.a - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_rgb_and_rgba() {
        assert_eq!(
            parse_color("rgb(255, 107, 53)"),
            Some(ColorRgb::opaque(255, 107, 53))
        );
        let rgba = parse_color("rgba(10,20,30,0.5)").unwrap();
        assert_eq!((rgba.r, rgba.g, rgba.b), (10, 20, 30));
        assert_eq!(rgba.a, 0.5);
    }

    #[test]
    fn test_parse_rgb_out_of_range_clamps() {
        assert_eq!(parse_color("rgb(999,0,0)"), Some(ColorRgb::opaque(255, 0, 0)));
    }

    #[test]
    fn test_parse_hsl() {
        assert_eq!(parse_color("hsl(0, 100%, 50%)"), Some(ColorRgb::opaque(255, 0, 0)));
        assert_eq!(parse_color("hsl(120, 100%, 25%)"), Some(ColorRgb::opaque(0, 128, 0)));
        let hsla = parse_color("hsla(240, 100%, 50%, 0.25)").unwrap();
        assert_eq!((hsla.r, hsla.g, hsla.b), (0, 0, 255));
        assert_eq!(hsla.a, 0.25);
    }

    #[test]
    fn test_parse_rejects_other_text() {
        assert!(parse_color("red").is_none());
        assert!(parse_color("#12345").is_none());
        assert!(parse_color("rgb(1,2)").is_none());
    }

    #[test]
    fn test_hex_normalizes_to_lowercase() {
        let formats = color_to_formats("#FF6B35").unwrap();
        assert_eq!(formats.hex, "#ff6b35");
        assert_eq!(
            color_to_formats("rgb(255,107,53)").unwrap().hex,
            formats.hex
        );
    }

    #[test]
    fn test_color_to_formats_bundle() {
        let formats = color_to_formats("#FF6B35").unwrap();
        assert_eq!(formats.hex8, "#ff6b35ff");
        assert_eq!(formats.rgb, "rgb(255, 107, 53)");
        assert_eq!(formats.rgba, "rgba(255, 107, 53, 1)");
        assert_eq!(formats.hsl, "hsl(16, 100%, 60%)");
        assert_eq!(formats.cmyk, "cmyk(0%, 58%, 79%, 0%)");
        assert_eq!(formats.rgb_vector, "255, 107, 53");
        assert_eq!(formats.tailwind, "orange-500");
        assert_eq!(formats.complementary, "#0094ca");
    }

    #[test]
    fn test_rgb_to_cmyk_black() {
        assert_eq!(rgb_to_cmyk(&ColorRgb::opaque(0, 0, 0)), (0, 0, 0, 100));
        assert_eq!(rgb_to_cmyk(&ColorRgb::opaque(255, 0, 0)), (0, 100, 100, 0));
    }

    #[test]
    fn test_nearest_tailwind_exact_and_extremes() {
        assert_eq!(nearest_tailwind(&ColorRgb::opaque(59, 130, 246)), "blue-500");
        assert_eq!(nearest_tailwind(&ColorRgb::opaque(250, 250, 250)), "white");
        assert_eq!(nearest_tailwind(&ColorRgb::opaque(3, 3, 3)), "black");
    }

    #[test]
    fn test_complementary_preserves_alpha() {
        let c = complementary(&ColorRgb {
            r: 0,
            g: 100,
            b: 255,
            a: 0.5,
        });
        assert_eq!((c.r, c.g, c.b, c.a), (255, 155, 0, 0.5));
    }

    #[test]
    fn test_grayscale_has_zero_saturation() {
        let hsl = rgb_to_hsl(&ColorRgb::opaque(128, 128, 128));
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
    }

    proptest! {
        #[test]
        fn rgb_hsl_roundtrip_within_one(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let original = ColorRgb::opaque(r, g, b);
            let back = hsl_to_rgb(&rgb_to_hsl(&original));
            prop_assert!((i16::from(back.r) - i16::from(r)).abs() <= 1);
            prop_assert!((i16::from(back.g) - i16::from(g)).abs() <= 1);
            prop_assert!((i16::from(back.b) - i16::from(b)).abs() <= 1);
        }
    }
}
