use crate::prelude::*;
use crate::render::{output_fields, output_json, Fields};
use omniconvert_core::transform::number::{byte_size_formats, ByteSizeFormats};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct BytesOptions {
    /// Size in bytes
    bytes: u64,
}

fn byte_fields(formats: &ByteSizeFormats) -> Fields {
    vec![
        ("bytes", formats.bytes.to_string()),
        ("kilobytes", formats.kilobytes.to_string()),
        ("megabytes", formats.megabytes.to_string()),
        ("gigabytes", formats.gigabytes.to_string()),
        ("human", formats.human.clone()),
    ]
}

pub fn run(options: BytesOptions, global: crate::Global) -> Result<()> {
    let formats = byte_size_formats(options.bytes);

    crate::clipboard::copy_if_requested(&global, &formats.human)?;

    if global.json {
        output_json(&formats)
    } else {
        output_fields("bytes", &byte_fields(&formats))
    }
}
