use crate::input::read_input;
use crate::prelude::{eprintln, *};
use crate::render::{detection_fields, output_fields, output_json};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct DetectOptions {
    /// Text to classify; `-` or nothing reads stdin
    input: Option<String>,
}

pub fn run(options: DetectOptions, global: crate::Global) -> Result<()> {
    let input = read_input(options.input.as_deref())?;
    let result = omniconvert_core::detect(&input);
    log::debug!("detected {} ({:.2})", result.kind, result.confidence);

    if global.verbose {
        eprintln!("Input: {} bytes", input.len());
    }

    crate::clipboard::copy_if_requested(&global, result.kind.as_str())?;

    if global.json {
        output_json(&result)
    } else {
        output_fields("detection", &detection_fields(&result))
    }
}
