use crate::input::{read_input, resolve_now};
use crate::prelude::{eprintln, *};
use crate::render::{formats_fields, output_fields, output_json};
use omniconvert_core::{DetectedType, Formats};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ConvertOptions {
    /// Text to convert; `-` or nothing reads stdin
    input: Option<String>,

    /// Skip detection and convert as this type (json, color, jwt, ...)
    #[arg(long = "as", value_name = "TYPE")]
    kind: Option<String>,
}

/// Detect or parse the requested type, then build its bundle.
pub fn convert_text(input: &str, forced: Option<&str>, global: &crate::Global) -> Result<Formats> {
    let kind = match forced {
        Some(name) => name.parse::<DetectedType>()?,
        None => {
            let result = omniconvert_core::detect(input);
            if global.verbose {
                eprintln!("Detected {} with confidence {:.2}", result.kind, result.confidence);
            }
            result.kind
        }
    };
    log::debug!("converting as {kind}");

    let now = resolve_now(global)?;
    omniconvert_core::try_transform(kind, input, now).map_err(|e| {
        Error::Conversion {
            kind: kind.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

pub fn output(formats: &Formats, global: &crate::Global) -> Result<()> {
    crate::clipboard::copy_if_requested(global, &formats.primary())?;

    if global.json {
        output_json(formats)
    } else {
        output_fields(formats.kind().as_str(), &formats_fields(formats))
    }
}

pub fn run(options: ConvertOptions, global: crate::Global) -> Result<()> {
    let input = read_input(options.input.as_deref())?;
    let formats = convert_text(&input, options.kind.as_deref(), &global)?;
    output(&formats, &global)
}
