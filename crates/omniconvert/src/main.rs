use crate::prelude::*;
use clap::Parser;

mod bytes;
mod case;
mod clipboard;
mod convert;
mod decoder;
mod detect;
mod error;
mod file;
mod generate;
mod input;
mod prelude;
mod render;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Detect what a piece of text is and show every useful representation of it"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "OMNICONVERT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,

    /// Output as JSON
    #[clap(long, env = "OMNICONVERT_JSON", global = true, default_value = "false")]
    json: bool,

    /// Reference time (RFC 3339) for relative times and JWT expiry
    #[clap(long, env = "OMNICONVERT_NOW", global = true)]
    now: Option<String>,

    /// Copy the primary result to the clipboard (OSC 52)
    #[clap(long, global = true, default_value = "false")]
    copy: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Detect the type of the input
    Detect(crate::detect::DetectOptions),

    /// Detect (or force) the type of the input and show all its formats
    Convert(crate::convert::ConvertOptions),

    /// Classify a file; images get metadata and a color palette
    File(crate::file::FileOptions),

    /// Generate random v4 UUIDs
    Uuid(crate::generate::UuidOptions),

    /// Generate lorem ipsum text
    Lorem(crate::generate::LoremOptions),

    /// Show the input in every letter case
    Case(crate::case::CaseOptions),

    /// Convert a byte count to human units
    Bytes(crate::bytes::BytesOptions),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Detect(options) => crate::detect::run(options, app.global),
        SubCommands::Convert(options) => crate::convert::run(options, app.global),
        SubCommands::File(options) => crate::file::run(options, app.global),
        SubCommands::Uuid(options) => crate::generate::run_uuid(options, app.global),
        SubCommands::Lorem(options) => crate::generate::run_lorem(options, app.global),
        SubCommands::Case(options) => crate::case::run(options, app.global),
        SubCommands::Bytes(options) => crate::bytes::run(options, app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
