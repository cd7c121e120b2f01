use crate::prelude::{println, *};
use crate::render::output_json;
use omniconvert_core::transform::lorem::{generate_lorem, generate_paragraphs};
use omniconvert_core::transform::uuid::generate_uuid;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct UuidOptions {
    /// How many UUIDs to generate
    #[arg(short, long, default_value = "1")]
    count: usize,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct LoremOptions {
    /// Words per paragraph
    #[arg(short, long, default_value = "50")]
    words: usize,

    /// Number of paragraphs
    #[arg(short, long, default_value = "1")]
    paragraphs: usize,
}

pub fn run_uuid(options: UuidOptions, global: crate::Global) -> Result<()> {
    let mut rng = rand::thread_rng();
    let uuids: Vec<String> = (0..options.count).map(|_| generate_uuid(&mut rng)).collect();
    log::debug!("generated {} uuids", uuids.len());

    crate::clipboard::copy_if_requested(&global, &uuids.join("\n"))?;

    if global.json {
        return output_json(&uuids);
    }
    for uuid in &uuids {
        println!("{uuid}");
    }
    Ok(())
}

pub fn run_lorem(options: LoremOptions, global: crate::Global) -> Result<()> {
    let mut rng = rand::thread_rng();
    let text = if options.paragraphs > 1 {
        generate_paragraphs(&mut rng, options.paragraphs, options.words)
    } else {
        generate_lorem(&mut rng, options.words)
    };

    crate::clipboard::copy_if_requested(&global, &text)?;

    if global.json {
        return output_json(&serde_json::json!({ "text": text }));
    }
    println!("{text}");
    Ok(())
}
