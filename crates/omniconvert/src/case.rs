use crate::input::read_input;
use crate::prelude::*;
use crate::render::{output_fields, output_json, Fields};
use omniconvert_core::transform::text::{case_variants, CaseVariants};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct CaseOptions {
    /// Text to convert; `-` or nothing reads stdin
    input: Option<String>,
}

fn case_fields(cases: &CaseVariants) -> Fields {
    vec![
        ("upper", cases.upper.clone()),
        ("lower", cases.lower.clone()),
        ("title", cases.title.clone()),
        ("camel", cases.camel.clone()),
        ("pascal", cases.pascal.clone()),
        ("snake", cases.snake.clone()),
        ("kebab", cases.kebab.clone()),
        ("constant", cases.constant.clone()),
    ]
}

pub fn run(options: CaseOptions, global: crate::Global) -> Result<()> {
    let input = read_input(options.input.as_deref())?;
    let cases = case_variants(input.trim_end_matches(['\r', '\n']));

    crate::clipboard::copy_if_requested(&global, &cases.snake)?;

    if global.json {
        output_json(&cases)
    } else {
        output_fields("case", &case_fields(&cases))
    }
}
