// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Interference and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Interference CLI entrypoint.
//!
//! Generates a random pattern (or loads one from a JSON document) and prints its box-drawing
//! rendering and solution. `--json` prints the full pattern view instead.

use std::error::Error;
use std::path::PathBuf;

use interference::format::{export_pattern_document, export_pattern_view, load_pattern_document};
use interference::format::{PatternDocument, PatternView};
use interference::generate::{generate, GenerateParams};
use interference::InterferencePattern;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn print_usage(program: &str) {
    let defaults = GenerateParams::default();
    eprintln!(
        "Usage:\n  {program} [--width <n>] [--height <n>] [--markers <n>] [--arrows <n>] [--sequence <n>] [--seed <n>] [--json | --document] [--check]\n  {program} --input <pattern.json> [--json | --document] [--check]\n  {program} --schema\n\nWithout --input a random pattern is generated (defaults: {}x{}, {} markers, {} arrows).\n--sequence sets the solving-order length (default: every marker once).\n--seed makes generation reproducible; the seed in use is printed to stderr.\n--json prints the full pattern view, --document the re-loadable input document.\n--check reports one-sided connections on stderr.\n--schema prints the JSON schemas of the input document and the pattern view.",
        defaults.width, defaults.height, defaults.markers, defaults.arrows
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum OutputFormat {
    #[default]
    Text,
    View,
    Document,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    input: Option<PathBuf>,
    width: Option<usize>,
    height: Option<usize>,
    markers: Option<usize>,
    arrows: Option<usize>,
    sequence: Option<usize>,
    seed: Option<u64>,
    output: OutputFormat,
    check: bool,
    schema: bool,
}

fn parse_value<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    slot: &mut Option<T>,
) -> Result<(), ()> {
    if slot.is_some() {
        return Err(());
    }
    let raw = args.next().ok_or(())?;
    *slot = Some(raw.trim().parse().map_err(|_| ())?);
    Ok(())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => parse_value(&mut args, &mut options.input)?,
            "--width" => parse_value(&mut args, &mut options.width)?,
            "--height" => parse_value(&mut args, &mut options.height)?,
            "--markers" => parse_value(&mut args, &mut options.markers)?,
            "--arrows" => parse_value(&mut args, &mut options.arrows)?,
            "--sequence" => parse_value(&mut args, &mut options.sequence)?,
            "--seed" => parse_value(&mut args, &mut options.seed)?,
            "--json" | "--document" => {
                if options.output != OutputFormat::Text {
                    return Err(());
                }
                options.output =
                    if arg == "--json" { OutputFormat::View } else { OutputFormat::Document };
            }
            "--check" => {
                if options.check {
                    return Err(());
                }
                options.check = true;
            }
            "--schema" => {
                if options.schema {
                    return Err(());
                }
                options.schema = true;
            }
            _ => return Err(()),
        }
    }

    let generator_flags = options.width.is_some()
        || options.height.is_some()
        || options.markers.is_some()
        || options.arrows.is_some()
        || options.sequence.is_some()
        || options.seed.is_some();

    if options.input.is_some() && generator_flags {
        return Err(());
    }

    if options.schema && (options.input.is_some() || generator_flags || options.check) {
        return Err(());
    }

    Ok(options)
}

fn generate_params(options: &CliOptions) -> GenerateParams {
    let defaults = GenerateParams::default();
    GenerateParams {
        width: options.width.unwrap_or(defaults.width),
        height: options.height.unwrap_or(defaults.height),
        markers: options.markers.unwrap_or(defaults.markers),
        arrows: options.arrows.unwrap_or(defaults.arrows),
        sequence_len: options.sequence.or(defaults.sequence_len),
    }
}

fn print_schemas() -> Result<(), Box<dyn Error>> {
    let document = schemars::schema_for!(PatternDocument);
    let view = schemars::schema_for!(PatternView);
    let both = serde_json::json!({ "document": document, "view": view });
    println!("{}", serde_json::to_string_pretty(&both)?);
    Ok(())
}

fn report_mismatches(pattern: &InterferencePattern) {
    for mismatch in pattern.mirror_mismatches() {
        match mismatch.neighbor {
            Some(neighbor) => eprintln!(
                "interference: cell {} opens {} but {} does not open {}",
                mismatch.point,
                mismatch.heading,
                neighbor,
                mismatch.heading.opposite()
            ),
            None => eprintln!(
                "interference: cell {} opens {} off the edge of the grid",
                mismatch.point, mismatch.heading
            ),
        }
    }
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "interference".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.schema {
            return print_schemas();
        }

        let pattern = match &options.input {
            Some(path) => load_pattern_document(path)?,
            None => {
                let seed = options.seed.unwrap_or_else(rand::random);
                eprintln!("interference: seed {seed}");
                let mut rng = ChaCha20Rng::seed_from_u64(seed);
                generate(&mut rng, &generate_params(&options))?
            }
        };

        if options.check {
            report_mismatches(&pattern);
        }

        match options.output {
            OutputFormat::Text => {
                print!("{pattern}");
                println!("solution: {}", pattern.solution_sequence().join(" "));
            }
            OutputFormat::View => println!("{}", export_pattern_view(&pattern)?),
            OutputFormat::Document => println!("{}", export_pattern_document(&pattern)?),
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("interference: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_params, parse_options, CliOptions, OutputFormat};

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn parses_generator_flags() {
        let options =
            parse(&["--width", "5", "--height", "4", "--seed", "9", "--json"]).expect("options");
        assert_eq!(options.width, Some(5));
        assert_eq!(options.height, Some(4));
        assert_eq!(options.seed, Some(9));
        assert_eq!(options.output, OutputFormat::View);

        let params = generate_params(&options);
        assert_eq!((params.width, params.height), (5, 4));
    }

    #[test]
    fn rejects_input_combined_with_generator_flags() {
        assert_eq!(parse(&["--input", "p.json", "--width", "3"]), Err(()));
    }

    #[test]
    fn rejects_duplicates_and_unknown_flags() {
        assert_eq!(parse(&["--seed", "1", "--seed", "2"]), Err(()));
        assert_eq!(parse(&["--json", "--document"]), Err(()));
        assert_eq!(parse(&["--frobnicate"]), Err(()));
        assert_eq!(parse(&["--width", "wide"]), Err(()));
        assert_eq!(parse(&["--width"]), Err(()));
    }

    #[test]
    fn schema_stands_alone() {
        assert!(parse(&["--schema"]).expect("options").schema);
        assert_eq!(parse(&["--schema", "--seed", "1"]), Err(()));
    }
}
