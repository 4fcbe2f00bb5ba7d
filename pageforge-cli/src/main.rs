//! Command-line interface for pageforge
//! This binary drives the generation pipeline end to end: submit a prompt,
//! extract the response into files, assemble a sandboxed preview document,
//! and package the result.
//!
//! Usage:
//!   pageforge generate "<prompt>" [--out <dir>] [--preview <file>]  - Generate and extract a page
//!   pageforge extract <response-file> [--out <dir>] [--json]        - Extract a saved raw response
//!   pageforge preview <dir> [-o <file>]                             - Assemble a preview document
//!   pageforge archive <dir> [-o <file>]                             - Package generated files as a zip

mod fileset;

use std::fs;
use std::path::Path;

use clap::{Arg, ArgAction, Command};

use pageforge_config::{Loader, PageforgeConfig};
use pageforge_extract::extract;
use pageforge_llm::{enhance_prompt, GenerationClient};
use pageforge_preview::assemble;

fn main() {
    env_logger::init();

    let matches = Command::new("pageforge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate, extract and preview model-built web pages")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate")
                .about("Submit a prompt to the generation service and write the extracted files")
                .arg(
                    Arg::new("prompt")
                        .help("Natural-language description of the page to build")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .help("Output directory (default: taken from configuration)"),
                )
                .arg(
                    Arg::new("preview")
                        .long("preview")
                        .help("Also write the assembled preview document to this file"),
                )
                .arg(
                    Arg::new("model")
                        .long("model")
                        .help("Override the configured model"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the built-in defaults"),
                ),
        )
        .subcommand(
            Command::new("extract")
                .about("Extract files from a saved raw model response")
                .arg(
                    Arg::new("response")
                        .help("Path to a file holding the raw response text")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .help("Output directory (default: taken from configuration)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the file records as JSON instead of writing files")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("preview")
                .about("Assemble a directory of generated files into one preview document")
                .arg(
                    Arg::new("dir")
                        .help("Directory holding the generated files")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .default_value("preview.html"),
                ),
        )
        .subcommand(
            Command::new("archive")
                .about("Package a directory of generated files as a zip archive")
                .arg(
                    Arg::new("dir")
                        .help("Directory holding the generated files")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .default_value("pageforge.zip"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("generate", sub)) => handle_generate(sub),
        Some(("extract", sub)) => handle_extract(sub),
        Some(("preview", sub)) => handle_preview(sub),
        Some(("archive", sub)) => handle_archive(sub),
        _ => unreachable!("a subcommand is required"),
    }
}

/// Handle the generate command
fn handle_generate(matches: &clap::ArgMatches) {
    let config = load_config(matches);
    let prompt = matches
        .get_one::<String>("prompt")
        .expect("prompt is required");

    let client = GenerationClient::new(&config.llm).unwrap_or_else(|e| fail(&e.to_string()));
    let enhanced = enhance_prompt(prompt);

    let runtime = tokio::runtime::Runtime::new()
        .unwrap_or_else(|e| fail(&format!("failed to start async runtime: {}", e)));
    log::info!("requesting generation for: {}", prompt);
    let response = runtime
        .block_on(client.complete(&enhanced))
        .unwrap_or_else(|e| fail(&e.to_string()));

    let files = extract(&response);
    let out_dir = matches
        .get_one::<String>("out")
        .cloned()
        .unwrap_or_else(|| config.output.dir.clone());
    fileset::write_files(Path::new(&out_dir), &files)
        .unwrap_or_else(|e| fail(&format!("failed to write files to {}: {}", out_dir, e)));

    println!("Wrote {} file(s) to {}:", files.len(), out_dir);
    for file in &files {
        println!("  {} ({} bytes)", file.name, file.content.len());
    }

    if let Some(preview_path) = matches.get_one::<String>("preview") {
        let document = assemble(&files);
        fs::write(preview_path, document)
            .unwrap_or_else(|e| fail(&format!("failed to write {}: {}", preview_path, e)));
        println!("Preview document written to {}", preview_path);
    }
}

/// Handle the extract command
fn handle_extract(matches: &clap::ArgMatches) {
    let response_path = matches
        .get_one::<String>("response")
        .expect("response path is required");
    let response = fs::read_to_string(response_path)
        .unwrap_or_else(|e| fail(&format!("failed to read {}: {}", response_path, e)));

    let files = extract(&response);

    if matches.get_flag("json") {
        let records = fileset::to_records(&files);
        let json = serde_json::to_string_pretty(&records)
            .unwrap_or_else(|e| fail(&format!("failed to serialize records: {}", e)));
        println!("{}", json);
        return;
    }

    let out_dir = matches
        .get_one::<String>("out")
        .cloned()
        .unwrap_or_else(|| default_output_dir());
    fileset::write_files(Path::new(&out_dir), &files)
        .unwrap_or_else(|e| fail(&format!("failed to write files to {}: {}", out_dir, e)));
    println!("Wrote {} file(s) to {}", files.len(), out_dir);
}

/// Handle the preview command
fn handle_preview(matches: &clap::ArgMatches) {
    let dir = matches.get_one::<String>("dir").expect("dir is required");
    let output = matches.get_one::<String>("output").expect("has default");

    let files = fileset::load_dir(Path::new(dir))
        .unwrap_or_else(|e| fail(&format!("failed to read {}: {}", dir, e)));
    let document = assemble(&files);
    fs::write(output, document)
        .unwrap_or_else(|e| fail(&format!("failed to write {}: {}", output, e)));
    println!("Preview document written to {}", output);
}

/// Handle the archive command
fn handle_archive(matches: &clap::ArgMatches) {
    let dir = matches.get_one::<String>("dir").expect("dir is required");
    let output = matches.get_one::<String>("output").expect("has default");

    let files = fileset::load_dir(Path::new(dir))
        .unwrap_or_else(|e| fail(&format!("failed to read {}: {}", dir, e)));
    if files.is_empty() {
        fail(&format!("no .html/.css/.js files found in {}", dir));
    }
    fileset::write_archive(&files, Path::new(output))
        .unwrap_or_else(|e| fail(&format!("failed to write {}: {}", output, e)));
    println!("Archived {} file(s) to {}", files.len(), output);
}

/// Load configuration for the generate command, applying CLI overrides.
fn load_config(matches: &clap::ArgMatches) -> PageforgeConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(model) = matches.get_one::<String>("model") {
        loader = loader
            .set_override("llm.model", model.as_str())
            .unwrap_or_else(|e| fail(&format!("configuration error: {}", e)));
    }
    loader
        .build()
        .unwrap_or_else(|e| fail(&format!("configuration error: {}", e)))
}

fn default_output_dir() -> String {
    Loader::new()
        .build()
        .map(|config| config.output.dir)
        .unwrap_or_else(|_| "generated".to_string())
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
