//! soldoc — generate documentation from Solidity compiler artifacts.
//!
//! Merges the ABI, devdoc, and userdoc sections of each artifact into one
//! contract description and renders it. Two modes:
//!
//! - **stdin mode**: `soldoc < artifact.json` writes markdown to stdout
//! - **file mode**: `soldoc -o docs artifacts/*.json`

mod artifact;
mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "soldoc",
    about = "Generate documentation from Solidity compiler artifacts"
)]
struct Cli {
    /// Input artifact files (glob patterns supported). If omitted, reads
    /// one artifact from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

/// stdin mode: read one artifact from stdin, write the rendered page to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let artifact: artifact::Artifact =
        serde_json::from_str(&input).context("failed to parse artifact from stdin")?;
    let contract = parser::parse_contract(&artifact)
        .with_context(|| format!("failed to parse contract {}", artifact.contract_name))?;

    let renderer = render::create_renderer(&cli.format)?;
    print!("{}", renderer.render(&contract)?);
    Ok(())
}

/// file mode: process multiple artifacts, write one page per contract.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;

    let renderer = render::create_renderer(&cli.format)?;
    let ext = renderer.file_extension();

    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let artifact: artifact::Artifact = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse artifact: {}", path.display()))?;

        let contract = parser::parse_contract(&artifact)
            .with_context(|| format!("failed to parse contract {}", artifact.contract_name))?;

        let out_path = output_dir.join(format!("{}.{}", artifact.contract_name, ext));
        fs::write(&out_path, renderer.render(&contract)?)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }

    Ok(())
}

/// File extensions recognized as artifacts.
const SUPPORTED_EXTENSIONS: &[&str] = &["json"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for artifact files.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // If it's a directory, scan for artifacts (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() {
                    if let Some(ext) = p.extension().and_then(|e| e.to_str()) {
                        if SUPPORTED_EXTENSIONS.contains(&ext) {
                            files.push(p);
                        }
                    }
                }
            }
            continue;
        }
        // Try as glob
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}
