//! Dump the OpenAPI document for external tooling.

use std::fs;
use std::path::PathBuf;

use backend::doc::ApiDoc;
use clap::{Parser, ValueEnum};
use color_eyre::eyre::WrapErr;
use utoipa::OpenApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

/// Print or write the generated OpenAPI specification.
#[derive(Debug, Parser)]
struct Args {
    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    format: Format,
    /// Write to a file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let doc = ApiDoc::openapi();
    let rendered = match args.format {
        Format::Json => doc.to_pretty_json().wrap_err("JSON serialisation failed")?,
        Format::Yaml => doc.to_yaml().wrap_err("YAML serialisation failed")?,
    };

    match args.out {
        Some(path) => fs::write(&path, rendered)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?,
        None => println!("{rendered}"),
    }
    Ok(())
}
