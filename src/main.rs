use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use docxide_html::{Docx, Error, RenderOptions};

/// Render a DOCX file as a standalone HTML page
#[derive(Parser)]
#[command(name = "docxide-html", version, about)]
struct Cli {
    /// Input .docx file
    input: PathBuf,

    /// Output HTML file (default: input with .html)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file with render options (camelCase keys)
    #[arg(long)]
    options: Option<PathBuf>,

    /// JSON file with template variable values; turns on variable substitution
    #[arg(long)]
    data: Option<PathBuf>,

    /// Render one continuous section per document section instead of pages
    #[arg(long)]
    no_page: bool,

    /// Write the package back out to this path, variables substituted, instead of HTML
    #[arg(long, value_name = "DOCX")]
    download: Option<PathBuf>,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid JSON in {}: {e}", path.display()))
}

fn run(cli: &Cli) -> Result<(), String> {
    let mut options: RenderOptions = match &cli.options {
        Some(path) => read_json(path)?,
        None => RenderOptions::default(),
    };
    if let Some(path) = &cli.data {
        options.data = read_json(path)?;
        options.enable_var = true;
    }
    if cli.no_page {
        options.page = false;
    }

    let fail = |e: Error| e.to_string();
    if let Some(output) = &cli.download {
        let mut docx = Docx::open(&cli.input).map_err(fail)?;
        let bytes = docx.download(&options).map_err(fail)?;
        std::fs::write(output, bytes).map_err(|e| format!("cannot write {}: {e}", output.display()))?;
        log::info!("Wrote {}", output.display());
        return Ok(());
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension("html"));
    docxide_html::convert_docx_to_html(&cli.input, &output, &options).map_err(fail)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
