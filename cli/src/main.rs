//! pdf2html CLI - batch PDF to HTML conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdf2html::convert::{pdf_candidates, FileStatus};
use pdf2html::render::{to_json, JsonFormat};

#[derive(Parser)]
#[command(name = "pdf2html")]
#[command(version)]
#[command(about = "Convert PDF documents to structured HTML", long_about = None)]
struct Cli {
    /// Input directory containing PDF files
    #[arg(value_name = "DIR")]
    input: Option<PathBuf>,

    /// Output directory for HTML files
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every PDF in a directory to HTML
    Convert {
        /// Input directory containing PDF files
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory for HTML files
        #[arg(short, long, value_name = "DIR", default_value = "html_output")]
        output: PathBuf,
    },

    /// Convert a single PDF file to HTML
    File {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory for the HTML file
        #[arg(short, long, value_name = "DIR", default_value = "html_output")]
        output: PathBuf,
    },

    /// Dump the reconstructed logical document as JSON
    Json {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert { input, output }) => cmd_convert(&input, &output),
        Some(Commands::File { input, output }) => cmd_file(&input, &output),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                let output = cli
                    .output
                    .unwrap_or_else(|| PathBuf::from("html_output"));
                cmd_convert(&input, &output)
            } else {
                println!("{}", "Usage: pdf2html <DIR> [OUTPUT]".yellow());
                println!("       pdf2html --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let candidates = pdf_candidates(input)?;
    log::info!(
        "found {} candidate files in {}",
        candidates.len(),
        input.display()
    );
    if candidates.is_empty() {
        println!(
            "{} no PDF files found in {}",
            "Warning:".yellow(),
            input.display()
        );
        return Ok(());
    }

    let pb = ProgressBar::new(candidates.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let summary = pdf2html::convert_dir_with(input, output, |report| {
        pb.inc(1);
        if let FileStatus::Failed(reason) = &report.status {
            pb.println(format!(
                "{} {}: {}",
                "Failed".red(),
                report.input.display(),
                reason
            ));
        }
    })?;

    pb.finish_with_message("Done!");

    println!();
    for report in &summary.reports {
        match &report.status {
            FileStatus::Converted { output, bytes } => println!(
                "  {} {} ({} bytes)",
                "✓".green(),
                output.display(),
                bytes
            ),
            FileStatus::Empty => println!(
                "  {} {} (no text, skipped)",
                "-".yellow(),
                report.input.display()
            ),
            FileStatus::Failed(_) => {
                println!("  {} {}", "✗".red(), report.input.display())
            }
        }
    }

    println!(
        "\n{} {} converted, {} empty, {} failed",
        "Summary:".bold(),
        summary.converted(),
        summary.empty(),
        summary.failed()
    );

    Ok(())
}

fn cmd_file(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    match pdf2html::convert_file(input, output)? {
        pdf2html::Outcome::Written { path, bytes } => {
            println!(
                "{} {} ({} bytes)",
                "Saved to".green(),
                path.display(),
                bytes
            );
        }
        pdf2html::Outcome::NoText => {
            println!(
                "{} no text content in {}, nothing written",
                "Warning:".yellow(),
                input.display()
            );
        }
    }
    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = pdf2html::extract_document(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdf2html".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF to structured HTML conversion tool");
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_convert_with_no_pdfs_succeeds() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        assert!(cmd_convert(input.path(), output.path()).is_ok());
    }

    #[test]
    fn test_file_with_missing_input_fails() {
        let output = tempfile::tempdir().unwrap();
        let missing = output.path().join("does-not-exist.pdf");
        assert!(cmd_file(&missing, output.path()).is_err());
    }
}
