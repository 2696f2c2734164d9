//! `jsondom` CLI: inspect and re-render JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Re-render compactly (stdin → stdout)
//! echo '{ "name": "Alice", "age": 30 }' | jsondom render
//!
//! # Pretty-print from file to file
//! jsondom render --pretty -i data.json -o pretty.json
//!
//! # Print the value at a dot-separated path
//! jsondom get items.0.id -i data.json
//!
//! # Print the kind of the root, or of a path
//! jsondom kind items -i data.json
//!
//! # Count the elements of a list or the members of a map
//! jsondom len items -i data.json
//! ```
//!
//! On failure the error class and message are printed to stderr and the
//! process exits with status 1.

use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jsondom::{render_with, Document, Kind, RenderOptions};

#[derive(Parser)]
#[command(
    name = "jsondom",
    version,
    about = "Inspect and re-render JSON documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and write it back out
    Render {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Indent nested values instead of writing compact JSON
        #[arg(long)]
        pretty: bool,
        /// Spaces per nesting level with --pretty
        #[arg(long, default_value_t = 2)]
        indent: usize,
    },
    /// Print the value at a dot-separated path
    Get {
        /// Path such as `items.0.id`
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Indent nested values
        #[arg(long)]
        pretty: bool,
    },
    /// Print the kind of the root or of the value at a path
    Kind {
        /// Path such as `items.0` (the root if omitted)
        path: Option<String>,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the number of elements or members at a path
    Len {
        /// Path such as `items` (the root if omitted)
        path: Option<String>,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.chain().find_map(|e| e.downcast_ref::<jsondom::Error>()) {
                Some(dom_err) => eprintln!("Error [{}]: {:#}", dom_err.kind(), err),
                None => eprintln!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Render {
            input,
            output,
            pretty,
            indent,
        } => {
            let doc = load(input.as_deref())?;
            let text = render_with(&doc, &render_options(pretty, indent));
            write_output(output.as_deref(), &text)?;
        }
        Commands::Get {
            path,
            input,
            pretty,
        } => {
            let doc = load(input.as_deref())?;
            let value = doc
                .select(&path)
                .with_context(|| format!("Failed to select '{}'", path))?;
            println!("{}", render_with(value, &render_options(pretty, 2)));
        }
        Commands::Kind { path, input } => {
            let doc = load(input.as_deref())?;
            let path = path.unwrap_or_default();
            let value = doc
                .select(&path)
                .with_context(|| format!("Failed to select '{}'", path))?;
            println!("{}", value.kind());
        }
        Commands::Len { path, input } => {
            let doc = load(input.as_deref())?;
            let path = path.unwrap_or_default();
            let value = doc
                .select(&path)
                .with_context(|| format!("Failed to select '{}'", path))?;
            let len = match value.kind() {
                Kind::List => value.as_sequence()?.len(),
                _ => value
                    .as_mapping()
                    .with_context(|| format!("'{}' has no length", path))?
                    .len(),
            };
            println!("{}", len);
        }
    }

    Ok(())
}

fn render_options(pretty: bool, indent: usize) -> RenderOptions {
    if pretty {
        RenderOptions::pretty(indent)
    } else {
        RenderOptions::compact()
    }
}

fn load(path: Option<&str>) -> Result<Document> {
    let text = read_input(path)?;
    let doc = Document::parse(&text).with_context(|| match path {
        Some(path) => format!("Failed to parse document: {}", path),
        None => "Failed to parse document from stdin".to_string(),
    })?;
    Ok(doc)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
