//! formatted-blocks CLI - convert Markdown or HTML and print the result

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use formatted_blocks::{ConvertOptions, FormattedBlocks, FormattedNode, DEFAULT_MAX_DEPTH};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "formatted-blocks")]
#[command(version, about = "Convert Markdown or HTML to a formatted text document", long_about = None)]
struct Cli {
    /// Input file (reads stdin when omitted or '-')
    input: Option<PathBuf>,

    /// Input format
    #[arg(short = 'f', long, value_enum, default_value_t = InputFormat::Markdown)]
    from: InputFormat,

    /// Maximum nesting depth before conversion fails
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Keep text nodes consisting of a single newline
    #[arg(long)]
    keep_newlines: bool,

    /// Also print the input tree
    #[arg(long)]
    show_input: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum InputFormat {
    Markdown,
    Html,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formatted_blocks=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let source = read_input(cli.input.as_ref())?;

    let node = match cli.from {
        InputFormat::Markdown => formatted_blocks::parse_markdown(&source),
        InputFormat::Html => formatted_blocks::parse_html(&source),
    };
    if cli.show_input {
        println!("{node:#?}");
    }

    let service = FormattedBlocks::with_options(ConvertOptions {
        max_depth: cli.max_depth,
        drop_newline_text: !cli.keep_newlines,
    });
    let doc = service
        .convert_document(&node)
        .context("failed to convert input")?;

    tracing::info!(
        blocks = doc.children().map_or(0, <[FormattedNode]>::len),
        "converted document"
    );
    println!("{doc:#?}");

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
