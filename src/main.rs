use std::path::PathBuf;

use clap::Parser;
use op1svg::{EmitOptions, emit};

/// Normalize SVG files so that the OP-1 understands them.
#[derive(Parser, Debug)]
#[command(name = "op1svg", version, about)]
struct Cli {
    /// File path of SVG file to fix
    in_path: PathBuf,

    /// File path to write the fixed SVG to
    out_path: PathBuf,

    /// Print debug messages (needs the `tracing` feature)
    #[arg(long)]
    debug: bool,

    /// Write the tree on a single line without indentation
    #[arg(long, conflicts_with = "indent")]
    compact: bool,

    /// Spaces of indentation per nesting level
    #[arg(long, value_name = "N", default_value_t = emit::DEFAULT_INDENT)]
    indent: usize,
}

impl Cli {
    fn emit_options(&self) -> EmitOptions {
        if self.compact {
            EmitOptions::compact()
        } else {
            EmitOptions::indented(self.indent)
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    op1svg::normalize_file_with(
        &cli.in_path,
        &cli.out_path,
        &cli.emit_options(),
        |stage| println!("{stage}"),
    )?;

    println!("Done.");
    Ok(())
}

#[cfg(feature = "tracing")]
fn init_logging(debug: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if debug { "op1svg=debug" } else { "op1svg=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(feature = "tracing"))]
fn init_logging(_debug: bool) {}
