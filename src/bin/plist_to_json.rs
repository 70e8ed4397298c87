//! Command-line interface for converting property lists to JSON

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
use plist_tools::io::{Sink, Source};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "plist-to-json")]
#[command(author, version, about = "Convert a property list to indented JSON", long_about = None)]
struct Cli {
    /// Source file, or '-' for standard input
    #[arg(value_name = "IN_FILE", default_value = "-")]
    in_file: String,

    /// Destination file, or '-' for standard output
    #[arg(value_name = "OUT_FILE", default_value = "-")]
    out_file: String,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let input = Source::new(&cli.in_file);
    let output = Sink::new(&cli.out_file);

    if let Err(e) = plist_tools::convert::plist_to_json(&input, &output) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
