//! Command-line interface for sorting property lists

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
use plist_tools::io::{Sink, Source};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "plist-sort")]
#[command(author, version, about = "Sort a property list or one of its nested lists", long_about = None)]
#[command(after_help = "Example:\n  # Sort Dash docsets alphabetically\n  plist-sort com.kapeli.dashdoc.plist - docsets docsetName")]
struct Cli {
    /// Source file, or '-' for standard input
    #[arg(value_name = "IN_FILE", default_value = "-")]
    in_file: String,

    /// Destination file, or '-' for standard output
    #[arg(value_name = "OUT_FILE", default_value = "-")]
    out_file: String,

    /// Dotted path to the dictionary or array to sort; defaults to the root
    #[arg(value_name = "TO_SORT", default_value = "")]
    to_sort: String,

    /// Dotted path, relative to each array element, used as the sort key
    #[arg(value_name = "SORT_BY", default_value = "")]
    sort_by: String,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let input = Source::new(&cli.in_file);
    let output = Sink::new(&cli.out_file);

    if let Err(e) = plist_tools::sort::sort_plist(&input, &output, &cli.to_sort, &cli.sort_by) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
