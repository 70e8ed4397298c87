//! # plist-tools
//!
//! Command-line converters for property lists: sort a property list (or
//! one of its nested containers) by case-folded keys, and render a
//! property list as JSON.
//!
//! The document model is [`plist::Value`]; both the compact binary and
//! textual XML encodings are read transparently, detected from content.
//!
//! ## Example
//!
//! ```rust,ignore
//! use plist_tools::io::{Sink, Source};
//!
//! // Sort Dash docsets alphabetically
//! plist_tools::sort::sort_plist(
//!     &Source::new("com.kapeli.dashdoc.plist"),
//!     &Sink::new("-"),
//!     "docsets",
//!     "docsetName",
//! )?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convert;
pub mod error;
pub mod io;
pub mod paths;
pub mod sort;

// Re-exports for convenience
pub use error::{Error, Result};
pub use paths::KeyPath;

/// Version of the plist-tools library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
