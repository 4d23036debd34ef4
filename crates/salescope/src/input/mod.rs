//! Input parsing: delimited files into raw tables.

mod parser;
mod source;

pub use parser::{Loader, LoaderConfig};
pub use source::{RawTable, SourceMetadata};
