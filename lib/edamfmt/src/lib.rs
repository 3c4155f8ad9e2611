#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]

mod diff;
mod error;
mod format;
mod graph;
mod vocab;
mod xml;

pub use crate::diff::{ChangeKind, Hunk, LineChange, line_changes, unified_diff};
pub use crate::error::{FormatDetectionError, LoadError, SerializeError};
pub use crate::format::SourceFormat;
pub use crate::graph::{canonicalize, load_graph, serialize_canonical, serialize_canonical_pretty};
pub use crate::vocab::PREFIXES;
