use oxrdf::IriParseError;
use oxrdfio::{RdfParseError, RdfSyntaxError};
use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

/// Error returned when the serialization format of a file cannot be determined.
///
/// Detection happens before any RDF parsing, so this error never wraps a
/// syntax error.
#[derive(Debug, thiserror::Error)]
pub enum FormatDetectionError {
    /// The file extension does not name a supported format.
    #[error("the file extension '{0}' does not name a supported RDF serialization")]
    UnsupportedExtension(String),
    /// The file has no telling extension and its first bytes are neither XML nor Turtle.
    #[error("{} is neither an RDF/XML nor a Turtle document", .0.display())]
    UnknownContent(PathBuf),
    /// I/O error while reading the head of the file.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Error returned while loading a graph from a document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// I/O error while reading the input.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The input violates the grammar of its serialization format.
    #[error(transparent)]
    Syntax(#[from] RdfSyntaxError),
}

impl From<RdfParseError> for LoadError {
    #[inline]
    fn from(error: RdfParseError) -> Self {
        match error {
            RdfParseError::Io(e) => Self::Io(e),
            RdfParseError::Syntax(e) => Self::Syntax(e),
        }
    }
}

/// Error returned while producing the canonical serialization of a graph.
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    /// I/O error while writing the serialization.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A prefix of the namespace table is not a valid IRI.
    #[error(transparent)]
    Prefix(#[from] IriParseError),
    /// The XML pretty-printer rejected the serializer output.
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),
    /// The serializer emitted non UTF-8 output.
    #[error(transparent)]
    Utf8(#[from] FromUtf8Error),
}
