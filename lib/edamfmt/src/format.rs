use crate::error::FormatDetectionError;
use oxrdfio::RdfFormat;
use std::ffi::OsStr;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// How many bytes of a file the content sniff of [`SourceFormat::detect`] looks at.
const SNIFF_LEN: u64 = 1024;

/// A serialization format accepted for ontology files.
///
/// The EDAM ontology is published in RDF/XML and Turtle only, everything else
/// is rejected before any parsing happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// [RDF/XML](https://www.w3.org/TR/rdf-syntax-grammar/)
    RdfXml,
    /// [Turtle](https://www.w3.org/TR/turtle/)
    Turtle,
}

impl SourceFormat {
    /// Looks for the format matching a file extension.
    ///
    /// ```
    /// use edamfmt::SourceFormat;
    ///
    /// assert_eq!(
    ///     SourceFormat::from_extension("owl"),
    ///     Some(SourceFormat::RdfXml)
    /// );
    /// assert_eq!(SourceFormat::from_extension("json"), None);
    /// ```
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "ttl" | "turtle" => Some(Self::Turtle),
            "owl" | "rdf" | "rdfs" | "xml" => Some(Self::RdfXml),
            _ => None,
        }
    }

    /// Guesses the format from the first bytes of a document.
    ///
    /// The guess is a plain syntactic heuristic: a leading `<` means XML, a
    /// leading Turtle directive or comment means Turtle. It never attempts to
    /// parse the document.
    ///
    /// ```
    /// use edamfmt::SourceFormat;
    ///
    /// assert_eq!(
    ///     SourceFormat::from_leading_bytes(b"<?xml version=\"1.0\"?>"),
    ///     Some(SourceFormat::RdfXml)
    /// );
    /// assert_eq!(
    ///     SourceFormat::from_leading_bytes(b"@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> ."),
    ///     Some(SourceFormat::Turtle)
    /// );
    /// assert_eq!(SourceFormat::from_leading_bytes(b"{\"a\": 1}"), None);
    /// ```
    pub fn from_leading_bytes(bytes: &[u8]) -> Option<Self> {
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        let trimmed = bytes
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .map(|start| &bytes[start..])?;
        match trimmed.first()? {
            b'<' => Some(Self::RdfXml),
            b'@' | b'#' => Some(Self::Turtle),
            _ => {
                let keyword = trimmed.split(|b| b.is_ascii_whitespace()).next()?;
                if keyword.eq_ignore_ascii_case(b"prefix") || keyword.eq_ignore_ascii_case(b"base")
                {
                    Some(Self::Turtle)
                } else {
                    None
                }
            }
        }
    }

    /// Determines the serialization format of the file at `path`.
    ///
    /// The file extension decides when it is recognized. A file without an
    /// extension is sniffed from its first bytes instead. Detection precedes
    /// parsing: a detected file can still fail to load.
    pub fn detect(path: &Path) -> Result<Self, FormatDetectionError> {
        if let Some(extension) = path.extension().and_then(OsStr::to_str) {
            return Self::from_extension(extension)
                .ok_or_else(|| FormatDetectionError::UnsupportedExtension(extension.to_owned()));
        }
        let mut head = Vec::new();
        File::open(path)?.take(SNIFF_LEN).read_to_end(&mut head)?;
        Self::from_leading_bytes(&head)
            .ok_or_else(|| FormatDetectionError::UnknownContent(path.to_owned()))
    }

    /// The [`oxrdfio`] format used to parse and serialize this format.
    pub fn rdf_format(self) -> RdfFormat {
        match self {
            Self::RdfXml => RdfFormat::RdfXml,
            Self::Turtle => RdfFormat::Turtle,
        }
    }

    /// The format canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Self::RdfXml => "RDF/XML",
            Self::Turtle => "Turtle",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
