//! Loading and canonical serialization of ontology graphs.

use crate::error::{LoadError, SerializeError};
use crate::format::SourceFormat;
use crate::vocab;
use crate::xml;
use oxrdf::dataset::CanonicalizationAlgorithm;
use oxrdf::{Graph, Triple};
use oxrdfio::{RdfParser, RdfSerializer};
use std::io::Read;

/// Parses every statement of `read` into an in-memory graph.
///
/// Both supported formats describe a single graph, so everything lands in the
/// same [`Graph`]. The input prefixes are irrelevant to the canonical output
/// and are not retained.
pub fn load_graph<R: Read>(read: R, format: SourceFormat) -> Result<Graph, LoadError> {
    let mut graph = Graph::new();
    for quad in RdfParser::from_format(format.rdf_format()).for_reader(read) {
        let quad = quad?;
        graph.insert(&Triple::new(quad.subject, quad.predicate, quad.object));
    }
    Ok(graph)
}

/// Relabels the blank nodes of `graph` with their canonical names, making the
/// serializations of isomorphic graphs equal.
pub fn canonicalize(graph: &mut Graph) {
    graph.canonicalize(CanonicalizationAlgorithm::Unstable);
}

/// Serializes a canonicalized graph to its canonical textual form.
///
/// Statements are emitted in the order of their N-Triples rendering, so the
/// output does not depend on parsing order, and the fixed prefix table of
/// [`vocab`](crate::PREFIXES) replaces whatever the source document declared.
/// This is the form `--check` compares against for both formats.
pub fn serialize_canonical(graph: &Graph, format: SourceFormat) -> Result<String, SerializeError> {
    let mut serializer = RdfSerializer::from_format(format.rdf_format());
    for (prefix, namespace) in vocab::effective_prefixes() {
        serializer = serializer.with_prefix(prefix, namespace)?;
    }

    let mut triples: Vec<_> = graph.iter().collect();
    triples.sort_by_cached_key(|triple| triple.to_string());

    let mut writer = serializer.for_writer(Vec::new());
    for triple in triples {
        writer.serialize_triple(triple)?;
    }
    Ok(String::from_utf8(writer.finish()?)?)
}

/// Like [`serialize_canonical`], with RDF/XML output additionally
/// pretty-printed.
///
/// Turtle output is identical in both modes. This is the form `--reformat`
/// writes to disk; checks keep comparing against [`serialize_canonical`], so
/// for RDF/XML the two forms of one graph differ textually on purpose.
pub fn serialize_canonical_pretty(
    graph: &Graph,
    format: SourceFormat,
) -> Result<String, SerializeError> {
    let text = serialize_canonical(graph, format)?;
    match format {
        SourceFormat::RdfXml => xml::prettify(&text),
        SourceFormat::Turtle => Ok(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    const SEE_ALSO: &str = "http://www.w3.org/2000/01/rdf-schema#seeAlso";

    fn canonical_turtle(document: &str) -> String {
        let mut graph = load_graph(document.as_bytes(), SourceFormat::Turtle)
            .expect("the test document should parse");
        canonicalize(&mut graph);
        serialize_canonical(&graph, SourceFormat::Turtle).expect("serialization should succeed")
    }

    #[test]
    fn statement_order_does_not_matter() {
        let forward = format!(
            "<urn:a> <{LABEL}> \"a\" .\n<urn:b> <{LABEL}> \"b\" .\n<urn:b> <{SEE_ALSO}> <urn:a> .\n"
        );
        let backward = format!(
            "<urn:b> <{SEE_ALSO}> <urn:a> .\n<urn:b> <{LABEL}> \"b\" .\n<urn:a> <{LABEL}> \"a\" .\n"
        );
        assert_eq!(canonical_turtle(&forward), canonical_turtle(&backward));
    }

    #[test]
    fn blank_node_names_do_not_matter() {
        let first = format!("_:x <{LABEL}> \"node\" .\n<urn:a> <{SEE_ALSO}> _:x .\n");
        let second = format!("_:renamed <{LABEL}> \"node\" .\n<urn:a> <{SEE_ALSO}> _:renamed .\n");
        assert_eq!(canonical_turtle(&first), canonical_turtle(&second));
    }

    #[test]
    fn source_prefixes_do_not_matter() {
        let with_prefix = format!(
            "@prefix weird: <http://www.geneontology.org/formats/oboInOwl#> .\n<urn:a> weird:hasDefinition \"def\" .\n<urn:a> <{LABEL}> \"a\" .\n"
        );
        let without_prefix = format!(
            "<urn:a> <http://www.geneontology.org/formats/oboInOwl#hasDefinition> \"def\" .\n<urn:a> <{LABEL}> \"a\" .\n"
        );
        let canonical = canonical_turtle(&with_prefix);
        assert_eq!(canonical, canonical_turtle(&without_prefix));
        assert!(!canonical.contains("weird"));
        assert!(canonical.contains("oboInOwl:"));
    }

    #[test]
    fn canonical_turtle_is_a_fixed_point() {
        let document = format!(
            "_:b <{LABEL}> \"blank\" .\n<http://edamontology.org/topic_0003> <{LABEL}> \"Topic\" .\n<http://edamontology.org/topic_0003> <{SEE_ALSO}> _:b .\n"
        );
        let once = canonical_turtle(&document);
        assert_eq!(once, canonical_turtle(&once));
    }

    #[test]
    fn canonical_rdfxml_pretty_is_a_fixed_point() {
        let document = format!(
            "<http://edamontology.org/topic_0003> <{LABEL}> \"Topic\" .\n<http://edamontology.org/topic_0003> <{SEE_ALSO}> <urn:a> .\n"
        );
        let mut graph = load_graph(document.as_bytes(), SourceFormat::Turtle)
            .expect("the test document should parse");
        canonicalize(&mut graph);
        let pretty = serialize_canonical_pretty(&graph, SourceFormat::RdfXml)
            .expect("serialization should succeed");

        let mut reparsed = load_graph(pretty.as_bytes(), SourceFormat::RdfXml)
            .expect("the pretty form should parse");
        assert_eq!(graph, reparsed);
        canonicalize(&mut reparsed);
        let again = serialize_canonical_pretty(&reparsed, SourceFormat::RdfXml)
            .expect("serialization should succeed");
        assert_eq!(pretty, again);
    }

    #[test]
    fn syntax_errors_are_reported() {
        assert!(matches!(
            load_graph(&b"<urn:a> <urn:b> ."[..], SourceFormat::Turtle),
            Err(LoadError::Syntax(_))
        ));
        assert!(matches!(
            load_graph(&b"not even xml"[..], SourceFormat::RdfXml),
            Err(LoadError::Syntax(_))
        ));
    }
}
