//! The namespace bindings of the canonical serialization.

/// Prefixes bound before serializing, in binding order.
///
/// The table is fixed: canonical output must not depend on the prefix choices
/// of the input document, so these bindings replace whatever the source
/// declared. The empty prefix is the EDAM namespace itself.
pub const PREFIXES: [(&str, &str); 14] = [
    ("", "http://edamontology.org/"),
    ("obo", "http://www.geneontology.org/formats/oboInOwl#"),
    ("dc", "http://purl.org/dc/elements/1.1/"),
    ("dcterms", "http://purl.org/dc/terms/"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("skos", "http://www.w3.org/2004/02/skos/core#"),
    ("xml", "http://www.w3.org/XML/1998/namespace"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ("doap", "http://usefulinc.com/ns/doap#"),
    ("foaf", "http://xmlns.com/foaf/0.1/"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("oboInOwl", "http://www.geneontology.org/formats/oboInOwl#"),
    ("oboLegacy", "http://purl.obolibrary.org/obo/"),
];

/// The bindings that reach the serializer.
///
/// Binding a namespace a second time replaces the earlier prefix, so of the
/// two names [`PREFIXES`] gives the oboInOwl namespace, `oboInOwl` wins.
pub(crate) fn effective_prefixes() -> Vec<(&'static str, &'static str)> {
    let mut bindings: Vec<(&'static str, &'static str)> = Vec::with_capacity(PREFIXES.len());
    for (prefix, namespace) in PREFIXES {
        if let Some(binding) = bindings.iter_mut().find(|(_, bound)| *bound == namespace) {
            *binding = (prefix, namespace);
        } else {
            bindings.push((prefix, namespace));
        }
    }
    bindings
}
