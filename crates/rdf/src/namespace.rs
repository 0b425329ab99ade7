//! Namespace prefixes for compact IRI notation.
//!
//! Prefix aliases are cosmetic: identity is always the full IRI, and
//! two documents binding different aliases to the same namespace still
//! cross-resolve. Registration order is preserved so serialized
//! `@prefix` blocks are stable across runs.

/// Prefix → namespace IRI registry, in registration order.
#[derive(Debug, Clone, Default)]
pub struct NamespaceManager {
    prefixes: Vec<(String, String)>,
}

impl NamespaceManager {
    /// Registry pre-loaded with the vocabularies every document here
    /// uses.
    pub fn common() -> Self {
        let mut mgr = Self::default();
        mgr.add_prefix("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#");
        mgr.add_prefix("rdfs", "http://www.w3.org/2000/01/rdf-schema#");
        mgr.add_prefix("foaf", "http://xmlns.com/foaf/0.1/");
        mgr.add_prefix("dc", "http://purl.org/dc/terms/");
        mgr.add_prefix("xsd", "http://www.w3.org/2001/XMLSchema#");
        mgr.add_prefix("schema", "http://schema.org/");
        mgr
    }

    /// Bind a prefix. Re-binding an existing prefix replaces its IRI in
    /// place, keeping the original position.
    pub fn add_prefix(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        let prefix = prefix.into();
        let iri = iri.into();
        if let Some(slot) = self.prefixes.iter_mut().find(|(p, _)| *p == prefix) {
            slot.1 = iri;
        } else {
            self.prefixes.push((prefix, iri));
        }
    }

    /// Expand a `prefix:local` pair to a full IRI.
    pub fn expand(&self, prefix: &str, local: &str) -> Option<String> {
        self.prefixes
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, iri)| format!("{iri}{local}"))
    }

    /// Split an IRI into (prefix, local) against the first matching
    /// registered namespace.
    pub fn split<'a>(&'a self, iri: &'a str) -> Option<(&'a str, &'a str)> {
        self.prefixes.iter().find_map(|(prefix, ns)| {
            iri.strip_prefix(ns.as_str())
                .map(|local| (prefix.as_str(), local))
        })
    }

    /// Registered bindings in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(p, i)| (p.as_str(), i.as_str()))
    }
}
