use oxrdf::{NamedNode, Subject, Term, Triple};

use crate::namespace::NamespaceManager;

/// One output document: a base IRI, its prefix bindings, and triples in
/// insertion order. Insertion order is the serialization order, which
/// is what makes re-runs byte-identical.
#[derive(Debug, Clone)]
pub struct GraphDoc {
    base: String,
    namespaces: NamespaceManager,
    triples: Vec<Triple>,
}

impl GraphDoc {
    pub fn new(base: impl Into<String>, namespaces: NamespaceManager) -> Self {
        Self {
            base: base.into(),
            namespaces,
            triples: Vec::new(),
        }
    }

    pub fn add(
        &mut self,
        subject: impl Into<Subject>,
        predicate: impl Into<NamedNode>,
        object: impl Into<Term>,
    ) {
        self.triples
            .push(Triple::new(subject, predicate, object));
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn namespaces(&self) -> &NamespaceManager {
        &self.namespaces
    }

    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use oxrdf::Literal;

    use super::*;

    #[test]
    fn add_preserves_insertion_order() {
        let mut doc = GraphDoc::new("http://example.org/doc", NamespaceManager::common());
        let node = NamedNode::new("http://example.org/doc#a").unwrap();
        doc.add(
            node.clone(),
            oxrdf::vocab::rdfs::LABEL.into_owned(),
            Literal::new_simple_literal("first"),
        );
        doc.add(
            node,
            oxrdf::vocab::rdfs::LABEL.into_owned(),
            Literal::new_simple_literal("second"),
        );
        assert_eq!(doc.len(), 2);
        match &doc.triples()[0].object {
            Term::Literal(l) => assert_eq!(l.value(), "first"),
            other => panic!("unexpected object: {other}"),
        }
    }
}
