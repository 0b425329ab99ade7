//! Deterministic Turtle writer.
//!
//! The output is a pure function of the document's triple list and
//! prefix bindings: `@base` and `@prefix` headers in registration
//! order, then triples in insertion order with consecutive
//! same-subject statements folded into `;` groups. No sorting, no
//! hashing, so two runs over the same table produce identical bytes.

use oxrdf::vocab::{rdf, xsd};
use oxrdf::{NamedNode, Subject, Term};

use crate::graph::GraphDoc;
use crate::namespace::NamespaceManager;

pub fn serialize(doc: &GraphDoc) -> String {
    let ns = doc.namespaces();
    let mut out = String::new();

    out.push_str(&format!("@base <{}> .\n", doc.base()));
    for (prefix, iri) in ns.iter() {
        out.push_str(&format!("@prefix {prefix}: <{iri}> .\n"));
    }
    out.push('\n');

    let mut open_subject: Option<String> = None;
    for triple in doc.triples() {
        let subject = format_subject(&triple.subject, ns);
        let predicate = format_predicate(&triple.predicate, ns);
        let object = format_term(&triple.object, ns);

        if open_subject.as_deref() == Some(subject.as_str()) {
            out.push_str(" ;\n    ");
        } else {
            if open_subject.is_some() {
                out.push_str(" .\n\n");
            }
            out.push_str(&subject);
            out.push_str("\n    ");
            open_subject = Some(subject);
        }
        out.push_str(&predicate);
        out.push(' ');
        out.push_str(&object);
    }
    if open_subject.is_some() {
        out.push_str(" .\n");
    }
    out
}

fn format_subject(subject: &Subject, ns: &NamespaceManager) -> String {
    match subject {
        Subject::NamedNode(node) => format_iri(node.as_str(), ns),
        other => other.to_string(),
    }
}

fn format_predicate(predicate: &NamedNode, ns: &NamespaceManager) -> String {
    if predicate.as_ref() == rdf::TYPE {
        "a".to_string()
    } else {
        format_iri(predicate.as_str(), ns)
    }
}

fn format_term(term: &Term, ns: &NamespaceManager) -> String {
    match term {
        Term::NamedNode(node) => format_iri(node.as_str(), ns),
        Term::Literal(literal) => {
            let quoted = format!("\"{}\"", escape_literal(literal.value()));
            if let Some(lang) = literal.language() {
                format!("{quoted}@{lang}")
            } else if literal.datatype() == xsd::STRING {
                quoted
            } else {
                format!("{quoted}^^{}", format_iri(literal.datatype().as_str(), ns))
            }
        }
        other => other.to_string(),
    }
}

/// Prefixed name when a binding covers the IRI and the local part is
/// safe to write unescaped; full `<iri>` otherwise.
fn format_iri(iri: &str, ns: &NamespaceManager) -> String {
    if let Some((prefix, local)) = ns.split(iri) {
        if is_safe_local(local) {
            return format!("{prefix}:{local}");
        }
    }
    format!("<{iri}>")
}

/// Conservative subset of Turtle's PN_LOCAL: alphanumerics (Unicode),
/// `_` and `-`, not starting with `-`. Anything else falls back to the
/// full IRI form rather than risking escapes.
fn is_safe_local(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('-')
        && local
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}
