//! Identifier minting for graph node fragments.
//!
//! The catalog document references director nodes that live in a
//! separately generated document. Both builders mint fragments through
//! this module, so a reference written on one side resolves on the
//! other without ever parsing the peer document. The mapping must stay
//! a pure function of the input name.

/// Sanitize a human-authored name into an IRI-fragment-safe form:
/// every character that is not alphanumeric, `_`, or `-` becomes `_`.
///
/// Alphanumeric is Unicode-aware, so accented letters pass through
/// unchanged rather than collapsing into underscores, which would
/// merge names differing only in a diacritic.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Fragment local name for a director node: `director_<sanitized>`.
pub fn director_fragment(name: &str) -> String {
    format!("director_{}", sanitize_name(name))
}
