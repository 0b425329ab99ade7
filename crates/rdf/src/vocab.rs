//! Vocabulary constants not shipped with `oxrdf::vocab`.
//!
//! `rdf`, `rdfs` and `xsd` come from `oxrdf::vocab`; the Dublin Core,
//! FOAF and schema.org terms the projection emits live here, in the
//! same `NamedNodeRef` constant style.

use oxrdf::NamedNodeRef;

pub mod dcterms {
    use super::NamedNodeRef;

    pub const TITLE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/title");
    pub const DESCRIPTION: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/description");
    pub const DATE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/date");
    pub const ISSUED: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/issued");
    pub const SUBJECT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/subject");
    pub const COVERAGE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/coverage");
    pub const CREATOR: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/creator");
}

pub mod foaf {
    use super::NamedNodeRef;

    pub const DOCUMENT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/Document");
    pub const PERSON: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/Person");
    pub const PRIMARY_TOPIC: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/primaryTopic");
    pub const NAME: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/name");
}

pub mod schema {
    use super::NamedNodeRef;

    pub const MOVIE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://schema.org/Movie");
    pub const DATASET: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://schema.org/Dataset");
    pub const HAS_PART: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://schema.org/hasPart");
    pub const DIRECTOR: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://schema.org/director");
    pub const COUNTRY_OF_ORIGIN: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://schema.org/countryOfOrigin");
    pub const GENRE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://schema.org/genre");
    pub const DATE_PUBLISHED: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://schema.org/datePublished");
    pub const CONTENT_RATING: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://schema.org/contentRating");
    pub const DURATION: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://schema.org/duration");
    pub const RATING_VALUE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://schema.org/ratingValue");
    pub const SAME_AS: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://schema.org/sameAs");
}
