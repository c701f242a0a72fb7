pub(crate) const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

pub(crate) const NANOPUB_NS: &str = "http://www.nanopub.org/nschema#";

pub(crate) const NANOPUBLICATION: &str = "http://www.nanopub.org/nschema#Nanopublication";
pub(crate) const HAS_ASSERTION: &str = "http://www.nanopub.org/nschema#hasAssertion";
pub(crate) const HAS_PROVENANCE: &str = "http://www.nanopub.org/nschema#hasProvenance";
pub(crate) const HAS_PUBLICATION_INFO: &str = "http://www.nanopub.org/nschema#hasPublicationInfo";

/// Short form used in error messages.
pub(crate) fn compact(iri: &str) -> String {
    match iri.strip_prefix(NANOPUB_NS) {
        Some(local) => format!("np:{local}"),
        None => format!("<{iri}>"),
    }
}
