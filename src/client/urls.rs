//! URL building for the nanopublication collection.

pub(crate) const COLLECTION_PATH: &str = "/nanopublication";

pub(crate) fn collection_url(base_url: &str) -> String {
    format!("{base_url}{COLLECTION_PATH}")
}

/// URL of a single nanopublication below the collection root.
///
/// The identifier becomes exactly one path segment: every character outside
/// the unreserved set is percent-encoded, `/`, `:` and `#` included.
pub fn nanopublication_url(collection_url: &str, identifier: &str) -> String {
    format!("{collection_url}/{}", urlencoding::encode(identifier))
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::{collection_url, nanopublication_url};

    const ROOT: &str = "http://localhost:8080/nanopublication";

    #[test]
    fn collection_is_below_base_url() {
        assert_eq!(collection_url("http://localhost:8080"), ROOT);
    }

    #[test]
    fn encode_nanopublication_uri() {
        assert_eq!(
            nanopublication_url(ROOT, "http://example.org/np/1"),
            "http://localhost:8080/nanopublication/http%3A%2F%2Fexample.org%2Fnp%2F1"
        );
    }

    #[test]
    fn encode_fragment_and_query() {
        assert_eq!(
            nanopublication_url(ROOT, "urn:np#head?x=1&y"),
            "http://localhost:8080/nanopublication/urn%3Anp%23head%3Fx%3D1%26y"
        );
    }

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(
            nanopublication_url(ROOT, "Az09-._~"),
            "http://localhost:8080/nanopublication/Az09-._~"
        );
    }

    #[test]
    fn encode_spaces_and_non_ascii() {
        assert_eq!(
            nanopublication_url(ROOT, "my np/é"),
            "http://localhost:8080/nanopublication/my%20np%2F%C3%A9"
        );
    }

    #[test]
    fn encoded_segment_decodes_to_identifier() -> Result<()> {
        for identifier in [
            "http://example.org/np/1",
            "https://w3id.org/np/RA1#assertion",
            "urn:uuid:0f0e/a:b#c",
            "http://example.org/a%2Fb",
            "http://example.org/ünïcödé/😀",
        ] {
            let url = nanopublication_url(ROOT, identifier);
            let segment = url
                .strip_prefix(&format!("{ROOT}/"))
                .expect("url starts with the collection root");
            assert!(!segment.contains(['/', ':', '#']), "{segment}");
            assert_eq!(urlencoding::decode(segment)?, identifier);
        }
        Ok(())
    }
}
