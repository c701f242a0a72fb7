use std::fmt::{self, Display};
use std::path::Path;

use serde::Deserialize;

/// RDF dataset syntaxes the codec can read and write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RdfFormat {
    #[default]
    Trig,
    NQuads,
}

impl RdfFormat {
    pub fn media_type(self) -> &'static str {
        match self {
            RdfFormat::Trig => "text/trig",
            RdfFormat::NQuads => "application/n-quads",
        }
    }

    /// Media type with an explicit charset, as sent on uploads.
    pub fn content_type(self) -> &'static str {
        match self {
            RdfFormat::Trig => "text/trig; charset=utf-8",
            RdfFormat::NQuads => "application/n-quads; charset=utf-8",
        }
    }

    pub fn from_path(path: &Path) -> Option<RdfFormat> {
        let extension = path.extension()?.to_str()?;
        match extension.to_ascii_lowercase().as_str() {
            "trig" => Some(RdfFormat::Trig),
            "nq" | "nquads" => Some(RdfFormat::NQuads),
            _ => None,
        }
    }
}

impl Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RdfFormat::Trig => f.write_str("TriG"),
            RdfFormat::NQuads => f.write_str("N-Quads"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::RdfFormat;

    #[test]
    fn upload_content_type_carries_charset() {
        assert_eq!(RdfFormat::Trig.content_type(), "text/trig; charset=utf-8");
        assert_eq!(RdfFormat::default(), RdfFormat::Trig);
    }

    #[test]
    fn format_from_file_extension() {
        assert_eq!(
            RdfFormat::from_path(Path::new("np/example.trig")),
            Some(RdfFormat::Trig)
        );
        assert_eq!(RdfFormat::from_path(Path::new("dump.NQ")), Some(RdfFormat::NQuads));
        assert_eq!(RdfFormat::from_path(Path::new("README")), None);
    }
}
