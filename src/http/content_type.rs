use reqwest::header::HeaderValue;

use crate::nanopub::RdfFormat;

pub(crate) fn accept(format: RdfFormat) -> HeaderValue {
    HeaderValue::from_static(format.media_type())
}

pub(crate) fn content_type(format: RdfFormat) -> HeaderValue {
    HeaderValue::from_static(format.content_type())
}

#[cfg(test)]
mod tests {
    use super::{accept, content_type};
    use crate::nanopub::RdfFormat;

    #[test]
    fn trig_headers() {
        assert_eq!(accept(RdfFormat::Trig), "text/trig");
        assert_eq!(content_type(RdfFormat::Trig), "text/trig; charset=utf-8");
    }
}
