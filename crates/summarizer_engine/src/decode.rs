use chardetng::EncodingDetector;
use encoding_rs::Encoding;

use summarizer_logging::engine_warn;

use crate::{ExtractionError, FailureKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPage {
    pub html: String,
    pub encoding: &'static str,
}

/// Decodes a fetched page to UTF-8.
///
/// Order of precedence: byte order mark, `charset=` from the Content-Type
/// header, then `chardetng` detection over the whole body. Malformed
/// sequences become U+FFFD; only a page with nothing else left is an error.
pub fn decode_page(bytes: &[u8], content_type: Option<&str>) -> Result<DecodedPage, ExtractionError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(enc) = content_type
        .and_then(charset_label)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return decode_with(bytes, enc);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    decode_with(bytes, detector.guess(None, true))
}

fn charset_label(content_type: &str) -> Option<String> {
    content_type.split(';').find_map(|part| {
        let (key, value) = part.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(['"', '\'']).to_string())
    })
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> Result<DecodedPage, ExtractionError> {
    let (text, _, had_errors) = enc.decode(bytes);
    if had_errors {
        let readable = text
            .chars()
            .any(|c| c != char::REPLACEMENT_CHARACTER && !c.is_whitespace());
        if !readable {
            return Err(ExtractionError::url(
                FailureKind::Decode,
                format!("page is not valid {}", enc.name()),
            ));
        }
        engine_warn!("Page has malformed {} sequences; replaced", enc.name());
    }
    Ok(DecodedPage {
        html: text.into_owned(),
        encoding: enc.name(),
    })
}
