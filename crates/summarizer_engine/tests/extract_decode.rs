use pretty_assertions::assert_eq;
use summarizer_engine::{decode_page, Extractor, ReadabilityLikeExtractor};

#[test]
fn decode_respects_charset_header() {
    let bytes = b"caf\xe9"; // iso-8859-1
    let decoded = decode_page(bytes, Some("text/html; charset=ISO-8859-1")).unwrap();
    assert_eq!(decoded.html, "café");
    assert!(
        decoded.encoding.eq_ignore_ascii_case("ISO-8859-1")
            || decoded.encoding.eq_ignore_ascii_case("windows-1252")
    );
}

#[test]
fn decode_prefers_bom_over_header() {
    let bytes = b"\xEF\xBB\xBFhello";
    let decoded = decode_page(bytes, Some("text/html; charset=ISO-8859-1")).unwrap();
    assert_eq!(decoded.html, "hello");
    assert_eq!(decoded.encoding, "UTF-8");
}

#[test]
fn decode_detects_utf8_without_hints() {
    let decoded = decode_page("naïve café".as_bytes(), None).unwrap();
    assert_eq!(decoded.html, "naïve café");
}

#[test]
fn extractor_prefers_article_and_skips_chrome() {
    let html = r#"
    <html><head><title>Page title</title></head>
    <body>
        <header><p>Subscribe now</p></header>
        <article>
            <h2>Budget passes</h2>
            <p>The council   approved
               the budget.</p>
            <aside><p>Related: older budgets</p></aside>
            <ul><li>Roads</li><li>Schools</li></ul>
            <script>track();</script>
        </article>
    </body></html>
    "#;
    let extracted = ReadabilityLikeExtractor.extract(html);
    assert_eq!(extracted.title.as_deref(), Some("Page title"));
    assert_eq!(
        extracted.text,
        "Budget passes\n\nThe council approved the budget.\n\nRoads\n\nSchools"
    );
}

#[test]
fn extractor_uses_og_title_when_present() {
    let html = r#"<html><head>
        <meta property="og:title" content="Clean headline">
        <title>Clean headline | Daily Site</title>
    </head><body><p>Body.</p></body></html>"#;
    let extracted = ReadabilityLikeExtractor.extract(html);
    assert_eq!(extracted.title.as_deref(), Some("Clean headline"));
}

#[test]
fn extractor_picks_densest_container_without_article() {
    let html = r#"<html><body>
        <div class="sidebar"><p>Short teaser.</p></div>
        <div class="story">
            <p>First paragraph of the real story with plenty of words in it.</p>
            <p>Second paragraph continues the reporting in some detail.</p>
        </div>
    </body></html>"#;
    let extracted = ReadabilityLikeExtractor.extract(html);
    assert_eq!(
        extracted.text,
        "First paragraph of the real story with plenty of words in it.\n\n\
         Second paragraph continues the reporting in some detail."
    );
}

#[test]
fn extractor_keeps_inline_markup_contiguous() {
    let html = "<article><p>Pre<b>fix</b> and <a href='#'>link</a>.<br>Next line</p></article>";
    let extracted = ReadabilityLikeExtractor.extract(html);
    assert_eq!(extracted.text, "Prefix and link. Next line");
}

#[test]
fn extractor_falls_back_to_body_text() {
    let html = "<html><body><div>Just some <span>loose</span> text</div></body></html>";
    let extracted = ReadabilityLikeExtractor.extract(html);
    assert_eq!(extracted.title, None);
    assert_eq!(extracted.text, "Just some loose text");
}

#[test]
fn decode_replaces_stray_bytes_under_declared_utf8() {
    let bytes = b"<html><body><p>Caf\xE9 owners say trade is up.</p></body></html>";
    let decoded = decode_page(bytes, Some("text/html; charset=utf-8")).unwrap();
    assert_eq!(decoded.encoding, "UTF-8");
    assert!(decoded.html.contains("Caf\u{FFFD} owners say trade is up."));
}

#[test]
fn decode_fails_when_nothing_readable_remains() {
    let err = decode_page(b"\xC3\xFF \xC3", Some("text/html; charset=utf-8")).unwrap_err();
    assert_eq!(err.kind, summarizer_engine::FailureKind::Decode);
}

#[test]
fn extractor_keeps_loose_text_around_blocks() {
    let html = "<article><div>Lead sentence outside p. <p>Body para.</p> trailing <em>text</em></div></article>";
    let extracted = ReadabilityLikeExtractor.extract(html);
    assert_eq!(
        extracted.text,
        "Lead sentence outside p.\n\nBody para.\n\ntrailing text"
    );
}
