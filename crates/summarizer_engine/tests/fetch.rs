use std::time::Duration;

use summarizer_engine::{
    fetch_from_url, FailureKind, FetchSettings, Fetcher, Origin, ReadabilityLikeExtractor,
    ReqwestFetcher, SourceRef,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ARTICLE_PAGE: &str = r#"<html>
<head><title>Rivers rise after storm</title></head>
<body>
  <nav><p>Home | World | Sport</p></nav>
  <article>
    <h1>Rivers rise after storm</h1>
    <p>Heavy rain overnight pushed the river above its banks.</p>
    <p>Officials opened two shelters in the town hall.</p>
  </article>
  <footer><p>Copyright 2024</p></footer>
</body>
</html>"#;

async fn serve(route: &str, response: ResponseTemplate) -> (MockServer, String) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(&server)
        .await;
    let url = format!("{}{}", server.uri(), route);
    (server, url)
}

#[tokio::test]
async fn fetcher_returns_html_and_metadata() {
    let (_server, url) = serve(
        "/doc",
        ResponseTemplate::new(200).set_body_raw("<html>ok</html>", "text/html; charset=utf-8"),
    )
    .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let output = fetcher.fetch(&url).await.expect("fetch ok");

    assert_eq!(output.metadata.final_url, url);
    assert_eq!(output.metadata.redirect_count, 0);
    assert!(output
        .metadata
        .content_type
        .unwrap()
        .starts_with("text/html"));
    assert_eq!(output.bytes, b"<html>ok</html>");
}

#[tokio::test]
async fn fetch_from_url_extracts_article_paragraphs() {
    let (_server, url) = serve(
        "/news/storm",
        ResponseTemplate::new(200).set_body_raw(ARTICLE_PAGE, "text/html; charset=utf-8"),
    )
    .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let acquired = fetch_from_url(&fetcher, &ReadabilityLikeExtractor, &url)
        .await
        .expect("article");

    assert_eq!(acquired.source, SourceRef::Url(url.clone()));
    assert_eq!(acquired.title.as_deref(), Some("Rivers rise after storm"));
    assert_eq!(
        acquired.text,
        "Rivers rise after storm\n\n\
         Heavy rain overnight pushed the river above its banks.\n\n\
         Officials opened two shelters in the town hall."
    );
}

#[tokio::test]
async fn fetch_fails_on_http_status() {
    let (_server, url) = serve("/missing", ResponseTemplate::new(404)).await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetch_from_url(&fetcher, &ReadabilityLikeExtractor, &url)
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(404));
    assert_eq!(err.origin, Origin::Url);
    assert!(err.to_string().starts_with("Error extracting text from URL:"));
}

#[tokio::test]
async fn fetch_rejects_non_html_content() {
    let (_server, url) = serve(
        "/data.json",
        ResponseTemplate::new(200).set_body_raw("{}", "application/json"),
    )
    .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetcher.fetch(&url).await.unwrap_err();

    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "application/json".to_string()
        }
    );
}

#[tokio::test]
async fn fetch_reports_pages_without_text() {
    let (_server, url) = serve(
        "/empty",
        ResponseTemplate::new(200).set_body_raw(
            "<html><body><script>var x = 1;</script></body></html>",
            "text/html",
        ),
    )
    .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetch_from_url(&fetcher, &ReadabilityLikeExtractor, &url)
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::NoArticleText);
}

#[tokio::test]
async fn fetch_times_out_on_slow_response() {
    let (_server, url) = serve(
        "/slow",
        ResponseTemplate::new(200)
            .set_delay(Duration::from_millis(250))
            .set_body_raw("<p>slow</p>", "text/html"),
    )
    .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetch_rejects_too_large_response() {
    let (_server, url) = serve(
        "/large",
        ResponseTemplate::new(200)
            .insert_header("Content-Type", "text/html")
            .set_body_string("01234567890"),
    )
    .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn malformed_and_unreachable_urls_fail_as_extraction_errors() {
    let fetcher = ReqwestFetcher::new(FetchSettings {
        connect_timeout: Duration::from_millis(200),
        request_timeout: Duration::from_millis(500),
        ..FetchSettings::default()
    });

    let err = fetch_from_url(&fetcher, &ReadabilityLikeExtractor, "not a url")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);

    // Port 9 on localhost is the discard service; nothing listens there in CI.
    let err = fetch_from_url(&fetcher, &ReadabilityLikeExtractor, "http://127.0.0.1:9/")
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind,
        FailureKind::Network | FailureKind::Timeout
    ));
}
