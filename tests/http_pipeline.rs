//! End-to-end pipeline tests against a mock HTTP server

use std::time::Duration;

use mdpost::config::SiteConfig;
use mdpost::fetch::{Fetch, HttpFetcher};
use mdpost::{FetchError, MdPost, PostError, PostParser};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MARKER: &str = r#"<span onload="hljs.highlightAll()">"#;

const POST: &str = r#"# SOLID principles

The **S** stands for single responsibility.

```js
console.log(1)
```

Some text between blocks.

```rust
fn main() {
    println!("{}", 1 < 2);
}
```
"#;

async fn serve(server: &MockServer, route: &str, body: &str, content_type: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, content_type))
        .mount(server)
        .await;
}

#[tokio::test]
async fn parses_post_over_http() {
    let server = MockServer::start().await;
    serve(&server, "/2023/may/19.md", POST, "text/markdown; charset=utf-8").await;

    let parser = PostParser::new(HttpFetcher::new(&server.uri()).unwrap());
    let post = parser.parse_markdown("/2023/may/19.md").await.unwrap();

    assert_eq!(post.title, "<h1>SOLID principles</h1>");
    assert!(!post.content.contains("<h1>"));
    assert!(post
        .content
        .contains("<p>The <strong>S</strong> stands for single responsibility.</p>"));
    assert_eq!(post.content.matches(MARKER).count(), 2);
    assert!(post.content.contains("console.log(1)"));
    assert!(post.content.contains("1 &lt; 2);"));
}

#[tokio::test]
async fn simple_post_scenario() {
    let server = MockServer::start().await;
    serve(&server, "/hello.md", "# Hello\n\nWorld", "text/plain").await;

    let parser = PostParser::new(HttpFetcher::new(&server.uri()).unwrap());
    let post = parser.parse_markdown("/hello.md").await.unwrap();

    assert_eq!(post.title, "<h1>Hello</h1>");
    assert_eq!(post.content.trim(), "<p>World</p>");
}

#[tokio::test]
async fn missing_document_is_unavailable() {
    let server = MockServer::start().await;

    let parser = PostParser::new(HttpFetcher::new(&server.uri()).unwrap());
    let err = parser.parse_markdown("/2023/may/404.md").await.unwrap_err();

    match err {
        PostError::Unavailable { path, source } => {
            assert_eq!(path, "/2023/may/404.md");
            assert!(matches!(source, FetchError::Status(s) if s.as_u16() == 404));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn untitled_post_is_rejected() {
    let server = MockServer::start().await;
    serve(&server, "/untitled.md", "no heading here\n\n## only h2\n", "text/markdown").await;

    let parser = PostParser::new(HttpFetcher::new(&server.uri()).unwrap());
    let err = parser.parse_markdown("/untitled.md").await.unwrap_err();
    assert!(matches!(err, PostError::MissingTitle));
}

#[tokio::test]
async fn non_text_response_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/image.md"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![0x89, 0x50, 0x4e, 0x47], "image/png"))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(&server.uri()).unwrap();
    let err = fetcher.fetch("/image.md").await.unwrap_err();
    assert!(matches!(err, FetchError::NotText(ref t) if t == "image/png"));
}

#[tokio::test]
async fn invalid_utf8_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/binary.md"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![0x23, 0x20, 0xff, 0xfe], "text/plain"))
        .mount(&server)
        .await;

    let parser = PostParser::new(HttpFetcher::new(&server.uri()).unwrap());
    let err = parser.parse_markdown("/binary.md").await.unwrap_err();
    assert!(matches!(
        err,
        PostError::Unavailable {
            source: FetchError::Decode(_),
            ..
        }
    ));
}

#[tokio::test]
async fn slow_fetch_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow.md"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("# Slow", "text/markdown")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let parser = PostParser::new(HttpFetcher::new(&server.uri()).unwrap())
        .with_timeout(Duration::from_millis(100));
    let err = parser.parse_markdown("/slow.md").await.unwrap_err();
    assert!(matches!(
        err,
        PostError::Unavailable {
            source: FetchError::Timeout(_),
            ..
        }
    ));
}

#[tokio::test]
async fn app_uses_configured_base_url() {
    let server = MockServer::start().await;
    serve(&server, "/blog/2023/may/19.md", POST, "text/markdown").await;

    let config = SiteConfig {
        base_url: format!("{}/blog/", server.uri()),
        ..SiteConfig::default()
    };
    let app = MdPost::with_config(".", config);

    let post = app.parse("/2023/may/19.md").await.unwrap();
    assert_eq!(post.title, "<h1>SOLID principles</h1>");
}

#[tokio::test]
async fn concurrent_parses_are_independent() {
    let server = MockServer::start().await;
    serve(&server, "/a.md", "# A\n\nalpha", "text/markdown").await;
    serve(&server, "/b.md", "# B\n\nbeta", "text/markdown").await;

    let parser = std::sync::Arc::new(PostParser::new(HttpFetcher::new(&server.uri()).unwrap()));
    let (a, b) = tokio::join!(parser.parse_markdown("/a.md"), parser.parse_markdown("/b.md"));

    assert_eq!(a.unwrap().title, "<h1>A</h1>");
    assert_eq!(b.unwrap().title, "<h1>B</h1>");
}
