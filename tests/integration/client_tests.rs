//! Integration tests for the client pipeline
//!
//! These tests use wiremock to stand in for the gallery site and exercise
//! the fetch-then-parse cycle end-to-end.

use spotlight_harvest::config::Config;
use spotlight_harvest::{SpotlightClient, SpotlightError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ROOT_PAGE: &str = r#"
<html><body>
    <article class="post-101 post type-post">
        <a href="/images/101/"><img src="/thumbs/101.jpg" alt="hash101"></a>
    </article>
    <article class="post-102 post type-post">
        <a href="/images/102/"><img src="/thumbs/102.jpg" alt="hash102"></a>
    </article>
    <nav class="navigation pagination">
        <a class="page-numbers current" href="/">1</a>
        <a class="page-numbers" href="/page/2">2</a>
        <a class="page-numbers" href="/page/2">Next</a>
    </nav>
</body></html>
"#;

const SECOND_PAGE: &str = r#"
<html><body>
    <article class="post-201 post type-post">
        <a href="/images/201/"><img src="/thumbs/201.jpg" alt="hash201"></a>
    </article>
</body></html>
"#;

fn detail_page(id: u64, title: &str) -> String {
    format!(
        r#"<html>
        <head><meta property="og:title" content="{title}"></head>
        <body>
            <article class="post-{id} post">
                <h1>{title}</h1>
                <time datetime="2024-02-0{d}T00:00:00+00:00">February {d}, 2024</time>
                <a rel="tag" href="/tag/sea/">sea</a>
                <img src="https://site/wp-content/uploads/{id}-1024x576.jpg"
                     srcset="https://site/wp-content/uploads/{id}-1024x576.jpg 1024w, https://site/wp-content/uploads/{id}.jpg 1920w">
            </article>
        </body></html>"#,
        id = id,
        title = title,
        d = id % 10,
    )
}

async fn mount_html(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=UTF-8"),
        )
        .mount(server)
        .await;
}

async fn mock_site() -> MockServer {
    let server = MockServer::start().await;

    mount_html(&server, "/", ROOT_PAGE.to_string()).await;
    mount_html(&server, "/page/2", SECOND_PAGE.to_string()).await;
    mount_html(&server, "/images/101", detail_page(101, "Cliffs of Moher")).await;
    mount_html(&server, "/images/102", detail_page(102, "Lofoten Islands")).await;
    mount_html(&server, "/images/201", detail_page(201, "Torres del Paine")).await;

    server
}

fn client_for(server: &MockServer) -> SpotlightClient {
    SpotlightClient::new(Config::with_base_url(server.uri())).expect("Failed to build client")
}

#[tokio::test]
async fn test_total_pages() {
    let server = mock_site().await;
    let client = client_for(&server);

    assert_eq!(client.total_pages().await.unwrap(), 2);
}

#[tokio::test]
async fn test_first_page_uses_root_url() {
    let server = mock_site().await;
    let client = client_for(&server);

    let entries = client.page(1).await.unwrap();
    let ids: Vec<u64> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![101, 102]);
    assert_eq!(entries[0].detail_url.as_deref(), Some("/images/101/"));
    assert_eq!(entries[0].thumbnail_hash.as_deref(), Some("hash101"));
}

#[tokio::test]
async fn test_later_page_uses_page_path() {
    let server = mock_site().await;
    let client = client_for(&server);

    let entries = client.page(2).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, 201);
}

#[tokio::test]
async fn test_image_info() {
    let server = mock_site().await;
    let client = client_for(&server);

    let detail = client.image_info(102).await.unwrap();
    assert_eq!(detail.id, 102);
    assert_eq!(detail.title.as_deref(), Some("Lofoten Islands"));
    assert_eq!(detail.tags, vec!["sea"]);
    assert_eq!(detail.date.as_deref(), Some("February 2, 2024"));
    assert_eq!(
        detail.full_resolution_url.as_deref(),
        Some("https://site/wp-content/uploads/102.jpg")
    );
    assert_eq!(detail.all_images[0].width, Some(1920));
    assert_eq!(
        detail.og_metadata.get("og:title").map(String::as_str),
        Some("Lofoten Islands")
    );
}

#[tokio::test]
async fn test_image_info_falls_back_to_requested_id() {
    let server = MockServer::start().await;
    mount_html(
        &server,
        "/images/555",
        "<html><body><h2>Untitled</h2></body></html>".to_string(),
    )
    .await;

    let detail = client_for(&server).image_info(555).await.unwrap();
    assert_eq!(detail.id, 555);
    assert_eq!(detail.title.as_deref(), Some("Untitled"));
    assert!(detail.all_images.is_empty());
    assert_eq!(detail.full_resolution_url, None);
}

#[tokio::test]
async fn test_harvest_all_pages() {
    let server = mock_site().await;
    let client = client_for(&server);

    let details = client.harvest(1..=2).await.unwrap();
    let ids: Vec<u64> = details.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![101, 102, 201]);
    assert_eq!(details[2].title.as_deref(), Some("Torres del Paine"));
}

#[tokio::test]
async fn test_http_error_status_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/images/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client_for(&server).image_info(404).await;
    match result {
        Err(SpotlightError::Status { url, status }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/images/404"));
        }
        other => panic!("Expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_harvest_stops_on_first_error() {
    let server = MockServer::start().await;
    mount_html(&server, "/", ROOT_PAGE.to_string()).await;
    mount_html(&server, "/images/101", detail_page(101, "Cliffs of Moher")).await;
    Mock::given(method("GET"))
        .and(path("/images/102"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = client_for(&server).harvest(1..=1).await;
    assert!(matches!(
        result,
        Err(SpotlightError::Status { status: 503, .. })
    ));
}

#[tokio::test]
async fn test_sends_configured_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "SpotlightTest/1.0"))
        .and(header("accept-language", "en-US"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ROOT_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = Config::with_base_url(server.uri());
    config.http.user_agent = "SpotlightTest/1.0".to_string();
    config
        .http
        .headers
        .insert("Accept-Language".to_string(), "en-US".to_string());
    let client = SpotlightClient::new(config).unwrap();

    assert_eq!(client.total_pages().await.unwrap(), 2);
}

#[tokio::test]
async fn test_connection_failure_is_http_error() {
    // Nothing listens on port 9 of localhost in the test environment
    let client = SpotlightClient::new(Config::with_base_url("http://127.0.0.1:9")).unwrap();

    let result = client.total_pages().await;
    assert!(matches!(result, Err(SpotlightError::Http { .. })));
}

#[tokio::test]
async fn test_harvest_each_delivers_images_in_order() {
    let server = mock_site().await;
    let client = client_for(&server);

    let mut ids = Vec::new();
    let count = client
        .harvest_each(1..=2, |detail| {
            ids.push(detail.id);
            Ok(())
        })
        .await
        .unwrap();

    assert_eq!(count, 3);
    assert_eq!(ids, vec![101, 102, 201]);
}

#[tokio::test]
async fn test_harvest_each_keeps_images_delivered_before_error() {
    let server = MockServer::start().await;
    mount_html(&server, "/", ROOT_PAGE.to_string()).await;
    mount_html(&server, "/images/101", detail_page(101, "Cliffs of Moher")).await;
    Mock::given(method("GET"))
        .and(path("/images/102"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut titles = Vec::new();
    let result = client_for(&server)
        .harvest_each(1..=1, |detail| {
            titles.push(detail.title.unwrap_or_default());
            Ok(())
        })
        .await;

    assert!(matches!(
        result,
        Err(SpotlightError::Status { status: 500, .. })
    ));
    assert_eq!(titles, vec!["Cliffs of Moher"]);
}
