use audiotube_core::types::VideoId;
use audiotube_engine::traits::ConversionService;
use audiotube_providers::convert::ConversionApiConfig;
use audiotube_runtime::service::HttpConversionService;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer) -> HttpConversionService {
    HttpConversionService::new(ConversionApiConfig {
        base_url: server.uri(),
        api_host: "youtube-mp36.p.rapidapi.com".into(),
        api_key: "k".into(),
    })
}

#[tokio::test]
async fn sends_the_wire_contract_and_decodes_the_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dl"))
        .and(query_param("id", "dQw4w9WgXcQ"))
        .and(header("X-RapidAPI-Key", "k"))
        .and(header("X-RapidAPI-Host", "youtube-mp36.p.rapidapi.com"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"status":"ok","title":"t","link":"https://files.example/x.mp3"}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let resp = service_for(&server)
        .convert(&VideoId::new("dQw4w9WgXcQ"))
        .await
        .unwrap();
    assert!(resp.is_ok());
    assert_eq!(resp.link, "https://files.example/x.mp3");
}

#[tokio::test]
async fn non_2xx_is_a_transport_error_with_body_excerpt() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dl"))
        .respond_with(ResponseTemplate::new(429).set_body_raw("quota exceeded", "text/plain"))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .convert(&VideoId::new("dQw4w9WgXcQ"))
        .await
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("429"), "{msg}");
    assert!(msg.contains("quota exceeded"), "{msg}");
}

#[tokio::test]
async fn undecodable_body_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dl"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>busy</html>", "text/html"))
        .mount(&server)
        .await;

    assert!(
        service_for(&server)
            .convert(&VideoId::new("dQw4w9WgXcQ"))
            .await
            .is_err()
    );
}
