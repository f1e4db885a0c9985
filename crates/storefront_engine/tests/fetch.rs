use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use storefront_engine::{
    CatalogueSettings, CatalogueSource, FailureKind, ProductRecord, ReqwestCatalogue, ReviewRecord,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn catalogue_at(server: &MockServer, route: &str) -> ReqwestCatalogue {
    ReqwestCatalogue::new(CatalogueSettings {
        url: format!("{}{}", server.uri(), route),
        ..CatalogueSettings::default()
    })
}

#[tokio::test]
async fn fetch_decodes_product_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "1",
                "name": "Teapot",
                "price": 12.5,
                "image": "/img/teapot.png",
                "reviews": { "average": 4.5, "count": 2 }
            },
            { "id": "2", "name": "Cup", "price": 3.0 }
        ])))
        .mount(&server)
        .await;

    let products = catalogue_at(&server, "/api/products")
        .fetch_products()
        .await
        .expect("fetch ok");

    assert_eq!(
        products,
        vec![
            ProductRecord {
                id: "1".to_string(),
                name: "Teapot".to_string(),
                price: 12.5,
                image: "/img/teapot.png".to_string(),
                reviews: ReviewRecord {
                    average: 4.5,
                    count: 2,
                },
            },
            ProductRecord {
                id: "2".to_string(),
                name: "Cup".to_string(),
                price: 3.0,
                image: String::new(),
                reviews: ReviewRecord::default(),
            },
        ]
    );
}

#[tokio::test]
async fn empty_catalogue_is_not_a_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let products = catalogue_at(&server, "/api/products")
        .fetch_products()
        .await
        .expect("fetch ok");
    assert!(products.is_empty());
}

#[tokio::test]
async fn fetch_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = catalogue_at(&server, "/missing")
        .fetch_products()
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn fetch_rejects_malformed_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
        .mount(&server)
        .await;

    let err = catalogue_at(&server, "/api/products")
        .fetch_products()
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn fetch_rejects_html() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&server)
        .await;

    let err = catalogue_at(&server, "/api/products")
        .fetch_products()
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "text/html".to_string()
        }
    );
}

#[tokio::test]
async fn fetch_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[          ]", "application/json"))
        .mount(&server)
        .await;

    let catalogue = ReqwestCatalogue::new(CatalogueSettings {
        url: format!("{}/api/products", server.uri()),
        max_bytes: 4,
        ..CatalogueSettings::default()
    });

    let err = catalogue.fetch_products().await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 4,
            actual: Some(12)
        }
    );
}

#[tokio::test]
async fn fetch_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let catalogue = ReqwestCatalogue::new(CatalogueSettings {
        url: format!("{}/slow", server.uri()),
        request_timeout: Duration::from_millis(50),
        ..CatalogueSettings::default()
    });

    let err = catalogue.fetch_products().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn invalid_url_is_reported() {
    let catalogue = ReqwestCatalogue::new(CatalogueSettings {
        url: "not a url".to_string(),
        ..CatalogueSettings::default()
    });

    let err = catalogue.fetch_products().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
