//! Integration tests for `NaverShopClient` using wiremock HTTP mocks.

use dealgap_naver::{NaverCredentials, NaverError, NaverShopClient, SearchQuery};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> NaverShopClient {
    NaverShopClient::with_base_url(
        NaverCredentials::new("test-id", "test-secret"),
        30,
        base_url,
    )
    .expect("client construction should not fail")
}

fn shop_item(title: &str, lprice: &str, product_type: &str, mall_name: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "link": format!("https://smartstore.naver.com/{mall_name}"),
        "image": "https://shopping-phinf.pstatic.net/item.jpg",
        "lprice": lprice,
        "hprice": "",
        "mallName": mall_name,
        "productId": format!("pid-{lprice}"),
        "productType": product_type,
        "brand": "브랜드",
        "maker": "제조사",
        "category1": "디지털/가전",
        "category2": "음향가전",
        "category3": "",
        "category4": ""
    })
}

#[tokio::test]
async fn search_sends_credentials_and_parses_response() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "lastBuildDate": "Mon, 26 Sep 2023 10:18:44 +0900",
        "total": 12345,
        "start": 1,
        "display": 2,
        "items": [
            shop_item("<b>무선</b> 이어폰", "45900", "1", "가전마트"),
            shop_item("무선 이어폰 프로", "52000", "2", "개인셀러"),
        ]
    });

    Mock::given(method("GET"))
        .and(path("/v1/search/shop.json"))
        .and(query_param("query", "무선 이어폰"))
        .and(query_param("display", "20"))
        .and(query_param("sort", "sim"))
        .and(header("X-Naver-Client-Id", "test-id"))
        .and(header("X-Naver-Client-Secret", "test-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = client
        .search("무선 이어폰")
        .await
        .expect("should parse search response");

    assert_eq!(response.total, 12345);
    assert_eq!(response.items.len(), 2);
    assert_eq!(response.items[0].title, "<b>무선</b> 이어폰");
    assert_eq!(response.items[0].lprice, "45900");
    assert_eq!(response.items[0].product_type, "1");
    assert_eq!(response.items[1].mall_name, "개인셀러");
}

#[tokio::test]
async fn unauthorized_returns_typed_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search/shop.json"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "errorMessage": "NID AUTH Result Invalid (1000)",
            "errorCode": "024"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .search("이어폰")
        .await
        .expect_err("401 should be an error");

    assert!(
        matches!(err, NaverError::Unauthorized),
        "expected Unauthorized, got: {err:?}"
    );
}

#[tokio::test]
async fn server_error_returns_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search/shop.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .search("이어폰")
        .await
        .expect_err("500 should be an error");

    assert!(
        matches!(err, NaverError::UnexpectedStatus { status: 500 }),
        "expected UnexpectedStatus, got: {err:?}"
    );
}

#[tokio::test]
async fn malformed_body_returns_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search/shop.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .search("이어폰")
        .await
        .expect_err("non-JSON body should be an error");

    assert!(
        matches!(err, NaverError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn search_ranked_filters_and_orders_listings() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "lastBuildDate": "Mon, 26 Sep 2023 10:18:44 +0900",
        "total": 987,
        "start": 1,
        "display": 5,
        "items": [
            shop_item("<b>무선 이어폰</b>", "50000", "1", "브랜드몰"),
            shop_item("무선 이어폰", "40000", "2", "개인셀러"),
            shop_item("무선 이어폰 정품", "30000", "1", "가전마트"),
            shop_item("무선 이어폰", "20000", "2", "쿠팡"),
            shop_item("무선 이어폰 케이스", "9000", "2", "소품샵"),
        ]
    });

    Mock::given(method("GET"))
        .and(path("/v1/search/shop.json"))
        .and(query_param("query", "무선 이어폰"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let query = SearchQuery {
        text: "무선 이어폰".to_owned(),
        reference_price: Some(45_000),
    };
    let ranked = client
        .search_ranked(&query)
        .await
        .expect("should rank listings");

    // Band [13500, 54000] admits everything except the 9000 KRW accessory;
    // the reference-marketplace listing is dropped regardless of price.
    let prices: Vec<i64> = ranked.listings.iter().map(|l| l.price).collect();
    assert_eq!(prices, vec![30_000, 50_000, 40_000]);
    assert_eq!(ranked.catalog_count, 2);
    assert_eq!(ranked.total, 987);
    assert_eq!(ranked.listings[0].title, "무선 이어폰 정품");
    assert!(ranked.listings[0].is_catalog_match);
    assert_eq!(ranked.listings[0].category, "디지털/가전 > 음향가전");
}
