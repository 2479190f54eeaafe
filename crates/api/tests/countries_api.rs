//! HTTP-level integration tests for the `/countries` endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, build_test_app_from, build_test_app_with, get, post_json, test_config,
};
use serde_json::json;
use shipdash_api::config::SearchLimits;
use shipdash_core::countries::lookup::{CountryLookup, CountryRecord};

// ---------------------------------------------------------------------------
// Test: GET /api/v1/countries/{code}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_country_by_code_is_case_insensitive() {
    let response = get(build_test_app(), "/api/v1/countries/mx").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["code"], "MX");
    assert_eq!(json["data"]["name"], "Mexico");
    assert_eq!(json["data"]["alternative_names"][0], "Mexico");
}

#[tokio::test]
async fn test_get_unknown_country_returns_404() {
    let response = get(build_test_app(), "/api/v1/countries/ZZ").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/countries/resolve
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_resolve_spanish_name() {
    let response = get(build_test_app(), "/api/v1/countries/resolve?name=Alemania").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["code"], "DE");
    assert_eq!(json["data"]["name"], "Germany");
}

#[tokio::test]
async fn test_resolve_two_letter_non_code_returns_404() {
    let response = get(build_test_app(), "/api/v1/countries/resolve?name=UK").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/countries/search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_search_returns_both_koreas() {
    let json = body_json(get(build_test_app(), "/api/v1/countries/search?q=korea").await).await;
    let codes: Vec<_> = json["data"]
        .as_array()
        .expect("data should be an array")
        .iter()
        .map(|country| country["code"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(codes, vec!["KP", "KR"]);
}

#[tokio::test]
async fn test_search_defaults_to_ten_results() {
    let json = body_json(get(build_test_app(), "/api/v1/countries/search?q=a").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_search_honours_limit() {
    let json =
        body_json(get(build_test_app(), "/api/v1/countries/search?q=a&limit=3").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_search_rejects_out_of_range_limit() {
    let response = get(build_test_app(), "/api/v1/countries/search?q=a&limit=0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_search_rejects_limit_above_default_max() {
    let response = get(build_test_app(), "/api/v1/countries/search?q=a&limit=251").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_search_follows_configured_limits() {
    let mut config = test_config();
    config.search = SearchLimits { default: 2, max: 4 };
    let table = CountryLookup::from_builtin().unwrap();

    let app = build_test_app_from(config.clone(), table.clone());
    let json = body_json(get(app, "/api/v1/countries/search?q=a").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let app = build_test_app_from(config.clone(), table.clone());
    let json = body_json(get(app, "/api/v1/countries/search?q=a&limit=4").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 4);

    let app = build_test_app_from(config, table);
    let response = get(app, "/api/v1/countries/search?q=a&limit=5").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_blank_search_returns_empty_list() {
    let json = body_json(get(build_test_app(), "/api/v1/countries/search").await).await;
    assert_eq!(json["data"], json!([]));
}

#[tokio::test]
async fn test_search_uses_injected_table() {
    let table = CountryLookup::new(vec![
        CountryRecord::new("AQ", &["Antarctica", "Antártida"]),
        CountryRecord::new("AR", &["Argentina"]),
    ])
    .unwrap();
    let app = build_test_app_with(table);

    let json = body_json(get(app, "/api/v1/countries/search?q=ant").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["code"], "AQ");
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/countries/normalize
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_normalize_default_paths() {
    let response = post_json(
        build_test_app(),
        "/api/v1/countries/normalize",
        json!({
            "data": {
                "shipper": {"address": {"country": "Reino Unido"}},
                "recipient": {"address": {"country": "Atlantis"}},
                "items": [{"manufacturer_country": "japan"}]
            }
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = &body_json(response).await["data"];
    assert_eq!(data["form"]["shipper"]["address"]["country"], "GB");
    assert_eq!(data["form"]["recipient"]["address"]["country"], "Atlantis");
    assert_eq!(data["form"]["items"][0]["manufacturer_country"], "JP");
    assert_eq!(data["normalized"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_normalize_explicit_paths_only() {
    let response = post_json(
        build_test_app(),
        "/api/v1/countries/normalize",
        json!({
            "data": {
                "origin": {"country": "France"},
                "destination": {"country": "Spain"}
            },
            "paths": ["origin.country"]
        }),
    )
    .await;

    let data = &body_json(response).await["data"];
    assert_eq!(data["form"]["origin"]["country"], "FR");
    assert_eq!(data["form"]["destination"]["country"], "Spain");
    assert_eq!(
        data["normalized"],
        json!([{"path": "origin.country", "from": "France", "to": "FR"}])
    );
}
