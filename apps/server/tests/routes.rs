mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{get, get_json, test_router, test_router_with_config, Reply, StubProvider};
use patro_server::config::Config;
use serde_json::json;
use tower::ServiceExt;

fn stub() -> StubProvider {
    StubProvider {
        date_time: Reply::Payload(json!({
            "nepaliDate": "आइतबार, ३० असोज २०८१",
            "englishDate": "Sunday, Oct 16, 2024",
            "time": "०९:३० बजे"
        })),
        horoscope: Reply::Payload(json!({
            "mesh": "Good day for travel.",
            "brish": "Avoid arguments."
        })),
        gold: Reply::Payload(json!({
            "date": "30 Asoj 2081",
            "Fine Gold - tola": {"price": 152000, "unit": "tola"},
            "Silver - tola": 1850
        })),
        forex: Reply::Payload(json!({
            "USD": {"unit": 1, "buy": 132.5, "sell": 133.1},
            "NPR": 1,
            "lastUpdated": "2081-06-30"
        })),
    }
}

#[tokio::test]
async fn datetime_is_passed_through() {
    let app = test_router(stub());

    let (status, body) = get_json(&app, "/datetime").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "nepaliDate": "आइतबार, ३० असोज २०८१",
            "englishDate": "Sunday, Oct 16, 2024",
            "time": "०९:३० बजे"
        })
    );
}

#[tokio::test]
async fn datetime_passes_non_objects_through() {
    let app = test_router(StubProvider {
        date_time: Reply::Payload(json!("2081-06-30")),
        ..stub()
    });

    let (status, body) = get_json(&app, "/datetime").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("2081-06-30"));
}

#[tokio::test]
async fn rashifal_lists_every_sign() {
    let app = test_router(stub());

    let (status, body) = get_json(&app, "/rashifal").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"sunsign": "mesh", "prediction": "Good day for travel."},
            {"sunsign": "brish", "prediction": "Avoid arguments."}
        ])
    );
}

#[tokio::test]
async fn rashifal_for_sign_echoes_span() {
    let app = test_router(stub());

    let (status, body) = get_json(&app, "/rashifal/weekly/brish").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"sunsign": "brish", "prediction": "Avoid arguments.", "span": "weekly"})
    );
}

#[tokio::test]
async fn rashifal_for_unknown_sign_is_404() {
    let app = test_router(stub());

    let (status, body) = get_json(&app, "/rashifal/today/nonexistentSign").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Rashifal not found for given sign"}));
}

#[tokio::test]
async fn gold_is_wrapped_in_envelope() {
    let app = test_router(stub());

    let (status, body) = get_json(&app, "/gold").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "data": [
                {"type": "Fine Gold - tola", "price": 152000},
                {"type": "Silver - tola", "price": 1850}
            ],
            "lastUpdated": "30 Asoj 2081"
        })
    );
}

#[tokio::test]
async fn forex_spreads_rates() {
    let app = test_router(stub());

    let (status, body) = get(&app, "/forex").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        String::from_utf8(body).unwrap(),
        r#"{"data":[{"currency":"USD","unit":1,"buy":132.5,"sell":133.1},{"currency":"NPR","rate":1}],"lastUpdated":"2081-06-30"}"#
    );
}

#[tokio::test]
async fn upstream_failures_map_to_fixed_messages() {
    let app = test_router(StubProvider::failing());

    for (uri, message) in [
        ("/datetime", "Failed to fetch date and time"),
        ("/rashifal", "Failed to fetch horoscope"),
        ("/rashifal/daily/mesh", "Failed to fetch specific horoscope"),
        ("/gold", "Failed to fetch gold prices"),
        ("/forex", "Failed to fetch exchange rates"),
    ] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(body, json!({ "error": message }), "{uri}");
    }
}

#[tokio::test]
async fn malformed_payloads_are_500() {
    let app = test_router(StubProvider {
        date_time: Reply::Fail,
        horoscope: Reply::Payload(json!(["mesh", "brish"])),
        gold: Reply::Payload(json!(null)),
        forex: Reply::Payload(json!("rates unavailable")),
    });

    for (uri, message) in [
        ("/rashifal", "Failed to fetch horoscope"),
        ("/rashifal/daily/mesh", "Failed to fetch specific horoscope"),
        ("/gold", "Failed to fetch gold prices"),
        ("/forex", "Failed to fetch exchange rates"),
    ] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(body, json!({ "error": message }), "{uri}");
    }
}

#[tokio::test]
async fn hanging_upstream_times_out() {
    let app = test_router(StubProvider {
        gold: Reply::Hang,
        ..stub()
    });

    let (status, body) = get_json(&app, "/gold").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch gold prices"}));
}

#[tokio::test]
async fn repeated_calls_are_byte_identical() {
    let app = test_router(stub());

    for uri in ["/datetime", "/rashifal", "/rashifal/daily/mesh", "/gold", "/forex"] {
        let (_, first) = get(&app, uri).await;
        let (_, second) = get(&app, uri).await;
        assert_eq!(first, second, "{uri}");
    }
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = test_router(stub());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/gold")
                .header(header::ORIGIN, "https://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn cors_echoes_only_configured_origins() {
    let config = Config {
        cors_allow: vec![
            "https://a.example".to_string(),
            "not a\nvalid origin".to_string(),
        ],
        ..Config::default()
    };
    let app = test_router_with_config(stub(), config);

    let allowed = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/gold")
                .header(header::ORIGIN, "https://a.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(allowed.status(), StatusCode::OK);
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://a.example"
    );

    let other = app
        .oneshot(
            Request::builder()
                .uri("/gold")
                .header(header::ORIGIN, "https://b.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(other.status(), StatusCode::OK);
    assert!(!other
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
