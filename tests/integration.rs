//! Integration tests for the Leave Entitlement Engine.
//!
//! These tests drive the `/entitlements` endpoint end to end and check the
//! reference scenarios for the accrual rules.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;
use tower::ServiceExt;

use leave_engine::api::{create_router, AppState};
use leave_engine::config::ConfigLoader;

fn create_router_with_config() -> Router {
    let config = ConfigLoader::load("./config/statutory").expect("Failed to load config");
    create_router(AppState::new(config))
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_entitlements(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/entitlements")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn employee(id: &str, hire_date: Value, tenure_anchor_date: Value) -> Value {
    json!({
        "id": id,
        "name": format!("Employee {}", id),
        "hire_date": hire_date,
        "tenure_anchor_date": tenure_anchor_date
    })
}

fn request(as_of: &str, employees: Vec<Value>) -> Value {
    json!({ "as_of": as_of, "employees": employees })
}

fn days(report: &Value, year: i32) -> Decimal {
    let entry = report["entitlements"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["year"] == year)
        .unwrap_or_else(|| panic!("no entitlement for {}", year));
    dec(entry["days"].as_str().unwrap())
}

fn total(report: &Value) -> Decimal {
    dec(report["total"].as_str().unwrap())
}

// ============================================================================
// Reference scenarios
// ============================================================================

/// Scenario 1: tier 5 plus a 4 day seniority bonus gives 9; the cap is not
/// applied to either part separately.
#[tokio::test]
async fn test_scenario_1_tier_five_with_seniority_bonus() {
    let router = create_router_with_config();
    let body = request(
        "2018-12-31",
        vec![employee("E001", json!("2015-01-01"), json!("2015-01-01"))],
    );

    let (status, result) = post_entitlements(router, body).await;
    assert_eq!(status, StatusCode::OK);

    let report = &result["reports"][0];
    assert_eq!(days(report, 2018), dec("9"));
    assert_eq!(total(report), dec("9"));

    let step = &report["audit_trace"]["steps"][0];
    assert_eq!(step["output"]["tier_days"], "5");
    assert_eq!(step["output"]["seniority_bonus"], 4);
}

/// Scenario 2: the tenure anchor reaches 10 years on 2019-06-15; Jan 1 to
/// Jun 14 accrues at 5 and Jun 15 to Dec 31 at 10, covering the year once.
#[tokio::test]
async fn test_scenario_2_crossing_ten_years_mid_year() {
    let router = create_router_with_config();
    let body = request(
        "2020-01-01",
        vec![employee("E001", json!("2016-02-01"), json!("2009-06-15"))],
    );

    let (status, result) = post_entitlements(router, body).await;
    assert_eq!(status, StatusCode::OK);

    let report = &result["reports"][0];
    let step = report["audit_trace"]["steps"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["year"] == 2019)
        .unwrap();

    assert_eq!(step["rule_id"], "tier_crossing");
    assert_eq!(step["input"]["cutoff"], "2019-12-31");
    assert_eq!(step["output"]["anniversary"], "2019-06-15");
    assert_eq!(step["output"]["before_days"], 165);
    assert_eq!(step["output"]["after_days"], 200);
    assert_eq!(step["output"]["prior_tier_days"], "5");
    assert_eq!(step["output"]["tier_days"], "10");

    // 2016-02-01 to 2019-12-31 is 1429 days: 3 seniority days.
    let expected = Decimal::from(5 * 165 + 10 * 200) / Decimal::from(365) + Decimal::from(3);
    assert_eq!(days(report, 2019), expected);
}

/// Scenario 3: less than one year of tenure accrues nothing.
#[tokio::test]
async fn test_scenario_3_first_year_is_zero() {
    let router = create_router_with_config();
    let body = request(
        "2021-12-31",
        vec![employee("E001", json!("2021-01-01"), json!("2021-01-01"))],
    );

    let (_, result) = post_entitlements(router, body).await;
    let report = &result["reports"][0];

    for year in 2018..=2021 {
        assert_eq!(days(report, year), Decimal::ZERO, "year {}", year);
    }
    assert_eq!(total(report), Decimal::ZERO);
}

/// Scenario 4: a missing tenure anchor gives an all-zero series and a
/// warning, without failing the request.
#[tokio::test]
async fn test_scenario_4_missing_anchor_is_all_zero() {
    let router = create_router_with_config();
    let body = request(
        "2024-06-30",
        vec![
            employee("E001", json!("2015-01-01"), Value::Null),
            employee("E002", json!("2015-01-01"), json!("not a date")),
        ],
    );

    let (status, result) = post_entitlements(router, body).await;
    assert_eq!(status, StatusCode::OK);

    for report in result["reports"].as_array().unwrap() {
        let entitlements = report["entitlements"].as_array().unwrap();
        assert_eq!(entitlements.len(), 7);
        assert!(entitlements.iter().all(|e| dec(e["days"].as_str().unwrap()).is_zero()));
        assert_eq!(total(report), Decimal::ZERO);
        assert_eq!(report["audit_trace"]["warnings"][0]["code"], "INVALID_DATE");
    }
}

/// Scenario 5 through the API: totals keep half days and drop the rest.
#[tokio::test]
async fn test_scenario_5_total_rounds_down_to_half_day() {
    let router = create_router_with_config();
    // 2019: 5 x 184/365 = 2.52..., 2020: 5 x 366/365 + 1 = 6.01...
    let body = request(
        "2020-12-31",
        vec![employee("E001", json!("2019-07-01"), json!("2015-01-01"))],
    );

    let (_, result) = post_entitlements(router, body).await;
    assert_eq!(total(&result["reports"][0]), dec("8.5"));
}

// ============================================================================
// Batch behaviour
// ============================================================================

#[tokio::test]
async fn test_reports_follow_request_order() {
    let router = create_router_with_config();
    let body = request(
        "2022-03-01",
        vec![
            employee("Z9", json!("2010-01-01"), json!("2000-01-01")),
            employee("A1", json!("2020-01-01"), json!("2020-01-01")),
            employee("M5", json!("2016/05/10"), json!("2012/05/10")),
        ],
    );

    let (_, result) = post_entitlements(router, body).await;
    let ids: Vec<&str> = result["reports"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["employee"]["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["Z9", "A1", "M5"]);
    assert_eq!(result["years"], json!([2018, 2019, 2020, 2021, 2022]));
}

#[tokio::test]
async fn test_long_tenure_is_capped_every_year() {
    let router = create_router_with_config();
    let body = request(
        "2023-12-31",
        vec![employee("E001", json!("1995-01-01"), json!("1990-01-01"))],
    );

    let (_, result) = post_entitlements(router, body).await;
    let report = &result["reports"][0];
    for year in 2018..=2023 {
        assert_eq!(days(report, year), dec("15"), "year {}", year);
    }
    assert_eq!(total(report), dec("90"));
}

#[tokio::test]
async fn test_year_before_hire_is_zero_and_hire_year_is_partial() {
    let router = create_router_with_config();
    let body = request(
        "2021-12-31",
        vec![employee("E001", json!("2020-07-01"), json!("2012-03-01"))],
    );

    let (_, result) = post_entitlements(router, body).await;
    let report = &result["reports"][0];

    assert_eq!(days(report, 2018), Decimal::ZERO);
    assert_eq!(days(report, 2019), Decimal::ZERO);
    // 2020-07-01 to 2020-12-31 inclusive is 184 days at tier 5.
    assert_eq!(days(report, 2020), Decimal::from(5 * 184) / Decimal::from(365));
}

#[tokio::test]
async fn test_anniversary_before_hire_is_warned_not_rejected() {
    let router = create_router_with_config();
    let body = request(
        "2020-01-01",
        vec![employee("E001", json!("2019-09-01"), json!("2009-06-15"))],
    );

    let (status, result) = post_entitlements(router, body).await;
    assert_eq!(status, StatusCode::OK);

    let warnings = result["reports"][0]["audit_trace"]["warnings"]
        .as_array()
        .unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["code"], "ANNIVERSARY_BEFORE_HIRE");
    assert_eq!(warnings[0]["year"], 2019);
}

#[tokio::test]
async fn test_same_request_gives_same_reports() {
    let body = request(
        "2024-05-15",
        vec![
            employee("E001", json!("2009-06-15"), json!("1999-06-15")),
            employee("E002", json!("2023-02-01"), json!("2023-02-01")),
        ],
    );

    let (_, first) = post_entitlements(create_router_with_config(), body.clone()).await;
    let (_, second) = post_entitlements(create_router_with_config(), body).await;

    assert_eq!(first["reports"], second["reports"]);
    assert_ne!(first["calculation_id"], second["calculation_id"]);
}

// ============================================================================
// Request validation
// ============================================================================

#[tokio::test]
async fn test_blank_id_is_rejected() {
    let router = create_router_with_config();
    let body = request("2024-01-01", vec![employee("", json!("2015-01-01"), json!("2015-01-01"))]);

    let (status, result) = post_entitlements(router, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_EMPLOYEE");
}

#[tokio::test]
async fn test_duplicate_ids_are_rejected() {
    let router = create_router_with_config();
    let body = request(
        "2024-01-01",
        vec![
            employee("E001", json!("2015-01-01"), json!("2015-01-01")),
            employee("E001", json!("2016-01-01"), json!("2016-01-01")),
        ],
    );

    let (status, result) = post_entitlements(router, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "DUPLICATE_EMPLOYEE");
}

#[tokio::test]
async fn test_missing_employees_field_is_validation_error() {
    let router = create_router_with_config();
    let (status, result) = post_entitlements(router, json!({ "as_of": "2024-01-01" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}
