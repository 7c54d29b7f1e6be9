//! Comprehensive integration tests for the PPh21 Withholding Engine.
//!
//! This test suite covers all calculation scenarios including:
//! - Monthly withholding (months 1-11)
//! - December annual reconciliation
//! - Standalone annual calculator
//! - Component catalog resolution (taxable flags, deduction roles)
//! - NPWP surcharge
//! - Batch calculation with partial failures
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use pph21_engine::api::{AppState, create_router};
use pph21_engine::config::CatalogLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let catalog = CatalogLoader::load("./config/pph21").expect("Failed to load catalog");
    AppState::new(catalog)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn field_decimal(body: &Value, field: &str) -> Decimal {
    decimal(
        body[field]
            .as_str()
            .unwrap_or_else(|| panic!("field {} missing or not a string: {}", field, body)),
    )
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
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

fn monthly_request(month: u8, amount: &str, ytd: Option<Value>) -> Value {
    let mut request = json!({
        "employment_id": "emp_001",
        "tax_profile": { "ptkp_code": "TK0", "has_npwp": true },
        "period": { "year": 2025, "month": month },
        "earnings": [
            { "component": "gaji_pokok", "amount": amount }
        ],
        "deductions": []
    });
    if let Some(ytd) = ytd {
        request["ytd"] = ytd;
    }
    request
}

// =============================================================================
// Monthly path
// =============================================================================

/// Month 6, TK0, bruto 10M: caps hit, PKP 57.6M, 240,000 withheld.
#[tokio::test]
async fn test_monthly_statutory_scenario() {
    let router = create_router_for_test();

    let (status, body) = post_json(router, "/calculate", monthly_request(6, "10000000", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field_decimal(&body, "bruto"), decimal("10000000"));
    assert_eq!(field_decimal(&body, "biaya_jabatan"), decimal("500000"));
    assert_eq!(field_decimal(&body, "iuran_pensiun"), decimal("200000"));
    assert_eq!(field_decimal(&body, "neto"), decimal("9300000"));
    assert_eq!(field_decimal(&body, "ptkp_yearly"), decimal("54000000"));
    assert_eq!(field_decimal(&body, "pkp"), decimal("57600000"));
    assert_eq!(field_decimal(&body, "pph21_period"), decimal("240000"));
    assert_eq!(
        field_decimal(&body, "pph21_settlement_december"),
        Decimal::ZERO
    );
    assert_eq!(body["mode"], "monthly");
    assert_eq!(body["month"], 6);
    assert_eq!(body["year"], 2025);
    assert_eq!(body["employment_id"], "emp_001");
}

/// Non-taxable components are excluded from bruto by the catalog.
#[tokio::test]
async fn test_non_taxable_component_excluded() {
    let router = create_router_for_test();

    let request = json!({
        "tax_profile": { "ptkp_code": "TK0", "has_npwp": true },
        "period": { "year": 2025, "month": 6 },
        "earnings": [
            { "component": "gaji_pokok", "amount": "10000000" },
            { "component": "penggantian_medis", "amount": "3000000" }
        ]
    });

    let (status, body) = post_json(router, "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field_decimal(&body, "bruto"), decimal("10000000"));
}

/// Deduction roles come from the catalog: supplied iuran pensiun wins
/// over the computed 5%, zakat and other tax-deductibles reduce neto,
/// role-none components are ignored.
#[tokio::test]
async fn test_deduction_roles_from_catalog() {
    let router = create_router_for_test();

    let request = json!({
        "tax_profile": { "ptkp_code": "TK0", "has_npwp": true },
        "period": { "year": 2025, "month": 6 },
        "earnings": [
            { "component": "gaji_pokok", "amount": "10000000" }
        ],
        "deductions": [
            { "component": "iuran_pensiun", "amount": "150000" },
            { "component": "zakat", "amount": "100000" },
            { "component": "iuran_jht", "amount": "50000" },
            { "component": "cicilan_pinjaman", "amount": "2000000" }
        ]
    });

    let (status, body) = post_json(router, "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field_decimal(&body, "iuran_pensiun"), decimal("150000"));
    assert_eq!(field_decimal(&body, "zakat"), decimal("100000"));
    assert_eq!(field_decimal(&body, "other_deductions"), decimal("50000"));
    // 10,000,000 - 500,000 - 150,000 - 100,000 - 50,000; the loan
    // installment has no tax effect
    assert_eq!(field_decimal(&body, "neto"), decimal("9200000"));
}

/// The no-NPWP surcharge raises the withholding by 20%.
#[tokio::test]
async fn test_npwp_surcharge() {
    let router = create_router_for_test();
    let mut request = monthly_request(6, "10000000", None);
    request["tax_profile"]["has_npwp"] = json!(false);

    let (status, body) = post_json(router, "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field_decimal(&body, "pph21_period"), decimal("288000"));
    assert!(
        body["notes"]
            .as_array()
            .unwrap()
            .iter()
            .any(|n| n.as_str().unwrap().contains("NPWP"))
    );
}

/// Unknown PTKP codes fall back to TK0 instead of failing.
#[tokio::test]
async fn test_unknown_ptkp_code_tolerated() {
    let router = create_router_for_test();
    let mut request = monthly_request(6, "10000000", None);
    request["tax_profile"]["ptkp_code"] = json!("HB2");

    let (status, body) = post_json(router, "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field_decimal(&body, "ptkp_yearly"), decimal("54000000"));
}

// =============================================================================
// December reconciliation
// =============================================================================

/// A flat year reconciles December to the same 240,000 as every other
/// month.
#[tokio::test]
async fn test_december_flat_year() {
    let router = create_router_for_test();

    let request = monthly_request(
        12,
        "10000000",
        Some(json!({ "neto_yearly": "102300000", "pph21_ytd": "2640000" })),
    );

    let (status, body) = post_json(router, "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["month"], 12);
    assert_eq!(field_decimal(&body, "pkp"), decimal("57600000"));
    assert_eq!(
        field_decimal(&body, "pph21_settlement_december"),
        decimal("240000")
    );
    assert_eq!(field_decimal(&body, "pph21_period"), decimal("240000"));
}

/// Over-withholding: the raw settlement is negative but the reported
/// December withholding is clamped to zero.
#[tokio::test]
async fn test_december_over_withheld_clamped() {
    let router = create_router_for_test();

    // Yearly neto 55.8M -> PKP 1.8M -> yearly tax 90,000, far less than
    // the 1,000,000 already withheld.
    let request = monthly_request(
        12,
        "10000000",
        Some(json!({ "neto_yearly": "46500000", "pph21_ytd": "1000000" })),
    );

    let (status, body) = post_json(router, "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        field_decimal(&body, "pph21_settlement_december"),
        decimal("-910000")
    );
    assert_eq!(field_decimal(&body, "pph21_period"), Decimal::ZERO);
}

/// Driving all twelve months through the API reproduces the
/// reconciliation identity: eleven monthly withholdings plus the
/// December settlement equal the progressive tax on the annual PKP.
#[tokio::test]
async fn test_full_year_reconciliation_identity() {
    let mut neto_yearly = Decimal::ZERO;
    let mut pph21_ytd = Decimal::ZERO;

    for month in 1..=11u8 {
        let router = create_router_for_test();
        let request = monthly_request(
            month,
            "10000000",
            Some(json!({
                "neto_yearly": neto_yearly.to_string(),
                "pph21_ytd": pph21_ytd.to_string()
            })),
        );
        let (status, body) = post_json(router, "/calculate", request).await;
        assert_eq!(status, StatusCode::OK);

        neto_yearly += field_decimal(&body, "neto");
        pph21_ytd += field_decimal(&body, "pph21_period");
    }

    let router = create_router_for_test();
    let december = monthly_request(
        12,
        "10000000",
        Some(json!({
            "neto_yearly": neto_yearly.to_string(),
            "pph21_ytd": pph21_ytd.to_string()
        })),
    );
    let (status, body) = post_json(router, "/calculate", december).await;
    assert_eq!(status, StatusCode::OK);

    let settlement = field_decimal(&body, "pph21_settlement_december");
    let total_withheld = pph21_ytd + settlement;
    // Annual PKP 57.6M sits in the 5% bracket
    assert_eq!(total_withheld, decimal("2880000"));
}

// =============================================================================
// Standalone annual calculator
// =============================================================================

/// TK0, annual bruto 120M, no NPWP: annual caps, PKP 57.6M, surcharged
/// yearly tax 3,456,000 displayed monthly as 288,000.
#[tokio::test]
async fn test_annual_calculator_scenario() {
    let router = create_router_for_test();

    let request = json!({
        "ptkp_code": "TK0",
        "has_npwp": false,
        "bruto": "120000000"
    });

    let (status, body) = post_json(router, "/calculator/annual", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mode"], "annual");
    assert!(body["month"].is_null());
    assert_eq!(field_decimal(&body, "biaya_jabatan"), decimal("6000000"));
    assert_eq!(field_decimal(&body, "iuran_pensiun"), decimal("2400000"));
    assert_eq!(field_decimal(&body, "neto"), decimal("111600000"));
    assert_eq!(field_decimal(&body, "pkp"), decimal("57600000"));
    assert_eq!(field_decimal(&body, "pph21_period"), decimal("288000"));
}

/// Manual overrides are clamped to the annual caps.
#[tokio::test]
async fn test_annual_calculator_overrides_clamped() {
    let router = create_router_for_test();

    let request = json!({
        "ptkp_code": "TK0",
        "bruto": "120000000",
        "biaya_jabatan": "9000000",
        "iuran_pensiun": "5000000",
        "zakat": "2500000"
    });

    let (status, body) = post_json(router, "/calculator/annual", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field_decimal(&body, "biaya_jabatan"), decimal("6000000"));
    assert_eq!(field_decimal(&body, "iuran_pensiun"), decimal("2400000"));
    assert_eq!(field_decimal(&body, "zakat"), decimal("2500000"));
    assert_eq!(field_decimal(&body, "neto"), decimal("109100000"));
}

// =============================================================================
// Batch calculation
// =============================================================================

/// Items fail individually; the batch reports counters and keeps going.
#[tokio::test]
async fn test_batch_partial_success() {
    let router = create_router_for_test();

    let request = json!({
        "period": { "year": 2025, "month": 6 },
        "calculations": [
            {
                "employment_id": "emp_001",
                "person_name": "Budi Santoso",
                "tax_profile": { "ptkp_code": "TK0", "has_npwp": true },
                "earnings": [{ "component": "gaji_pokok", "amount": "10000000" }]
            },
            {
                "employment_id": "emp_002",
                "person_name": "Siti Aminah",
                "earnings": [{ "component": "gaji_pokok", "amount": "8000000" }]
            },
            {
                "employment_id": "emp_003",
                "tax_profile": { "ptkp_code": "K1", "has_npwp": true },
                "earnings": [{ "component": "komponen_misterius", "amount": "8000000" }]
            }
        ]
    });

    let (status, body) = post_json(router, "/calculate/batch", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 2025);
    assert_eq!(body["month"], 6);
    assert_eq!(body["total"], 3);
    assert_eq!(body["success"], 1);
    assert_eq!(body["failed"], 2);

    let results = body["results"].as_array().unwrap();
    assert_eq!(results[0]["employment_id"], "emp_001");
    assert_eq!(results[0]["person_name"], "Budi Santoso");
    assert_eq!(field_decimal(&results[0], "pph21_period"), decimal("240000"));
    assert_eq!(results[1]["error"]["code"], "MISSING_TAX_PROFILE");
    assert_eq!(results[2]["error"]["code"], "COMPONENT_NOT_FOUND");
}

/// A batch for December runs the reconciliation per item.
#[tokio::test]
async fn test_batch_december() {
    let router = create_router_for_test();

    let request = json!({
        "period": { "year": 2025, "month": 12 },
        "calculations": [
            {
                "employment_id": "emp_001",
                "tax_profile": { "ptkp_code": "TK0", "has_npwp": true },
                "earnings": [{ "component": "gaji_pokok", "amount": "10000000" }],
                "ytd": { "neto_yearly": "102300000", "pph21_ytd": "2640000" }
            }
        ]
    });

    let (status, body) = post_json(router, "/calculate/batch", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], 1);
    assert_eq!(
        field_decimal(&body["results"][0], "pph21_settlement_december"),
        decimal("240000")
    );
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_field_returns_400() {
    let router = create_router_for_test();

    // No tax_profile
    let request = json!({
        "period": { "year": 2025, "month": 6 },
        "earnings": []
    });

    let (status, body) = post_json(router, "/calculate", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(
        message.contains("missing field") || message.contains("tax_profile"),
        "Expected error message to mention the missing field, got: {}",
        message
    );
}

#[tokio::test]
async fn test_month_out_of_range_returns_400() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        router,
        "/calculate",
        monthly_request(13, "10000000", None),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_MONTH");
}

#[tokio::test]
async fn test_negative_amount_returns_400() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        router,
        "/calculate",
        monthly_request(6, "-10000000", None),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_unknown_deduction_component_returns_400() {
    let router = create_router_for_test();

    let mut request = monthly_request(6, "10000000", None);
    request["deductions"] = json!([{ "component": "potongan_misterius", "amount": "1" }]);

    let (status, body) = post_json(router, "/calculate", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "DEDUCTION_COMPONENT_NOT_FOUND");
}

/// Identical requests produce identical calculation fields (only the
/// envelope id and timestamp differ).
#[tokio::test]
async fn test_identical_requests_identical_results() {
    let request = monthly_request(6, "12345678.91", None);

    let (_, first) = post_json(create_router_for_test(), "/calculate", request.clone()).await;
    let (_, second) = post_json(create_router_for_test(), "/calculate", request).await;

    for field in [
        "bruto",
        "biaya_jabatan",
        "iuran_pensiun",
        "zakat",
        "other_deductions",
        "neto",
        "ptkp_yearly",
        "pkp",
        "pph21_period",
        "pph21_ytd",
        "pph21_settlement_december",
    ] {
        assert_eq!(first[field], second[field], "field {} differed", field);
    }
}
