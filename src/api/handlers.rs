//! HTTP request handlers for the PPh21 Withholding Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_december, calculate_monthly, calculate_standalone_annual};
use crate::config::CatalogLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalculationResult, DeductionLine, EarningLine, TaxProfile, YtdAggregate,
};

use super::request::{
    AnnualCalculatorRequest, BatchCalculationRequest, CalculationRequest, DeductionRequest,
    EarningRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, BatchItemResponse, BatchResponse, CalculationEnvelope,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/calculate/batch", post(batch_handler))
        .route("/calculator/annual", post(annual_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error body.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Resolves earning requests into typed lines via the catalog.
fn resolve_earnings(
    catalog: &CatalogLoader,
    earnings: &[EarningRequest],
) -> EngineResult<Vec<EarningLine>> {
    earnings
        .iter()
        .map(|earning| {
            let component = catalog.get_component(&earning.component)?;
            Ok(EarningLine {
                amount: earning.amount,
                taxable: component.taxable,
            })
        })
        .collect()
}

/// Resolves deduction requests into typed lines via the catalog.
fn resolve_deductions(
    catalog: &CatalogLoader,
    deductions: &[DeductionRequest],
) -> EngineResult<Vec<DeductionLine>> {
    deductions
        .iter()
        .map(|deduction| {
            let role = catalog.deduction_role(&deduction.component)?;
            Ok(DeductionLine {
                amount: deduction.amount,
                role,
            })
        })
        .collect()
}

/// Runs the period calculation for a month, dispatching December to the
/// reconciliation path.
fn run_period_calculation(
    profile: &TaxProfile,
    earnings: &[EarningLine],
    deductions: &[DeductionLine],
    month: u8,
    ytd: &YtdAggregate,
) -> EngineResult<CalculationResult> {
    match month {
        12 => calculate_december(profile, earnings, deductions, ytd),
        1..=11 => calculate_monthly(profile, earnings, deductions, month, ytd),
        _ => Err(EngineError::InvalidMonth { month }),
    }
}

/// Handler for POST /calculate.
///
/// Accepts one employment-month and returns the calculation result
/// wrapped in an envelope.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let catalog = state.catalog();
    let profile: TaxProfile = (&request.tax_profile).into();
    let ytd: YtdAggregate = request.ytd.map(Into::into).unwrap_or_default();

    let outcome = resolve_earnings(catalog, &request.earnings).and_then(|earnings| {
        let deductions = resolve_deductions(catalog, &request.deductions)?;
        run_period_calculation(&profile, &earnings, &deductions, request.period.month, &ytd)
    });

    match outcome {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employment_id = request.employment_id.as_deref().unwrap_or("-"),
                month = request.period.month,
                pph21_period = %result.pph21_period,
                "Calculation completed successfully"
            );
            let envelope = CalculationEnvelope::new(
                result,
                request.employment_id,
                Some(request.period.year),
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(envelope),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /calculate/batch.
///
/// Calculates many employments for one period. Items fail individually;
/// the batch always returns 200 with per-item outcomes and counters.
async fn batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchCalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let month = request.period.month;
    if !(1..=12).contains(&month) {
        let api_error: ApiErrorResponse = EngineError::InvalidMonth { month }.into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    let catalog = state.catalog();
    let total = request.calculations.len();
    let mut results = Vec::with_capacity(total);

    for item in request.calculations {
        let outcome = item
            .tax_profile
            .as_ref()
            .ok_or_else(|| EngineError::MissingTaxProfile {
                employment_id: item.employment_id.clone(),
            })
            .and_then(|profile_req| {
                let profile: TaxProfile = profile_req.into();
                let earnings = resolve_earnings(catalog, &item.earnings)?;
                let deductions = resolve_deductions(catalog, &item.deductions)?;
                let ytd: YtdAggregate = item.ytd.map(Into::into).unwrap_or_default();
                run_period_calculation(&profile, &earnings, &deductions, month, &ytd)
            });

        results.push(match outcome {
            Ok(result) => BatchItemResponse {
                employment_id: item.employment_id,
                person_name: item.person_name,
                result: Some(result),
                error: None,
            },
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    employment_id = %item.employment_id,
                    error = %err,
                    "Batch item failed"
                );
                BatchItemResponse {
                    employment_id: item.employment_id,
                    person_name: item.person_name,
                    result: None,
                    error: Some(err.into()),
                }
            }
        });
    }

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    let response = BatchResponse {
        year: request.period.year,
        month,
        total,
        success: total - failed,
        failed,
        results,
    };

    info!(
        correlation_id = %correlation_id,
        total = response.total,
        success = response.success,
        failed = response.failed,
        "Batch calculation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /calculator/annual.
///
/// The standalone what-if calculator over an already-annual bruto.
async fn annual_handler(
    State(_state): State<AppState>,
    payload: Result<Json<AnnualCalculatorRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing annual calculator request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let profile = TaxProfile::new(
        crate::models::PtkpCode::from_code(&request.ptkp_code),
        request.has_npwp,
    );
    let zakat = request.zakat.unwrap_or_default();

    match calculate_standalone_annual(
        &profile,
        request.bruto,
        request.biaya_jabatan,
        request.iuran_pensiun,
        zakat,
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                ptkp_code = profile.ptkp_code.as_str(),
                pph21_period = %result.pph21_period,
                "Annual calculation completed successfully"
            );
            let envelope = CalculationEnvelope::new(result, None, None);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(envelope),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Annual calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
