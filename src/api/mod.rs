//! HTTP API module for the PPh21 Withholding Engine.
//!
//! This module provides the REST API endpoints for calculating PPh21
//! withholding: one employment-month, a whole batch, and the standalone
//! annual calculator.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AnnualCalculatorRequest, BatchCalculationRequest, BatchItemRequest, CalculationRequest,
    DeductionRequest, EarningRequest, PeriodRequest, TaxProfileRequest, YtdRequest,
};
pub use response::{ApiError, BatchItemResponse, BatchResponse, CalculationEnvelope};
pub use state::AppState;
