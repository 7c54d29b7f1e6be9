//! Request types for the PPh21 Withholding Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`,
//! `/calculate/batch`, and `/calculator/annual` endpoints. Earnings and
//! deductions arrive keyed by component code; the handlers resolve codes
//! against the catalog into typed lines before invoking the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PtkpCode, TaxProfile, YtdAggregate};

/// Tax profile information in a calculation request.
///
/// The PTKP code is accepted as a free string; unknown codes fall back
/// to TK0 rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxProfileRequest {
    /// PTKP status code (TK0..TK3, K0..K3).
    pub ptkp_code: String,
    /// Whether the employee holds an NPWP.
    #[serde(default = "default_true")]
    pub has_npwp: bool,
}

fn default_true() -> bool {
    true
}

/// The period a calculation applies to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// Tax year.
    pub year: i32,
    /// Month within the year (1-12).
    pub month: u8,
}

/// One earning amount, keyed by component code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarningRequest {
    /// Earning component code from the catalog.
    pub component: String,
    /// The amount for the period.
    pub amount: Decimal,
}

/// One deduction amount, keyed by component code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeductionRequest {
    /// Deduction component code from the catalog.
    pub component: String,
    /// The amount for the period.
    pub amount: Decimal,
}

/// Year-to-date totals supplied by the caller.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct YtdRequest {
    /// Sum of prior-period neto values this year.
    #[serde(default)]
    pub neto_yearly: Decimal,
    /// Sum of prior-period PPh21 withholdings this year.
    #[serde(default)]
    pub pph21_ytd: Decimal,
}

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Optional employment identifier, echoed back in the response.
    #[serde(default)]
    pub employment_id: Option<String>,
    /// The employee's tax profile.
    pub tax_profile: TaxProfileRequest,
    /// The period to calculate.
    pub period: PeriodRequest,
    /// Earning amounts for the period.
    pub earnings: Vec<EarningRequest>,
    /// Deduction amounts for the period.
    #[serde(default)]
    pub deductions: Vec<DeductionRequest>,
    /// Year-to-date aggregate from prior periods. Omit when no prior
    /// periods exist.
    #[serde(default)]
    pub ytd: Option<YtdRequest>,
}

/// One employment's inputs within a batch request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItemRequest {
    /// The employment being calculated.
    pub employment_id: String,
    /// Optional display name, echoed back in the response.
    #[serde(default)]
    pub person_name: Option<String>,
    /// The employee's tax profile; items without one fail individually
    /// with `MISSING_TAX_PROFILE` while the batch continues.
    #[serde(default)]
    pub tax_profile: Option<TaxProfileRequest>,
    /// Earning amounts for the period.
    pub earnings: Vec<EarningRequest>,
    /// Deduction amounts for the period.
    #[serde(default)]
    pub deductions: Vec<DeductionRequest>,
    /// Year-to-date aggregate from prior periods.
    #[serde(default)]
    pub ytd: Option<YtdRequest>,
}

/// Request body for the `/calculate/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCalculationRequest {
    /// The period every item in the batch is calculated for.
    pub period: PeriodRequest,
    /// The employments to calculate.
    pub calculations: Vec<BatchItemRequest>,
}

/// Request body for the `/calculator/annual` endpoint.
///
/// Bruto is an already-annual figure; the monthly projection of the
/// `/calculate` endpoint does not apply here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualCalculatorRequest {
    /// PTKP status code.
    pub ptkp_code: String,
    /// Whether the employee holds an NPWP.
    #[serde(default = "default_true")]
    pub has_npwp: bool,
    /// Gross taxable income for the full year.
    pub bruto: Decimal,
    /// Manual biaya jabatan override (clamped to the annual cap).
    #[serde(default)]
    pub biaya_jabatan: Option<Decimal>,
    /// Manual iuran pensiun override (clamped to the annual cap).
    #[serde(default)]
    pub iuran_pensiun: Option<Decimal>,
    /// Zakat paid through the employer.
    #[serde(default)]
    pub zakat: Option<Decimal>,
}

impl From<&TaxProfileRequest> for TaxProfile {
    fn from(req: &TaxProfileRequest) -> Self {
        TaxProfile::new(PtkpCode::from_code(&req.ptkp_code), req.has_npwp)
    }
}

impl From<YtdRequest> for YtdAggregate {
    fn from(req: YtdRequest) -> Self {
        YtdAggregate {
            neto_yearly: req.neto_yearly,
            pph21_ytd: req.pph21_ytd,
        }
    }
}
