//! Tax profile model and PTKP status codes.
//!
//! A tax profile carries the two facts about an employee that change the
//! withholding arithmetic: the PTKP status code and whether the employee
//! holds an NPWP (taxpayer identification number).

use serde::{Deserialize, Serialize};

/// PTKP status code (marital status and number of dependents).
///
/// The eight statutory codes determine the yearly tax-free threshold.
/// `TK` codes are unmarried, `K` codes married; the digit is the number
/// of dependents (0-3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PtkpCode {
    /// Tidak kawin, 0 tanggungan.
    #[serde(rename = "TK0")]
    Tk0,
    /// Tidak kawin, 1 tanggungan.
    #[serde(rename = "TK1")]
    Tk1,
    /// Tidak kawin, 2 tanggungan.
    #[serde(rename = "TK2")]
    Tk2,
    /// Tidak kawin, 3 tanggungan.
    #[serde(rename = "TK3")]
    Tk3,
    /// Kawin, 0 tanggungan.
    #[serde(rename = "K0")]
    K0,
    /// Kawin, 1 tanggungan.
    #[serde(rename = "K1")]
    K1,
    /// Kawin, 2 tanggungan.
    #[serde(rename = "K2")]
    K2,
    /// Kawin, 3 tanggungan.
    #[serde(rename = "K3")]
    K3,
}

impl PtkpCode {
    /// Parses a PTKP code string.
    ///
    /// Unknown codes fall back to `TK0`. This is deliberate compatibility
    /// behavior, not an error: historical data contains free-typed codes
    /// and the statute's lowest threshold is the safe default.
    ///
    /// # Examples
    ///
    /// ```
    /// use pph21_engine::models::PtkpCode;
    ///
    /// assert_eq!(PtkpCode::from_code("K2"), PtkpCode::K2);
    /// assert_eq!(PtkpCode::from_code("tk1"), PtkpCode::Tk1);
    /// assert_eq!(PtkpCode::from_code("HB2"), PtkpCode::Tk0);
    /// ```
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "TK0" => PtkpCode::Tk0,
            "TK1" => PtkpCode::Tk1,
            "TK2" => PtkpCode::Tk2,
            "TK3" => PtkpCode::Tk3,
            "K0" => PtkpCode::K0,
            "K1" => PtkpCode::K1,
            "K2" => PtkpCode::K2,
            "K3" => PtkpCode::K3,
            _ => PtkpCode::Tk0,
        }
    }

    /// Returns the canonical code string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PtkpCode::Tk0 => "TK0",
            PtkpCode::Tk1 => "TK1",
            PtkpCode::Tk2 => "TK2",
            PtkpCode::Tk3 => "TK3",
            PtkpCode::K0 => "K0",
            PtkpCode::K1 => "K1",
            PtkpCode::K2 => "K2",
            PtkpCode::K3 => "K3",
        }
    }
}

/// The tax facts for one employee, immutable per calculation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxProfile {
    /// PTKP status code.
    pub ptkp_code: PtkpCode,
    /// Whether the employee holds an NPWP. Without one, withholding is
    /// 20% higher.
    pub has_npwp: bool,
}

impl TaxProfile {
    /// Creates a new tax profile.
    pub fn new(ptkp_code: PtkpCode, has_npwp: bool) -> Self {
        Self {
            ptkp_code,
            has_npwp,
        }
    }
}
