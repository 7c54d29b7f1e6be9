//! Calculation logic for the PPh21 Withholding Engine.
//!
//! This module contains all the calculation functions for PPh21
//! withholding, including the statutory PTKP and Pasal 17 bracket tables,
//! gross-income summation, statutory deduction calculators with their
//! monthly/annual caps, the monthly TER-style estimation path, the
//! December annual reconciliation path, the standalone annual calculator,
//! and the rounding rules mandated by tax law.

mod annual;
mod bruto;
mod december;
mod deductions;
mod monthly;
mod notes;
mod rounding;
mod tables;
mod validate;

pub use annual::calculate_standalone_annual;
pub use bruto::taxable_bruto;
pub use deductions::{
    Cadence, DeductionBreakdown, biaya_jabatan, biaya_jabatan_cap, biaya_jabatan_rate,
    iuran_pensiun, iuran_pensiun_cap, iuran_pensiun_rate,
};
pub use december::calculate_december;
pub use monthly::calculate_monthly;
pub use notes::{annual_notes, december_notes, monthly_notes};
pub use rounding::{floor_to_thousand, round_currency};
pub use tables::{
    TaxBracket, apply_npwp_penalty, npwp_penalty_multiplier, progressive_tax, ptkp_yearly,
    tax_brackets, taxable_income,
};
