//! PPh21 Withholding Engine for Indonesian Payroll
//!
//! This crate computes employee income-tax withholding (PPh Pasal 21) for a
//! single employment and period: gross taxable income, statutory deductions
//! (biaya jabatan, iuran pensiun, zakat), the PTKP exemption, progressive
//! Pasal 17 bracket tax, and the December annual reconciliation against
//! year-to-date withholding.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
