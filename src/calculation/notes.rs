//! Human-readable calculation notes.
//!
//! Every calculation carries short Indonesian-language notes naming the
//! PTKP code and value, the path that ran, the applicable statutory caps,
//! and an NPWP warning when the surcharge applied.

use rust_decimal::Decimal;

use crate::models::TaxProfile;

use super::tables::ptkp_yearly;

/// Formats a rupiah amount with dot thousand separators, no decimals.
fn format_rupiah(amount: Decimal) -> String {
    let whole = amount.trunc().to_string();
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", whole.as_str()),
    };

    let mut grouped = String::new();
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("{}{}", sign, grouped)
}

fn base_notes(profile: &TaxProfile) -> Vec<String> {
    let mut notes = vec![format!(
        "PTKP: {} ({} per tahun)",
        profile.ptkp_code.as_str(),
        format_rupiah(ptkp_yearly(profile.ptkp_code))
    )];
    if !profile.has_npwp {
        notes.push(
            "Peringatan: Tidak memiliki NPWP, PPh21 dikenakan tarif 20% lebih tinggi".to_string(),
        );
    }
    notes
}

/// Notes for the monthly (TER-style) path.
pub fn monthly_notes(profile: &TaxProfile) -> Vec<String> {
    let mut notes = base_notes(profile);
    notes.push("Perhitungan bulanan menggunakan TER (Tarif Efektif Rata-rata)".to_string());
    notes.push("Biaya Jabatan: 5% dari bruto, maksimal 500.000/bulan".to_string());
    notes.push("Iuran Pensiun: 5% dari bruto, maksimal 200.000/bulan".to_string());
    notes
}

/// Notes for the December reconciliation path.
pub fn december_notes(profile: &TaxProfile) -> Vec<String> {
    let mut notes = base_notes(profile);
    notes.push("Perhitungan Desember: Rekonsiliasi tahunan".to_string());
    notes.push("Biaya Jabatan: 5% dari bruto, maksimal 500.000/bulan".to_string());
    notes.push("Iuran Pensiun: 5% dari bruto, maksimal 200.000/bulan".to_string());
    notes
}

/// Notes for the standalone annual calculator.
pub fn annual_notes(profile: &TaxProfile) -> Vec<String> {
    let mut notes = base_notes(profile);
    notes.push("Perhitungan kalkulator dengan bruto tahunan".to_string());
    notes.push("Biaya Jabatan: 5% dari bruto, maksimal 6.000.000/tahun".to_string());
    notes.push("Iuran Pensiun: 5% dari bruto, maksimal 2.400.000/tahun".to_string());
    notes
}
