//! Savings derived from a matched simulation record

use crate::model::{Range, Record, SavingsData};

/// Parse a numeric cell from the lookup table
///
/// Thousands separators and dollar signs are removed, leading whitespace is
/// skipped and the longest leading decimal number is read, so `"12.5%"` reads
/// as `12.5`. Text with no leading number, or a number too large to be
/// finite, reads as `0.0`.
#[must_use]
pub fn parse_amount(text: &str) -> f64 {
    let cleaned: String = text.chars().filter(|c| !matches!(c, ',' | '$')).collect();
    let trimmed = cleaned.trim_start();

    let candidate_len = trimmed
        .char_indices()
        .find(|(_, c)| !matches!(c, '0'..='9' | '.' | '+' | '-' | 'e' | 'E'))
        .map_or(trimmed.len(), |(i, _)| i);

    (1..=candidate_len)
        .rev()
        .find_map(|len| trimmed[..len].parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

fn parse_range(lower: &str, upper: &str) -> Range {
    Range::new(parse_amount(lower), parse_amount(upper))
}

/// Annual energy, cost and percentage savings for a record
///
/// Cost savings are each kWh bound times the electricity price; the bounds
/// are never crossed.
#[must_use]
pub fn estimate_savings(record: &Record, electricity_price: f64) -> SavingsData {
    let energy_kwh = parse_range(&record.energy_kwh_lower, &record.energy_kwh_upper);

    SavingsData {
        energy_kwh,
        energy_btu: parse_range(&record.energy_btu_lower, &record.energy_btu_upper),
        savings_percent: parse_range(&record.savings_percent_lower, &record.savings_percent_upper),
        cost_savings: cost_savings(energy_kwh, electricity_price),
    }
}

/// Dollar value of a kWh range at a given price
#[must_use]
pub fn cost_savings(energy_kwh: Range, electricity_price: f64) -> Range {
    energy_kwh.map(|kwh| kwh * electricity_price)
}
