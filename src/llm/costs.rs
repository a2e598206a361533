//! Per-model token pricing (USD per token).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Pricing used when a model is not in the table.
pub fn default_cost() -> (Decimal, Decimal) {
    (dec!(0.0000025), dec!(0.00001))
}

/// Input/output price per token for a known model.
///
/// Dated snapshots (`gpt-4o-2024-08-06`) resolve to their base model.
pub fn model_cost(model: &str) -> Option<(Decimal, Decimal)> {
    let model = model.to_ascii_lowercase();
    // Longest prefixes first so gpt-4o-mini doesn't resolve to gpt-4o.
    let table: &[(&str, (Decimal, Decimal))] = &[
        ("gpt-4o-mini", (dec!(0.00000015), dec!(0.0000006))),
        ("gpt-4o", (dec!(0.0000025), dec!(0.00001))),
        ("gpt-4.1-mini", (dec!(0.0000004), dec!(0.0000016))),
        ("gpt-4.1", (dec!(0.000002), dec!(0.000008))),
        ("gpt-4-turbo", (dec!(0.00001), dec!(0.00003))),
        ("gpt-3.5-turbo", (dec!(0.0000005), dec!(0.0000015))),
    ];
    table
        .iter()
        .find(|(prefix, _)| model.starts_with(prefix))
        .map(|(_, cost)| *cost)
}
