//! Plain-text rendering of engine results

use std::fmt::Write;

use rockbed_core::{
    Configuration, CostBreakdown, Dimension, Estimate, FilteredOptions, PaybackSummary, Range,
    SavingsData, SensitivityResult,
};

use crate::util::format::{format_currency, format_number, format_percent, format_price};

/// Shown whenever a configuration has no simulation record
pub const NO_ESTIMATE: &str =
    "No estimate available: no simulation was run for this combination.";

fn currency_range(range: Range) -> String {
    format!(
        "{} - {}",
        format_currency(range.lower),
        format_currency(range.upper)
    )
}

pub fn render_configuration(config: &Configuration) -> String {
    let mut out = String::new();
    for dim in Dimension::ALL {
        let value = config.value(dim).unwrap_or("(unset)");
        let _ = writeln!(out, "{:<28} {value}", format!("{dim}:"));
    }
    let _ = writeln!(
        out,
        "{:<28} {}",
        "Electricity price:",
        format_price(config.electricity_price())
    );
    out
}

pub fn render_options(options: &FilteredOptions) -> String {
    if options.is_empty() {
        return "No options match the current selection.\n".to_string();
    }

    let mut out = String::new();
    for dim in Dimension::ALL {
        let _ = writeln!(out, "{dim} ({}):", dim.name());
        for value in options.get(dim) {
            let _ = writeln!(out, "  {value}");
        }
    }
    out
}

pub fn render_cost(cost: &CostBreakdown) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Cost Summary");
    let _ = writeln!(out, "  Materials:            {}", format_currency(cost.materials));
    let _ = writeln!(out, "  Labor:                {}", format_currency(cost.labor));
    let _ = writeln!(out, "  Total project cost:   {}", format_currency(cost.total));
    let _ = writeln!(
        out,
        "  Cost per sq ft:       {} (assumes 1,000 sq ft)",
        format_currency(cost.cost_per_area)
    );
    out
}

pub fn render_savings(savings: &SavingsData) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Savings");
    let _ = writeln!(
        out,
        "  Annual energy savings:  {} - {} kWh/yr",
        format_number(savings.energy_kwh.lower),
        format_number(savings.energy_kwh.upper)
    );
    let _ = writeln!(
        out,
        "                          {} - {} Btu/yr",
        format_number(savings.energy_btu.lower),
        format_number(savings.energy_btu.upper)
    );
    let _ = writeln!(
        out,
        "  Annual cost savings:    {}/yr",
        currency_range(savings.cost_savings)
    );
    let _ = writeln!(
        out,
        "  Efficiency improvement: {} - {}",
        format_percent(savings.savings_percent.lower),
        format_percent(savings.savings_percent.upper)
    );
    out
}

pub fn render_payback(summary: &PaybackSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Payback");
    let _ = writeln!(out, "  Simple payback period:  {}", summary.period);
    let _ = writeln!(
        out,
        "  10-year net savings:    {}",
        currency_range(summary.ten_year_net)
    );
    if let Some(year) = summary.break_even_year() {
        let _ = writeln!(out, "  Net positive by year:   {year}");
    }

    let _ = writeln!(out, "\nPayback Timeline");
    for point in &summary.timeline {
        let marker = if point.net.lower >= 0.0 { '+' } else { '-' };
        let _ = writeln!(
            out,
            "  Year {:>2} {marker} {:>10} .. {:>10}",
            point.year,
            format_currency(point.net.lower),
            format_currency(point.net.upper)
        );
    }
    out
}

/// Full report for a resolved configuration, or the no-estimate message
pub fn render_estimate(estimate: &Estimate<'_>) -> String {
    let (Some(savings), Some(summary)) = (estimate.savings, estimate.payback()) else {
        return format!("{NO_ESTIMATE}\n");
    };

    [
        render_cost(&estimate.cost),
        render_savings(&savings),
        render_payback(&summary),
    ]
    .join("\n")
}

pub fn render_sensitivity(base_price: f64, result: &SensitivityResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Electricity Price Sensitivity ({} -> {})",
        format_price(base_price),
        format_price(result.price)
    );
    let _ = writeln!(
        out,
        "  Adjusted annual savings: {}/yr",
        currency_range(result.savings.cost_savings)
    );
    let _ = writeln!(out, "  Adjusted payback period: {}", result.payback);
    let _ = writeln!(
        out,
        "  Adjusted 10-year net:    {}",
        currency_range(result.ten_year_net)
    );
    out
}

pub fn render_sweep(results: &[SensitivityResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>12}  {:>21}  {:>20}",
        "Price", "Annual savings", "Payback"
    );
    for result in results {
        let _ = writeln!(
            out,
            "{:>12}  {:>21}  {:>20}",
            format_price(result.price),
            currency_range(result.savings.cost_savings),
            result.payback.to_string()
        );
    }
    out
}
