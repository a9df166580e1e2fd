//! Report formatting for grid cells and the weekly margin chart.
//!
//! This module turns derived figures into display strings: currency and percentage
//! formatting, the colour band a GM% cell falls into, and a plain-text rendering of
//! a store's weekly chart. Nothing here touches state.

use crate::{core::derive::WeekAggregate, entities::Store};
use std::fmt::{self, Write as _};

/// Colour band of a gross-margin percentage cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GmBand {
    /// 40% and above
    Success,
    /// 10% up to 40%
    Warning,
    /// Above 5% up to 10%
    Caution,
    /// 5% and below
    Danger,
}

impl GmBand {
    /// Classifies a GM% value.
    #[must_use]
    pub fn classify(gm_percentage: f64) -> Self {
        if gm_percentage >= 40.0 {
            Self::Success
        } else if gm_percentage >= 10.0 {
            Self::Warning
        } else if gm_percentage > 5.0 {
            Self::Caution
        } else {
            Self::Danger
        }
    }

    /// CSS class the grid applies to the cell.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "grid-cell-success",
            Self::Warning => "grid-cell-warning",
            Self::Caution => "grid-cell-caution",
            Self::Danger => "grid-cell-danger",
        }
    }
}

/// Formats a dollar amount with thousands separators, e.g. `-$1,234.50`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // Amounts that round to zero never get a sign
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Formats a percentage with one decimal, e.g. `58.3%`.
#[must_use]
pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.1}%")
}

/// Generates a text bar for a GM% value, e.g. `[██████░░░░]`.
///
/// The bar is clamped to 0-100%; negative margins render as an empty bar.
#[must_use]
pub fn format_margin_bar(gm_percentage: f64, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped = if gm_percentage.is_finite() {
        gm_percentage.clamp(0.0, 100.0)
    } else {
        0.0
    };

    // Cast safety: clamped ∈ [0, 100] and length is small, so the product fits.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((clamped / 100.0) * length as f64).round() as usize;
    let empty = length.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

/// Renders a store's weekly GM dollars and GM% as a text chart, one line per week.
///
/// # Errors
/// Returns [`fmt::Error`] if writing to the output buffer fails.
pub fn render_store_chart(
    store: &Store,
    aggregates: &[WeekAggregate],
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Store Performance: {} ({})", store.label, store.id)?;
    writeln!(out, "{:<5} {:>14} {:>8}", "Week", "GM Dollars", "GM %")?;

    for week in aggregates {
        writeln!(
            out,
            "{:<5} {:>14} {:>8} {}",
            week.week_id,
            format_currency(week.gm_dollars),
            format_percentage(week.gm_percentage),
            format_margin_bar(week.gm_percentage, Some(20)),
        )?;
    }

    let total_sales: f64 = aggregates.iter().map(|w| w.sales_dollars).sum();
    let total_gm: f64 = aggregates.iter().map(|w| w.gm_dollars).sum();
    writeln!(
        out,
        "{:<5} {:>14} {:>8}",
        "Total",
        format_currency(total_gm),
        format_percentage(crate::core::derive::gm_percentage(total_sales, total_gm)),
    )?;
    Ok(out)
}
