//! Output formatting utilities

use crate::application::DischargeCalculation;
use crate::error::Result;

/// Format a calculation for display, dates rendered with `date_format`
pub fn format_calculation(result: &DischargeCalculation, date_format: &str) -> Result<String> {
    let rows = [
        ("Sentence date", result.start.format(date_format)?),
        ("Sentence", result.duration.to_string()),
        ("Latest possible discharge", result.lpd.format(date_format)?),
        (
            "Remission",
            format!("{} ({})", result.remission, result.tier),
        ),
        ("Earliest possible discharge", result.epd.format(date_format)?),
    ];

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;

    let mut output = String::new();
    for (label, value) in rows {
        output.push_str(&format!("{:<width$} {}\n", format!("{}:", label), value));
    }
    Ok(output)
}

/// Format a calculation as pretty JSON
pub fn format_json(result: &DischargeCalculation) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
