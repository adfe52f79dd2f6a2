//! Column summaries for terminal output.

use crate::resolve::{Column, ColumnMap};

/// Render a count with `,` between groups of three digits.
pub fn format_count(n: usize) -> String {
    let digits: Vec<char> = n.to_string().chars().collect();
    digits
        .rchunks(3)
        .rev()
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(",")
}

/// Render a value compactly: plain decimals without trailing zeros for
/// moderate magnitudes, scientific notation otherwise.
pub fn format_value(val: f64) -> String {
    if val.is_nan() {
        return "NaN".to_string();
    }
    if val.is_infinite() {
        return if val > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if val == 0.0 {
        return "0".to_string();
    }
    if (1e-3..1e5).contains(&val.abs()) {
        let fixed = format!("{:.6}", val);
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        format!("{:.3e}", val)
    }
}

fn describe(column: &Column) -> (String, String) {
    let shape = column
        .data
        .shape()
        .iter()
        .map(|d| format_count(*d))
        .collect::<Vec<_>>()
        .join("x");
    let range = column
        .min_max()
        .map(|(lo, hi)| format!("{} .. {}", format_value(lo), format_value(hi)))
        .unwrap_or_else(|| "-".to_string());
    (shape, range)
}

/// One line per column: name, shape and range of finite values.
pub fn summarize_columns(columns: &ColumnMap) -> String {
    let rows: Vec<(&str, String, String)> = columns
        .iter()
        .map(|c| {
            let (shape, range) = describe(c);
            (c.name.as_str(), shape, range)
        })
        .collect();
    let name_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(0);
    let shape_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(0);

    rows.iter()
        .map(|(name, shape, range)| {
            format!("{:<name_width$}  {:>shape_width$}  {}\n", name, shape, range)
        })
        .collect()
}
