use anyhow::{Context, Result};
use ndarray::Array1;

/// Parse a comma or whitespace separated list of numbers.
pub fn parse_values(input: &str) -> Result<Array1<f64>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .with_context(|| format!("Invalid number in --values: '{}'", s))
        })
        .collect::<Result<Vec<f64>>>()
        .map(Array1::from)
}

/// Format a float sequence the way the drills print results.
pub fn format_values(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{:.6}", v)).collect();
    format!("[{}]", parts.join(", "))
}
