use crate::domain::models::JsonOut;
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(json: bool, data: T, row: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// First 10 normalized values, 6 decimal places, comma-joined.
pub fn format_preview(values: &[f64]) -> String {
    values
        .iter()
        .take(10)
        .map(|v| format!("{v:.6}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_is_capped_and_six_decimal() {
        let values: Vec<f64> = (0..12).map(|v| v as f64 / 65535.0).collect();
        let preview = format_preview(&values);
        assert_eq!(preview.split(", ").count(), 10);
        assert!(preview.starts_with("0.000000, 0.000015"));
    }

    #[test]
    fn empty_values_render_empty_preview() {
        assert_eq!(format_preview(&[]), "");
    }
}
