use crate::alerts::Alert;
use serde_json::Number;

/// Summary text used when the window holds no alerts.
pub const NO_ALERTS: &str = "Nenhum alerta encontrado no período.";

const UNKNOWN: &str = "?";

/// Render alerts as one `- {date}: {area} ha em {municipality}/{state} ({biome})` line each.
pub fn summarize_alerts(alerts: &[Alert]) -> String {
    if alerts.is_empty() {
        return NO_ALERTS.to_string();
    }

    alerts
        .iter()
        .map(summary_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn summary_line(alert: &Alert) -> String {
    format!(
        "- {}: {} ha em {}/{} ({})",
        alert.date,
        format_area(&alert.geom_area_ha),
        alert.municipality.as_deref().unwrap_or(UNKNOWN),
        alert.state.as_deref().unwrap_or(UNKNOWN),
        alert.biome.as_deref().unwrap_or(UNKNOWN),
    )
}

/// Integers print as sent (`8`). Floats always carry a fraction (`8.0`) and
/// switch to exponent form below `1e-4` or from `1e16` up (`1e-05`, `1.5e+20`).
fn format_area(area: &Number) -> String {
    match area.as_f64() {
        Some(value) if area.is_f64() => format_float(value),
        _ => area.to_string(),
    }
}

fn format_float(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if (-4..16).contains(&exponent) {
        let fixed = value.to_string();
        if fixed.contains('.') {
            fixed
        } else {
            format!("{}.0", fixed)
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
    }
}
