use crate::error::{AiraError, Result};
use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

pub const MAPBIOMAS: &str = "MapBiomas";

/// A deforestation alert as returned by the MapBiomas Alerta API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: Option<serde_json::Value>,
    /// Kept as the JSON number so integer and float areas render as sent.
    pub geom_area_ha: serde_json::Number,
    pub date: String,
    pub biome: Option<String>,
    pub municipality: Option<String>,
    pub state: Option<String>,
    pub before_image_url: Option<String>,
    pub after_image_url: Option<String>,
}

/// Inclusive date range `[start, end]` sent to the alert API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// The window covering the `days` days before `today`, ending on `today`.
    ///
    /// Negative counts are accepted and produce a start after `today`.
    pub fn ending_on(today: NaiveDate, days: i64) -> Result<Self> {
        let offset = Days::new(days.unsigned_abs());
        let start = if days >= 0 {
            today.checked_sub_days(offset)
        } else {
            today.checked_add_days(offset)
        };

        let start = start.ok_or_else(|| {
            AiraError::Validation(format!("day count {} is out of range", days))
        })?;

        Ok(Self { start, end: today })
    }
}

/// GraphQL document requesting every alert inside `window`.
pub fn alerts_query(window: &DateWindow) -> String {
    format!(
        r#"{{
  alerts(startDate: "{start}", endDate: "{end}") {{
    id
    geomAreaHa
    date
    biome
    municipality
    state
    beforeImageUrl
    afterImageUrl
  }}
}}"#,
        start = window.start.format("%Y-%m-%d"),
        end = window.end.format("%Y-%m-%d"),
    )
}

/// Extract `data.alerts` from a GraphQL response body.
///
/// A missing or null path yields an empty list, unless the body also carries
/// GraphQL `errors`, in which case those messages become an upstream error.
/// Records lacking `date` or `geomAreaHa` fail the whole decode.
pub fn decode_alerts_response(body: serde_json::Value) -> Result<Vec<Alert>> {
    let errors: Vec<&str> = body
        .get("errors")
        .and_then(|e| e.as_array())
        .map(|errors| {
            errors
                .iter()
                .map(|err| {
                    err.get("message")
                        .and_then(|m| m.as_str())
                        .unwrap_or("unknown GraphQL error")
                })
                .collect()
        })
        .unwrap_or_default();
    for msg in &errors {
        log::warn!("MapBiomas GraphQL error: {}", msg);
    }

    let alerts = match body.pointer("/data/alerts") {
        None | Some(serde_json::Value::Null) if !errors.is_empty() => {
            return Err(AiraError::upstream(MAPBIOMAS, errors.join("; ")));
        }
        None | Some(serde_json::Value::Null) => return Ok(Vec::new()),
        Some(alerts) => alerts.clone(),
    };

    serde_json::from_value(alerts)
        .map_err(|e| AiraError::upstream(MAPBIOMAS, format!("malformed alert record: {}", e)))
}

/// Anything that can list alerts for a date window.
#[async_trait]
pub trait AlertSource: Send + Sync {
    async fn fetch_alerts(&self, window: &DateWindow) -> Result<Vec<Alert>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_seven_days() {
        let window = DateWindow::ending_on(day(2024, 3, 5), 7).unwrap();
        assert_eq!(window.start, day(2024, 2, 27));
        assert_eq!(window.end, day(2024, 3, 5));
    }

    #[test]
    fn test_window_zero_days() {
        let window = DateWindow::ending_on(day(2024, 3, 5), 0).unwrap();
        assert_eq!(window.start, window.end);
    }

    #[test]
    fn test_window_negative_days_moves_start_forward() {
        let window = DateWindow::ending_on(day(2024, 3, 5), -2).unwrap();
        assert_eq!(window.start, day(2024, 3, 7));
    }

    #[test]
    fn test_window_out_of_range() {
        let err = DateWindow::ending_on(day(2024, 3, 5), i64::MAX).unwrap_err();
        assert!(matches!(err, AiraError::Validation(_)));
    }

    #[test]
    fn test_query_contains_window_dates_and_fields() {
        let window = DateWindow::ending_on(day(2024, 3, 5), 7).unwrap();
        let query = alerts_query(&window);
        assert!(query.contains(r#"startDate: "2024-02-27""#));
        assert!(query.contains(r#"endDate: "2024-03-05""#));
        for field in [
            "id",
            "geomAreaHa",
            "date",
            "biome",
            "municipality",
            "state",
            "beforeImageUrl",
            "afterImageUrl",
        ] {
            assert!(query.contains(field), "missing field {}", field);
        }
    }

    #[test]
    fn test_decode_full_record() {
        let body = json!({
            "data": {
                "alerts": [{
                    "id": 1234,
                    "geomAreaHa": 12.5,
                    "date": "2024-03-01",
                    "biome": "Amazônia",
                    "municipality": "Altamira",
                    "state": "PA",
                    "beforeImageUrl": "https://example.org/before.png",
                    "afterImageUrl": "https://example.org/after.png"
                }]
            }
        });
        let alerts = decode_alerts_response(body).unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].geom_area_ha.as_f64(), Some(12.5));
        assert_eq!(alerts[0].municipality.as_deref(), Some("Altamira"));
        assert_eq!(alerts[0].id, Some(json!(1234)));
    }

    #[test]
    fn test_decode_missing_path_is_empty() {
        assert!(decode_alerts_response(json!({})).unwrap().is_empty());
        assert!(decode_alerts_response(json!({"data": null})).unwrap().is_empty());
        assert!(decode_alerts_response(json!({"data": {"alerts": null}}))
            .unwrap()
            .is_empty());
        assert!(decode_alerts_response(json!({"data": {"alerts": []}}))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_decode_null_optional_fields() {
        let body = json!({
            "data": {"alerts": [{"geomAreaHa": 3.0, "date": "2024-03-01", "state": null}]}
        });
        let alerts = decode_alerts_response(body).unwrap();
        assert_eq!(alerts[0].state, None);
        assert_eq!(alerts[0].municipality, None);
    }

    #[test]
    fn test_decode_missing_required_field_fails() {
        let body = json!({"data": {"alerts": [{"date": "2024-03-01"}]}});
        let err = decode_alerts_response(body).unwrap_err();
        assert!(err.is_upstream());
        assert!(err.to_string().contains("geomAreaHa"));
    }

    #[test]
    fn test_decode_errors_without_alerts_fail() {
        let body = json!({"errors": [{"message": "unauthorized"}], "data": null});
        let err = decode_alerts_response(body).unwrap_err();
        assert!(err.is_upstream());
        assert_eq!(err.to_string(), "MapBiomas error: unauthorized");

        let body = json!({
            "errors": [{"message": "bad startDate"}, {"locations": []}]
        });
        let err = decode_alerts_response(body).unwrap_err();
        assert!(err
            .to_string()
            .contains("bad startDate; unknown GraphQL error"));
    }

    #[test]
    fn test_decode_errors_alongside_alerts_keep_alerts() {
        let body = json!({
            "errors": [{"message": "partial result"}],
            "data": {"alerts": [{"geomAreaHa": 8, "date": "2024-03-01"}]}
        });
        let alerts = decode_alerts_response(body).unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].geom_area_ha.to_string(), "8");
    }
}
