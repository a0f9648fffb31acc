//! Logbook entry model and measurement kinds.

use serde::{Deserialize, Serialize};

use crate::dial::Range;

/// A single health-measurement record as returned by the remote logbook.
///
/// The shape is owned by the backend; this client only deserializes it.
/// Optional fields may be `null` or missing entirely, and unknown fields are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LogEntry {
    /// Backend-assigned identifier.
    pub id: String,
    /// Creation time, as the backend formats it.
    pub timestamp: String,
    /// Measurement type tag, e.g. `body_temperature`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Primary reading.
    #[serde(default)]
    pub value_1: Option<f64>,
    /// Unit of the primary reading.
    #[serde(default)]
    pub unit_1: Option<String>,
    /// Secondary reading (e.g. diastolic pressure).
    #[serde(default)]
    pub value_2: Option<f64>,
    /// Unit of the secondary reading.
    #[serde(default)]
    pub unit_2: Option<String>,
    /// Free-form note attached to the entry.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Envelope for `GET /api/logs`.
#[derive(Debug, Deserialize)]
pub struct LogsResponse {
    /// The fetched entries.
    pub data: Vec<LogEntry>,
}

/// Body for `POST /api/logs`.
#[derive(Debug, Clone, Serialize)]
pub struct NewLogEntry {
    /// Measurement type tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// Primary reading.
    pub value_1: f64,
    /// Unit of the primary reading.
    pub unit_1: String,
    /// Secondary reading, omitted from the body when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_2: Option<f64>,
    /// Unit of the secondary reading, omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_2: Option<String>,
}

impl NewLogEntry {
    /// Compose a single-value entry for a measurement kind.
    pub fn single(kind: MeasurementKind, value: f32) -> Self {
        Self {
            kind: kind.api_type().to_string(),
            value_1: f64::from(value),
            unit_1: kind.unit().to_string(),
            value_2: None,
            unit_2: None,
        }
    }
}

/// The measurement types offered on the home menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementKind {
    /// Body temperature in °C.
    BodyTemperature,
    /// Blood pressure in mmHg (systolic/diastolic).
    BloodPressure,
    /// Blood sugar in mg/dL.
    BloodSugar,
    /// Urine strip test.
    UrineTest,
}

impl MeasurementKind {
    /// All kinds, in home-menu order.
    pub const ALL: [MeasurementKind; 4] = [
        MeasurementKind::BodyTemperature,
        MeasurementKind::BloodPressure,
        MeasurementKind::BloodSugar,
        MeasurementKind::UrineTest,
    ];

    /// Human-readable menu label.
    pub fn label(&self) -> &'static str {
        match self {
            MeasurementKind::BodyTemperature => "Body Temperature",
            MeasurementKind::BloodPressure => "Blood Pressure",
            MeasurementKind::BloodSugar => "Blood Sugar",
            MeasurementKind::UrineTest => "Urine Strip Test",
        }
    }

    /// Wire value for the `type` field.
    pub fn api_type(&self) -> &'static str {
        match self {
            MeasurementKind::BodyTemperature => "body_temperature",
            MeasurementKind::BloodPressure => "blood_pressure",
            MeasurementKind::BloodSugar => "blood_sugar",
            MeasurementKind::UrineTest => "urine_test",
        }
    }

    /// Unit of the primary reading.
    pub fn unit(&self) -> &'static str {
        match self {
            MeasurementKind::BodyTemperature => "°C",
            MeasurementKind::BloodPressure => "mmHg",
            MeasurementKind::BloodSugar => "mg/dL",
            MeasurementKind::UrineTest => "",
        }
    }

    /// Dial configuration for kinds entered through the dial widget: the
    /// value range and the reading shown before the user touches anything.
    ///
    /// Kinds without a dial configuration have no entry screen.
    pub fn dial_entry(&self) -> Option<(Range, f32)> {
        match self {
            MeasurementKind::BodyTemperature => {
                Range::new(35.0, 42.0).ok().map(|range| (range, 36.6))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry_deserialize() {
        let json = r#"{
            "id": "42",
            "timestamp": "2026-08-01T09:15:00Z",
            "type": "body_temperature",
            "value_1": 36.6,
            "unit_1": "°C",
            "value_2": null,
            "unit_2": null,
            "notes": null
        }"#;

        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "42");
        assert_eq!(entry.kind, "body_temperature");
        assert!((entry.value_1.unwrap() - 36.6).abs() < 1e-9);
        assert_eq!(entry.unit_1.as_deref(), Some("°C"));
        assert!(entry.value_2.is_none());
        assert!(entry.notes.is_none());
    }

    #[test]
    fn test_log_entry_tolerates_absent_and_extra_fields() {
        // The backend may omit optional fields entirely and add new ones.
        let json = r#"{
            "id": "7",
            "timestamp": "2026-08-01T10:00:00Z",
            "type": "blood_pressure",
            "value_1": 120,
            "unit_1": "mmHg",
            "value_2": 80,
            "unit_2": "mmHg",
            "created_by": "mobile-app"
        }"#;

        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.value_2, Some(80.0));
        assert_eq!(entry.unit_2.as_deref(), Some("mmHg"));
        assert!(entry.notes.is_none());
    }

    #[test]
    fn test_logs_response_empty_data() {
        let response: LogsResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_new_entry_serializes_wire_shape() {
        let entry = NewLogEntry::single(MeasurementKind::BodyTemperature, 36.6);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["type"], "body_temperature");
        assert_eq!(json["unit_1"], "°C");
        assert!((json["value_1"].as_f64().unwrap() - 36.6).abs() < 1e-5);
        // Absent secondary reading must not appear in the body at all.
        assert!(json.get("value_2").is_none());
        assert!(json.get("unit_2").is_none());
    }

    #[test]
    fn test_dial_entry_only_for_temperature() {
        let (range, initial) = MeasurementKind::BodyTemperature.dial_entry().unwrap();
        assert_eq!(range.min(), 35.0);
        assert_eq!(range.max(), 42.0);
        assert_eq!(initial, 36.6);

        assert!(MeasurementKind::BloodPressure.dial_entry().is_none());
        assert!(MeasurementKind::UrineTest.dial_entry().is_none());
    }
}
