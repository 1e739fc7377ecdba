//! Field sensors and dashboard alerts.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Record;

labeled_enum! {
    /// What a sensor measures.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
    #[ts(export)]
    #[serde(rename_all = "snake_case")]
    pub enum SensorType("sensor type") {
        Temperature => "temperature",
        Humidity => "humidity",
        SoilMoisture => "soil_moisture",
        Ph => "ph",
        Light => "light",
        Rainfall => "rainfall",
    }
}

labeled_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
    #[ts(export)]
    #[serde(rename_all = "snake_case")]
    pub enum SensorStatus("sensor status") {
        Active => "active",
        Inactive => "inactive",
        Maintenance => "maintenance",
    }
}

labeled_enum! {
    /// Source of an alert.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
    #[ts(export)]
    #[serde(rename_all = "snake_case")]
    pub enum AlertType("alert type") {
        Weather => "weather",
        Inventory => "inventory",
        Pest => "pest",
        System => "system",
        Financial => "financial",
    }
}

labeled_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
    #[ts(export)]
    #[serde(rename_all = "snake_case")]
    pub enum AlertSeverity("alert severity") {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
}

/// An installed field sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Sensor {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SensorType,
    pub location: String,
    /// Weak reference to a farmer id.
    pub farmer_id: String,
    pub field_name: String,
    pub status: SensorStatus,
    /// Battery percentage, absent for mains-powered sensors.
    #[serde(default)]
    pub battery_level: Option<u8>,
    #[ts(as = "String")]
    pub last_reading: DateTime<Utc>,
    #[ts(as = "String")]
    pub installed_date: NaiveDate,
}

impl Sensor {
    /// Returns true if the battery is known and at or below `threshold` percent.
    pub fn battery_low(&self, threshold: u8) -> bool {
        self.battery_level.map_or(false, |level| level <= threshold)
    }
}

/// A dashboard notification.
///
/// Alerts are never deleted; dismissing one stamps `dismissed_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AlertType,
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub read_at: Option<DateTime<Utc>>,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub dismissed_at: Option<DateTime<Utc>>,
    pub action_required: bool,
    #[serde(default)]
    pub action_url: Option<String>,
}

impl Alert {
    /// Returns true until the alert has been dismissed.
    pub fn is_open(&self) -> bool {
        self.dismissed_at.is_none()
    }

    /// Stamps the dismissal time.
    ///
    /// Dismissing twice moves the timestamp forward; the alert stays dismissed.
    pub fn dismiss(&mut self, at: DateTime<Utc>) {
        self.dismissed_at = Some(at);
    }
}

impl Record for Sensor {
    const ENTITY: &'static str = "Sensor";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Alert {
    const ENTITY: &'static str = "Alert";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn rain_warning() -> Alert {
        Alert {
            id: "1".to_string(),
            kind: AlertType::Weather,
            severity: AlertSeverity::Medium,
            title: "Heavy Rainfall Warning".to_string(),
            message: "Heavy rainfall expected in next 48 hours.".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 16, 8, 0, 0).unwrap(),
            read_at: None,
            dismissed_at: None,
            action_required: true,
            action_url: Some("/weather-alerts".to_string()),
        }
    }

    #[test]
    fn test_dismiss_closes_alert() {
        let mut alert = rain_warning();
        assert!(alert.is_open());

        let at = Utc.with_ymd_and_hms(2024, 1, 16, 9, 0, 0).unwrap();
        alert.dismiss(at);

        assert!(!alert.is_open());
        assert_eq!(alert.dismissed_at, Some(at));
    }

    #[test]
    fn test_alert_json_shape() {
        let json = serde_json::to_value(rain_warning()).unwrap();
        assert_eq!(json["type"], "weather");
        assert_eq!(json["actionRequired"], true);
        assert_eq!(json["createdAt"], "2024-01-16T08:00:00Z");
    }

    #[test]
    fn test_severity_orders_by_urgency() {
        assert!(AlertSeverity::Critical > AlertSeverity::High);
        assert!(AlertSeverity::Low < AlertSeverity::Medium);
    }

    #[test]
    fn test_sensor_type_label() {
        assert_eq!(SensorType::SoilMoisture.as_str(), "soil_moisture");
        assert_eq!("PH".parse::<SensorType>().unwrap(), SensorType::Ph);
    }
}
