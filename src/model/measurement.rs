use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One committed sensor reading. The device submits every value as text and it
/// is stored that way; numeric interpretation only happens when aggregating.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub id: i64,
    pub humidity: String,
    pub temperature: String,
    pub perceived_temperature: String,
    //Local calendar date of the submission, time of day truncated
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_plain_date() {
        let measurement = Measurement {
            id: 3,
            humidity: "60".to_string(),
            temperature: "22".to_string(),
            perceived_temperature: "21".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };

        let json = serde_json::to_string(&measurement).unwrap();

        assert!(json.contains("\"perceived_temperature\":\"21\""));
        assert!(json.contains("\"date\":\"2024-01-01\""));

        let back: Measurement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, measurement);
    }
}
