use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use quire_types::{DocumentStatistics, LayoutConfig};
use serde::{Deserialize, Deserializer, Serialize};

/// Audit trail of one optimization pass: what was measured, what changed, and the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRecord {
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "document_stats")]
    pub stats: DocumentStatistics,
    #[serde(rename = "optimizations")]
    pub adjustments: Vec<String>,
    #[serde(rename = "final_config")]
    pub config: LayoutConfig,
}

impl OptimizationRecord {
    pub fn new(stats: DocumentStatistics, adjustments: Vec<String>, config: LayoutConfig) -> Self {
        Self {
            timestamp: Utc::now(),
            stats,
            adjustments,
            config,
        }
    }
}

/// Reads an RFC 3339 timestamp, or a naive ISO one taken as local time.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    if let Ok(stamp) = DateTime::parse_from_rfc3339(&text) {
        return Ok(stamp.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|e| serde::de::Error::custom(format!("Invalid timestamp '{}': {}", text, e)))?;
    Ok(Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        // Skipped by a DST jump; UTC is the closest reading.
        .unwrap_or_else(|| naive.and_utc()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_json(timestamp: &str) -> serde_json::Value {
        json!({
            "timestamp": timestamp,
            "document_stats": DocumentStatistics::default(),
            "optimizations": ["Reduced table font size for wide tables"],
            "final_config": LayoutConfig::default(),
        })
    }

    #[test]
    fn test_rfc3339_timestamp_round_trips() {
        let record = OptimizationRecord::new(DocumentStatistics::default(), vec![], LayoutConfig::default());
        let text = serde_json::to_string(&record).unwrap();
        let back: OptimizationRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_naive_timestamp_is_read_as_local_time() {
        let record: OptimizationRecord =
            serde_json::from_value(record_json("2025-03-09T14:05:07.123456")).unwrap();
        let expected =
            NaiveDateTime::parse_from_str("2025-03-09T14:05:07.123456", "%Y-%m-%dT%H:%M:%S%.f").unwrap();
        assert_eq!(record.timestamp.with_timezone(&Local).naive_local(), expected);
        assert_eq!(record.adjustments.len(), 1);
    }

    #[test]
    fn test_garbage_timestamp_is_rejected() {
        let result: Result<OptimizationRecord, _> = serde_json::from_value(record_json("yesterday"));
        assert!(result.is_err());
    }
}
