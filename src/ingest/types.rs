// src/ingest/types.rs
use std::collections::HashMap;

use anyhow::Result;

use crate::assets::Category;

/// One property value as stored in the external database. Numeric
/// metrics arrive as numbers, self-ratings on a small vocabulary arrive
/// as select labels.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Label(String),
}

/// One reporting period (typically one day) for one category, keyed by
/// the store's property names. Immutable once retrieved.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RawMetricRecord {
    /// Unix seconds of the record's last edit; 0 when unknown.
    pub recorded_at: u64,
    pub properties: HashMap<String, MetricValue>,
}

impl RawMetricRecord {
    pub fn empty() -> Self {
        Self {
            recorded_at: 0,
            properties: HashMap::new(),
        }
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.properties.get(key) {
            Some(MetricValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        match self.properties.get(key) {
            Some(MetricValue::Label(s)) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Source of raw category records. Implementations return records
/// most-recent-first; the pipeline only reads the head of the list.
#[async_trait::async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_latest(&self, category: Category) -> Result<Vec<RawMetricRecord>>;
    fn name(&self) -> &'static str;
}
