//! Notion-backed record source. Queries one database per category,
//! sorted by the date property descending so the newest record leads.
//!
//! A fixture mode parses embedded response bodies so tests run without
//! sockets.

use std::collections::HashMap;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use metrics::{counter, histogram};
use serde::Deserialize;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::assets::Category;
use crate::config::DashboardConfig;
use crate::ingest::decode::date_property;
use crate::ingest::types::{MetricValue, RawMetricRecord, RecordSource};

const NOTION_API_BASE: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";
const QUERY_PAGE_SIZE: u32 = 30;

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    last_edited_time: Option<String>,
    #[serde(default)]
    properties: HashMap<String, serde_json::Value>,
}

fn parse_rfc3339_to_unix(ts: &str) -> u64 {
    OffsetDateTime::parse(ts, &Rfc3339)
        .ok()
        .map(|dt| dt.unix_timestamp())
        .and_then(|x| u64::try_from(x).ok())
        .unwrap_or(0)
}

pub struct NotionSource {
    mode: Mode,
}

enum Mode {
    Http {
        token: String,
        database_ids: HashMap<Category, String>,
        client: reqwest::Client,
    },
    /// Raw query-response bodies per category, for offline tests.
    Fixture(HashMap<Category, String>),
}

impl NotionSource {
    /// Build an HTTP-backed source from configuration. Returns `None`
    /// when the token or any database id is missing; the caller then
    /// runs in offline/fallback mode instead of retrying doomed calls.
    pub fn from_config(cfg: &DashboardConfig) -> Option<Self> {
        let token = cfg.notion_token.clone()?;
        let mut database_ids = HashMap::new();
        for category in Category::ALL {
            database_ids.insert(category, cfg.database_id(category)?.to_string());
        }
        Some(Self {
            mode: Mode::Http {
                token,
                database_ids,
                client: reqwest::Client::new(),
            },
        })
    }

    pub fn from_fixtures(bodies: HashMap<Category, String>) -> Self {
        Self {
            mode: Mode::Fixture(bodies),
        }
    }

    /// Parse a database-query response body into records, newest first
    /// (the query asks for a descending date sort, so response order is
    /// preserved as-is).
    fn parse_records(body: &str) -> Result<Vec<RawMetricRecord>> {
        let t0 = std::time::Instant::now();
        let resp: QueryResponse = serde_json::from_str(body).context("parsing notion query response")?;

        let mut out = Vec::with_capacity(resp.results.len());
        for page in resp.results {
            let mut properties = HashMap::new();
            for (name, value) in page.properties {
                if let Some(v) = metric_value(&value) {
                    properties.insert(name, v);
                }
            }
            out.push(RawMetricRecord {
                recorded_at: page
                    .last_edited_time
                    .as_deref()
                    .map(parse_rfc3339_to_unix)
                    .unwrap_or(0),
                properties,
            });
        }

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        histogram!("dashboard_parse_ms").record(ms);
        counter!("dashboard_records_total").increment(out.len() as u64);
        Ok(out)
    }
}

/// Extract the value kinds the scoring pipeline understands: `number`
/// properties and `select` labels. Everything else is skipped, which
/// downstream reads as "absent, use the default".
fn metric_value(property: &serde_json::Value) -> Option<MetricValue> {
    if let Some(n) = property.get("number").and_then(|v| v.as_f64()) {
        return Some(MetricValue::Number(n));
    }
    if let Some(name) = property
        .get("select")
        .and_then(|s| s.get("name"))
        .and_then(|v| v.as_str())
    {
        return Some(MetricValue::Label(name.to_string()));
    }
    None
}

#[async_trait]
impl RecordSource for NotionSource {
    async fn fetch_latest(&self, category: Category) -> Result<Vec<RawMetricRecord>> {
        match &self.mode {
            Mode::Fixture(bodies) => {
                let body = bodies
                    .get(&category)
                    .ok_or_else(|| anyhow!("no fixture for category {}", category.name()))?;
                Self::parse_records(body)
            }

            Mode::Http {
                token,
                database_ids,
                client,
            } => {
                let db_id = database_ids
                    .get(&category)
                    .ok_or_else(|| anyhow!("no database id for category {}", category.name()))?;
                let url = format!("{NOTION_API_BASE}/databases/{db_id}/query");
                let payload = serde_json::json!({
                    "sorts": [{ "property": date_property(category), "direction": "descending" }],
                    "page_size": QUERY_PAGE_SIZE,
                });

                let resp = match client
                    .post(&url)
                    .bearer_auth(token)
                    .header("Notion-Version", NOTION_VERSION)
                    .json(&payload)
                    .send()
                    .await
                {
                    Ok(resp) => resp,
                    Err(e) => {
                        tracing::warn!(error = ?e, category = category.name(), "notion http error");
                        counter!("dashboard_retrieval_errors_total").increment(1);
                        return Err(e).context("notion query send()");
                    }
                };

                let status = resp.status();
                let body = resp.text().await.context("notion query .text()")?;
                if !status.is_success() {
                    counter!("dashboard_retrieval_errors_total").increment(1);
                    return Err(anyhow!(
                        "notion query for {} failed with status {status}",
                        category.name()
                    ));
                }
                Self::parse_records(&body)
            }
        }
    }

    fn name(&self) -> &'static str {
        "notion"
    }
}
