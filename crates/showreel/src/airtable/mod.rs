pub mod cache;

use crate::prelude::*;
use log::warn;
use serde::Deserialize;
use showreel_core::content::Record;
use showreel_core::labels::{build_skills_data, fallback_skills_data, SkillRecord, SkillsData};

/// Base URL of the upstream tabular data store.
pub const API_BASE: &str = "https://api.airtable.com/v0";

/// Airtable configuration from environment variables
#[derive(Debug, Clone)]
pub struct AirtableConfig {
    pub base_id: String,
    pub token: String,
    pub table_name: String,
    pub skills_table: String,
}

impl AirtableConfig {
    /// Load configuration from environment variables.
    /// Uses AIRTABLE_TOKEN if set, otherwise falls back to AIRTABLE_API_KEY.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("AIRTABLE_TOKEN")
            .or_else(|_| std::env::var("AIRTABLE_API_KEY"))
            .map_err(|_| {
                eyre!("Neither AIRTABLE_TOKEN nor AIRTABLE_API_KEY environment variable is set")
            })?;

        Ok(Self {
            base_id: std::env::var("AIRTABLE_BASE_ID")
                .map_err(|_| eyre!("AIRTABLE_BASE_ID environment variable not set"))?,
            token,
            table_name: std::env::var("AIRTABLE_TABLE_NAME")
                .unwrap_or_else(|_| "Experiences".to_string()),
            skills_table: std::env::var("AIRTABLE_SKILLS_TABLE")
                .unwrap_or_else(|_| "Skills".to_string()),
        })
    }
}

/// Create an HTTP client with Bearer auth headers for the upstream store.
pub fn create_authenticated_client(config: &AirtableConfig) -> Result<reqwest::Client> {
    use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&f!("Bearer {}", config.token))
            .map_err(|e| eyre!("Invalid header value: {}", e))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}

/// JSON envelope every table endpoint responds with.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    records: Vec<T>,
}

/// Fetch every row of one table, parsed into the given record type.
pub async fn fetch_table<T: serde::de::DeserializeOwned>(
    config: &AirtableConfig,
    table: &str,
) -> Result<Vec<T>> {
    let client = create_authenticated_client(config)?;
    let url = f!("{API_BASE}/{}/{}", config.base_id, urlencoding::encode(table));

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| eyre!("Failed to send request to Airtable: {}", e))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(eyre!("Airtable API error [{}]: {}", status, body));
    }

    let envelope: Envelope<T> = response
        .json()
        .await
        .map_err(|e| eyre!("Failed to parse Airtable response: {}", e))?;

    Ok(envelope.records)
}

/// Source of last-resort records used when the upstream store cannot be
/// reached. Injected so tests can substitute fixtures for the built-in
/// placeholder data.
pub trait RecordSource: Send + Sync {
    fn records(&self) -> Vec<Record>;
}

/// Fetch the experiences table, surfacing every failure to the caller.
pub async fn try_fetch_records() -> Result<Vec<Record>> {
    let config = AirtableConfig::from_env()?;
    fetch_table(&config, &config.table_name).await
}

/// Fetch the experiences table, degrading to the fallback source on any
/// failure (missing configuration, transport error, non-2xx, bad payload).
pub async fn fetch_records(fallback: &dyn RecordSource) -> Vec<Record> {
    match try_fetch_records().await {
        Ok(records) => records,
        Err(err) => {
            warn!("Airtable fetch failed, using fallback data: {err}");
            fallback.records()
        }
    }
}

/// Fetch the skills table and build the skills lookup, surfacing failures.
pub async fn try_fetch_skills() -> Result<SkillsData> {
    let config = AirtableConfig::from_env()?;
    let records: Vec<SkillRecord> = fetch_table(&config, &config.skills_table).await?;
    Ok(build_skills_data(&records))
}

/// Fetch the skills lookup, degrading to the built-in category table.
pub async fn fetch_skills() -> SkillsData {
    match try_fetch_skills().await {
        Ok(data) => data,
        Err(err) => {
            warn!("Skills fetch failed, using built-in categories: {err}");
            fallback_skills_data()
        }
    }
}
