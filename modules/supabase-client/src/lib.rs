pub mod error;

pub use error::{Result, SupabaseError};

use serde::Deserialize;

use enrol_common::EnrolmentRecord;

/// Table enrolment rows are inserted into.
const ENROLMENTS_TABLE: &str = "enrolments";

pub struct SupabaseClient {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

/// Error body PostgREST returns on failed requests.
#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl SupabaseClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    /// Insert one enrolment row. The store owns schema, auth policy, and
    /// row identity; this is a fire-and-forget write with no retries.
    pub async fn insert_enrolment(&self, record: &EnrolmentRecord) -> Result<()> {
        let url = format!("{}/rest/v1/{}", self.base_url, ENROLMENTS_TABLE);
        let resp = self
            .client
            .post(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=minimal")
            .json(&[record])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SupabaseError::Api {
                status: status.as_u16(),
                message: api_message(&body),
            });
        }

        tracing::info!(table = ENROLMENTS_TABLE, "Enrolment row inserted");
        Ok(())
    }
}

/// Pull the human-readable message out of a PostgREST error body,
/// falling back to the raw body when it is not the expected JSON shape.
fn api_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_postgrest_message() {
        let body = r#"{"code":"23505","message":"duplicate key value violates unique constraint","details":null}"#;
        assert_eq!(
            api_message(body),
            "duplicate key value violates unique constraint"
        );
    }

    #[test]
    fn falls_back_to_raw_body() {
        assert_eq!(api_message("upstream timeout"), "upstream timeout");
        assert_eq!(api_message(""), "");
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = SupabaseClient::new("https://example.supabase.co/", "key");
        assert_eq!(client.base_url, "https://example.supabase.co");
    }
}
