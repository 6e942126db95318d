//! Google Sheets values API client.
//!
//! Only the two calls the verification command needs are implemented: reading a range and
//! overwriting a range. Requests authenticate with a bearer token minted from a service
//! account key; the authenticator is built on first use so a missing key file surfaces as a
//! command failure rather than a startup failure.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use url::Url;
use yup_oauth2::{authenticator::DefaultAuthenticator, ServiceAccountAuthenticator};

use crate::error::{sheets::SheetsError, AppError};

const SHEETS_API_URL: &str = "https://sheets.googleapis.com/";
const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

/// Read/write access to one spreadsheet.
#[async_trait]
pub trait SheetStore: Send + Sync {
    /// Reads a range in row-major order. Trailing empty rows are not returned.
    async fn read_range(&self, range: &str) -> Result<Vec<Vec<String>>, AppError>;

    /// Overwrites a single-row range, letting the sheet interpret values as if typed in.
    async fn write_row(&self, range: &str, values: Vec<String>) -> Result<(), AppError>;
}

/// Body of the values endpoints.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    major_dimension: Option<String>,
    #[serde(default)]
    values: Vec<Vec<String>>,
}

pub struct GoogleSheetsClient {
    http: reqwest::Client,
    base_url: Url,
    spreadsheet_id: String,
    service_account_file: PathBuf,
    authenticator: OnceCell<DefaultAuthenticator>,
}

impl GoogleSheetsClient {
    /// Creates a client for one spreadsheet.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `spreadsheet_id` - ID from the spreadsheet URL
    /// - `service_account_file` - Path to the service account JSON key
    pub fn new(
        http: reqwest::Client,
        spreadsheet_id: String,
        service_account_file: PathBuf,
    ) -> Result<Self, AppError> {
        let base_url =
            Url::parse(SHEETS_API_URL).map_err(|e| SheetsError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            spreadsheet_id,
            service_account_file,
            authenticator: OnceCell::new(),
        })
    }

    async fn access_token(&self) -> Result<String, AppError> {
        let authenticator = self
            .authenticator
            .get_or_try_init(|| async {
                let key = yup_oauth2::read_service_account_key(&self.service_account_file)
                    .await
                    .map_err(SheetsError::KeyFile)?;

                ServiceAccountAuthenticator::builder(key)
                    .build()
                    .await
                    .map_err(SheetsError::KeyFile)
            })
            .await?;

        let token = authenticator
            .token(&[SHEETS_SCOPE])
            .await
            .map_err(SheetsError::from)?;

        token
            .token()
            .map(str::to_string)
            .ok_or_else(|| SheetsError::MissingAccessToken.into())
    }

    /// `{base}/v4/spreadsheets/{id}/values/{range}`
    fn values_url(&self, range: &str) -> Result<Url, AppError> {
        values_url(&self.base_url, &self.spreadsheet_id, range)
    }
}

fn values_url(base_url: &Url, spreadsheet_id: &str, range: &str) -> Result<Url, AppError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| SheetsError::InvalidUrl(base_url.to_string()))?
        .pop_if_empty()
        .extend(["v4", "spreadsheets", spreadsheet_id, "values", range]);

    Ok(url)
}

/// Maps non-success responses to `SheetsError::Api`, keeping the body for the log.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(SheetsError::Api {
        status: status.as_u16(),
        body,
    }
    .into())
}

#[async_trait]
impl SheetStore for GoogleSheetsClient {
    async fn read_range(&self, range: &str) -> Result<Vec<Vec<String>>, AppError> {
        let token = self.access_token().await?;
        let url = self.values_url(range)?;

        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(SheetsError::from)?;

        let body: ValueRange = check_status(response)
            .await?
            .json()
            .await
            .map_err(SheetsError::from)?;

        tracing::debug!("Read {} rows from range {}", body.values.len(), range);

        Ok(body.values)
    }

    async fn write_row(&self, range: &str, values: Vec<String>) -> Result<(), AppError> {
        let token = self.access_token().await?;
        let mut url = self.values_url(range)?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", "USER_ENTERED");

        let body = ValueRange {
            range: Some(range.to_string()),
            major_dimension: Some("ROWS".to_string()),
            values: vec![values],
        };

        let response = self
            .http
            .put(url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(SheetsError::from)?;

        check_status(response).await?;

        tracing::debug!("Wrote range {}", range);

        Ok(())
    }
}
