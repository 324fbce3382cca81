use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

use crate::{
    consts::consts::RecordId,
    error::{ClientError, ClientResult},
    model::record::MissingPersonRecord,
    options::ClientOptions,
};

const USER_AGENT_VALUE: &str = concat!("missing-persons/", env!("CARGO_PKG_VERSION"));

/// Backend calls the controller depends on. The HTTP implementation is [`HttpRecordApi`].
///
/// Futures are not required to be `Send`: the controller lives on a single-threaded runtime.
#[async_trait(?Send)]
pub trait RecordApi {
    /// Reads the full collection
    async fn fetch_records(&self) -> ClientResult<Vec<MissingPersonRecord>>;

    /// Asks the backend to mark one record as found, the response body is ignored
    async fn mark_found(&self, id: &RecordId) -> ClientResult<()>;
}

#[derive(Debug, Clone)]
pub struct HttpRecordApi {
    client: reqwest::Client,
    options: ClientOptions,
}

impl HttpRecordApi {
    pub fn new(options: ClientOptions) -> Result<Self, reqwest::Error> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .default_headers(default_headers)
            .build()?;

        Ok(Self { client, options })
    }
}

#[async_trait(?Send)]
impl RecordApi for HttpRecordApi {
    #[tracing::instrument(skip(self))]
    async fn fetch_records(&self) -> ClientResult<Vec<MissingPersonRecord>> {
        let url = self.options.records_url();
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::NetworkFailure {
                message: e.to_string(),
            })?;

        let status = response.status();

        if !status.is_success() {
            return Err(ClientError::FetchFailure {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::NetworkFailure {
                message: e.to_string(),
            })?;

        serde_json::from_slice(&body).map_err(|e| ClientError::MalformedResponse {
            message: e.to_string(),
        })
    }

    #[tracing::instrument(skip(self))]
    async fn mark_found(&self, id: &RecordId) -> ClientResult<()> {
        let url = self.options.mark_found_url(id);
        log::debug!("POST {}", url);

        let response = self.client.post(&url).send().await.map_err(|e| {
            ClientError::WriteNetworkFailure {
                message: e.to_string(),
            }
        })?;

        let status = response.status();

        if !status.is_success() {
            return Err(ClientError::WriteFailure {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
