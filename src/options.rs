use std::time::Duration;

use crate::consts::consts::{
    RecordId, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MARK_FOUND_PATH, RECORDS_PATH,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ClientOptions {
    pub base_url: String,
    pub timeout: Duration,
    pub records_path: String,
    pub mark_found_path: String,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl ClientOptions {
    /// Scheme, host and port of the backend. A trailing `/` is dropped.
    pub fn set_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn set_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn set_records_path(mut self, records_path: impl Into<String>) -> Self {
        self.records_path = records_path.into();
        self
    }

    pub fn set_mark_found_path(mut self, mark_found_path: impl Into<String>) -> Self {
        self.mark_found_path = mark_found_path.into();
        self
    }

    pub fn records_url(&self) -> String {
        format!("{}{}", self.base_url, self.records_path)
    }

    pub fn mark_found_url(&self, id: &RecordId) -> String {
        format!("{}{}/{}", self.base_url, self.mark_found_path, id)
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            records_path: RECORDS_PATH.to_string(),
            mark_found_path: MARK_FOUND_PATH.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_urls_point_at_local_backend() {
        let options = ClientOptions::default();

        assert_eq!(options.records_url(), "http://127.0.0.1:5000/api/dados");
        assert_eq!(
            options.mark_found_url(&RecordId::from("007")),
            "http://127.0.0.1:5000/marcar_encontrada/007"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let options = ClientOptions::default().set_base_url("http://localhost:8080/");

        assert_eq!(options.records_url(), "http://localhost:8080/api/dados");
    }

    #[test]
    fn paths_can_be_overridden() {
        let options = ClientOptions::default()
            .set_records_path("/registros")
            .set_mark_found_path("/encontrada");

        assert_eq!(options.records_url(), "http://127.0.0.1:5000/registros");
        assert_eq!(
            options.mark_found_url(&RecordId::from("001")),
            "http://127.0.0.1:5000/encontrada/001"
        );
    }
}
