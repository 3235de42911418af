//! HTTP client abstraction for testability

use super::types::CatalogError;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Trait for asynchronous HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait AsyncHttpClient: Send + Sync {
    /// Performs an async HTTP POST request with a form-encoded body.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    /// * `params` - Form fields; a name may repeat to send multiple values
    ///
    /// # Returns
    ///
    /// The response body as bytes or an error.
    fn post_form(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> impl Future<Output = Result<Vec<u8>, CatalogError>> + Send;
}

/// User-Agent sent with every catalog request.
const DEFAULT_USER_AGENT: &str = concat!("scenegate/", env!("CARGO_PKG_VERSION"));

/// Async HTTP client implementation using reqwest.
///
/// Cloning is cheap and shares the underlying connection pool, so one
/// client can serve any number of concurrent validations.
#[derive(Clone)]
pub struct AsyncReqwestClient {
    client: reqwest::Client,
}

impl AsyncReqwestClient {
    /// Creates a new AsyncReqwestClient with a 30 second timeout.
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Creates a new AsyncReqwestClient with custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|e| CatalogError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl AsyncHttpClient for AsyncReqwestClient {
    async fn post_form(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> Result<Vec<u8>, CatalogError> {
        trace!(url = url, fields = params.len(), "HTTP POST request starting");

        let response = match self.client.post(url).form(params).send().await {
            Ok(resp) => {
                debug!(
                    url = url,
                    status = resp.status().as_u16(),
                    "HTTP response received"
                );
                resp
            }
            Err(e) => {
                warn!(
                    url = url,
                    error = %e,
                    is_connect = e.is_connect(),
                    is_timeout = e.is_timeout(),
                    "HTTP request failed"
                );
                return Err(CatalogError::Unavailable(e.to_string()));
            }
        };

        if !response.status().is_success() {
            warn!(
                url = url,
                status = response.status().as_u16(),
                "HTTP error status"
            );
            return Err(CatalogError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        match response.bytes().await {
            Ok(bytes) => {
                trace!(url = url, bytes = bytes.len(), "HTTP response body read");
                Ok(bytes.to_vec())
            }
            Err(e) => {
                warn!(url = url, error = %e, "Failed to read response body");
                Err(CatalogError::Unavailable(format!(
                    "failed to read response: {}",
                    e
                )))
            }
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// A form request captured by [`MockAsyncHttpClient`].
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub url: String,
        pub params: Vec<(String, String)>,
    }

    impl RecordedRequest {
        /// All values sent for a form field, in order.
        pub fn values(&self, name: &str) -> Vec<&str> {
            self.params
                .iter()
                .filter(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
                .collect()
        }
    }

    /// Mock async HTTP client for testing
    #[derive(Clone)]
    pub struct MockAsyncHttpClient {
        pub response: Result<Vec<u8>, CatalogError>,
        pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
    }

    impl MockAsyncHttpClient {
        pub fn with_body(body: &str) -> Self {
            Self::with_response(Ok(body.as_bytes().to_vec()))
        }

        pub fn with_response(response: Result<Vec<u8>, CatalogError>) -> Self {
            Self {
                response,
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn recorded(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl AsyncHttpClient for MockAsyncHttpClient {
        async fn post_form(
            &self,
            url: &str,
            params: &[(String, String)],
        ) -> Result<Vec<u8>, CatalogError> {
            self.requests.lock().unwrap().push(RecordedRequest {
                url: url.to_string(),
                params: params.to_vec(),
            });
            self.response.clone()
        }
    }

    #[tokio::test]
    async fn test_mock_async_client_success() {
        let mock = MockAsyncHttpClient::with_response(Ok(vec![1, 2, 3, 4]));

        let result = mock.post_form("http://example.com", &[]).await;
        assert_eq!(result.unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(mock.recorded().len(), 1);
    }

    #[tokio::test]
    async fn test_mock_async_client_error() {
        let mock =
            MockAsyncHttpClient::with_response(Err(CatalogError::Unavailable("down".to_string())));

        let result = mock.post_form("http://example.com", &[]).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_reqwest_client_builds() {
        assert!(AsyncReqwestClient::with_timeout(Duration::from_secs(5)).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_unavailable() {
        let client = AsyncReqwestClient::with_timeout(Duration::from_secs(2)).unwrap();
        // Port 9 on localhost is the discard service; nothing listens there in CI
        let result = client
            .post_form("http://127.0.0.1:9/search/granules.json", &[])
            .await;
        assert!(matches!(result, Err(CatalogError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_silent_server_times_out_as_unavailable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/search/granules.json", listener.local_addr().unwrap());

        // Accept the connection and hold it open without answering
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });

        let client = AsyncReqwestClient::with_timeout(Duration::from_secs(1)).unwrap();
        let started = std::time::Instant::now();
        let result = client.post_form(&url, &[]).await;

        assert!(matches!(result, Err(CatalogError::Unavailable(_))));
        assert!(started.elapsed() < Duration::from_secs(4));
        server.abort();
    }
}
