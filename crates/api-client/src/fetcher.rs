//! Single-resource fetch by identifier
//!
//! A [`ResourceFetcher`] is bound to one resource family: a transport, the
//! backend base URL, the resource path and the label used in envelope
//! messages. Each call issues exactly one GET to `{base_url}{path}/{id}`.
//! There is no retry and no caching; every call is independent.

use crate::auth::{auth_header, BearerToken};
use crate::envelope::{FetchResult, RemoteEnvelope};
use crate::error::{FetchError, FetchOutcome};
use crate::transport::{ReqwestTransport, Transport};
use reqwest::header::HeaderValue;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "x-request-id";

/// Fetches one resource family by identifier
pub struct ResourceFetcher<T: ?Sized = ReqwestTransport> {
    transport: Arc<T>,
    base_url: String,
    path: String,
    label: String,
}

impl<T: ?Sized> Clone for ResourceFetcher<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            base_url: self.base_url.clone(),
            path: self.path.clone(),
            label: self.label.clone(),
        }
    }
}

impl<T: Transport + ?Sized> ResourceFetcher<T> {
    /// Bind a fetcher to a resource path under `base_url`
    pub fn new(
        transport: Arc<T>,
        base_url: impl Into<String>,
        path: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            path: path.into(),
            label: label.into(),
        }
    }

    /// Label used in envelope messages
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Target URL for `id`; the identifier is inserted verbatim
    #[must_use]
    pub fn url_for(&self, id: &str) -> String {
        format!("{}{}/{id}", self.base_url, self.path)
    }

    /// Fetch and fold the outcome into the `{status, message, data}` envelope
    pub async fn fetch<D: DeserializeOwned>(&self, id: &str, token: &BearerToken) -> FetchResult<D> {
        FetchResult::from_outcome(&self.label, self.try_fetch(id, token).await)
    }

    /// Fetch and keep the failure cause
    ///
    /// Only HTTP 200 counts as success. The body must be `{"data": <payload>}`;
    /// the payload is unwrapped and decoded as `D`.
    #[instrument(skip(self, token), fields(resource = %self.label))]
    pub async fn try_fetch<D: DeserializeOwned>(
        &self,
        id: &str,
        token: &BearerToken,
    ) -> FetchOutcome<D> {
        let url = self.url_for(id);
        let request_id = Uuid::new_v4().to_string();

        debug!(request_id = %request_id, url = %url, "Fetching resource");

        let mut headers = auth_header(token)?;
        let request_id_value = HeaderValue::from_str(&request_id)
            .map_err(|e| FetchError::InvalidHeader(e.to_string()))?;
        headers.insert(X_REQUEST_ID, request_id_value);

        let start = Instant::now();
        let response = self.transport.get(&url, headers).await?;
        let elapsed = start.elapsed();

        if response.status != 200 {
            debug!(
                request_id = %request_id,
                status = response.status,
                elapsed_ms = elapsed.as_millis(),
                "Unexpected status"
            );
            return Err(FetchError::from_status(response.status));
        }

        let envelope: RemoteEnvelope<D> = serde_json::from_slice(&response.body)?;
        let data = envelope.data.ok_or(FetchError::MissingData)?;

        debug!(
            request_id = %request_id,
            elapsed_ms = elapsed.as_millis(),
            "Resource fetched"
        );
        Ok(data)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::FetchErrorKind;
    use crate::transport::{TransportError, TransportResponse};
    use async_trait::async_trait;
    use proptest::prelude::*;
    use reqwest::header::{HeaderMap, AUTHORIZATION};
    use serde::Deserialize;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// Transport answering every request with the same canned result
    pub(crate) struct StubTransport {
        reply: Result<TransportResponse, TransportError>,
        pub(crate) requests: Mutex<Vec<(String, HeaderMap)>>,
    }

    impl StubTransport {
        pub(crate) fn respond(status: u16, body: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(TransportResponse::new(status, body)),
                requests: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn fail(err: TransportError) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(err),
                requests: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn last_request(&self) -> (String, HeaderMap) {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn get(
            &self,
            url: &str,
            headers: HeaderMap,
        ) -> Result<TransportResponse, TransportError> {
            self.requests.lock().unwrap().push((url.to_string(), headers));
            self.reply.clone()
        }
    }

    const PIZZA: &str = r#"{"status": 200, "data": {"id": "f1", "name": "Pizza"}}"#;

    fn food_fetcher(transport: Arc<StubTransport>) -> ResourceFetcher<StubTransport> {
        ResourceFetcher::new(transport, "https://api.example.com", "/food", "Food")
    }

    fn token() -> BearerToken {
        BearerToken::new("tok")
    }

    #[tokio::test]
    async fn test_success_unwraps_payload() {
        let fetcher = food_fetcher(StubTransport::respond(200, PIZZA));

        let result: FetchResult<Value> = fetcher.fetch("f1", &token()).await;

        assert!(result.status);
        assert_eq!(result.message, "Food data fetched");
        assert_eq!(result.data, Some(json!({"id": "f1", "name": "Pizza"})));
    }

    #[tokio::test]
    async fn test_success_decodes_typed_payload() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Food {
            id: String,
            name: String,
        }

        let fetcher = food_fetcher(StubTransport::respond(200, PIZZA));
        let food: Food = fetcher.try_fetch("f1", &token()).await.unwrap();

        assert_eq!(
            food,
            Food {
                id: "f1".to_string(),
                name: "Pizza".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let fetcher = food_fetcher(StubTransport::respond(404, r#"{"message":"nope"}"#));

        let result: FetchResult<Value> = fetcher.fetch("f1", &token()).await;
        assert!(!result.status);
        assert_eq!(result.message, "Food data not found");
        assert!(result.data.is_none());

        let err = fetcher.try_fetch::<Value>("f1", &token()).await.unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::NotFound);
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_network_failure_matches_not_found_message() {
        let missing = food_fetcher(StubTransport::respond(404, ""));
        let offline = food_fetcher(StubTransport::fail(TransportError::Connect(
            "connection refused".to_string(),
        )));

        let a: FetchResult<Value> = missing.fetch("f1", &token()).await;
        let b: FetchResult<Value> = offline.fetch("f1", &token()).await;

        assert_eq!(a, b);
        assert!(!b.status);

        let err = offline.try_fetch::<Value>("f1", &token()).await.unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_failure_kinds() {
        let cases = [
            (StubTransport::respond(401, ""), FetchErrorKind::Unauthorized),
            (StubTransport::respond(403, ""), FetchErrorKind::Unauthorized),
            (StubTransport::respond(500, "boom"), FetchErrorKind::Status),
            (StubTransport::respond(201, PIZZA), FetchErrorKind::Status),
            (StubTransport::respond(200, "<html>"), FetchErrorKind::Malformed),
            (StubTransport::respond(200, r#"{"status":200}"#), FetchErrorKind::Malformed),
            (StubTransport::respond(200, r#"{"data":null}"#), FetchErrorKind::Malformed),
            (StubTransport::fail(TransportError::Timeout), FetchErrorKind::Timeout),
        ];

        for (transport, expected) in cases {
            let fetcher = food_fetcher(transport);
            let err = fetcher.try_fetch::<Value>("f1", &token()).await.unwrap_err();
            assert_eq!(err.kind(), expected, "{err}");

            let result: FetchResult<Value> = fetcher.fetch("f1", &token()).await;
            assert_eq!(result, FetchResult::not_found("Food"));
        }
    }

    #[tokio::test]
    async fn test_repeated_fetches_are_equal() {
        let fetcher = food_fetcher(StubTransport::respond(200, PIZZA));

        let first: FetchResult<Value> = fetcher.fetch("f1", &token()).await;
        let second: FetchResult<Value> = fetcher.fetch("f1", &token()).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_request_targets_resource_url_with_bearer() {
        let transport = StubTransport::respond(200, PIZZA);
        let fetcher = food_fetcher(Arc::clone(&transport));

        let _: FetchResult<Value> = fetcher.fetch("123", &token()).await;

        let (url, headers) = transport.last_request();
        assert_eq!(url, "https://api.example.com/food/123");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer tok");
        assert!(headers.contains_key(X_REQUEST_ID));
    }

    #[tokio::test]
    async fn test_empty_id_is_forwarded() {
        let transport = StubTransport::respond(404, "");
        let fetcher = food_fetcher(Arc::clone(&transport));

        let result: FetchResult<Value> = fetcher.fetch("", &token()).await;

        assert!(!result.status);
        assert_eq!(transport.last_request().0, "https://api.example.com/food/");
    }

    #[tokio::test]
    async fn test_invalid_token_never_reaches_transport() {
        let transport = StubTransport::respond(200, PIZZA);
        let fetcher = food_fetcher(Arc::clone(&transport));

        let err = fetcher
            .try_fetch::<Value>("f1", &BearerToken::new("line\nbreak"))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::InvalidHeader(_)));
        assert!(transport.requests.lock().unwrap().is_empty());
    }

    proptest! {
        #[test]
        fn test_any_id_is_fetched_verbatim(id in "\\PC{0,32}") {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();

            let ok = StubTransport::respond(200, PIZZA);
            let result: FetchResult<Value> =
                rt.block_on(food_fetcher(Arc::clone(&ok)).fetch(&id, &token()));
            prop_assert_eq!(
                result,
                FetchResult::fetched("Food", json!({"id": "f1", "name": "Pizza"}))
            );
            prop_assert_eq!(ok.last_request().0, format!("https://api.example.com/food/{id}"));

            let missing = StubTransport::respond(404, "");
            let result: FetchResult<Value> =
                rt.block_on(food_fetcher(Arc::clone(&missing)).fetch(&id, &token()));
            prop_assert_eq!(result, FetchResult::not_found("Food"));
            prop_assert_eq!(missing.last_request().0, format!("https://api.example.com/food/{id}"));
        }
    }

    #[tokio::test]
    async fn test_works_behind_dyn_transport() {
        let transport: Arc<dyn Transport> = StubTransport::respond(200, PIZZA);
        let fetcher = ResourceFetcher::new(transport, "http://h", "/food", "Food");

        let result: FetchResult<Value> = fetcher.fetch("f1", &token()).await;
        assert!(result.is_success());
    }
}
