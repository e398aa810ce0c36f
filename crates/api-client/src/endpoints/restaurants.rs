//! Restaurant endpoints

use crate::auth::BearerToken;
use crate::envelope::FetchResult;
use crate::error::FetchOutcome;
use crate::fetcher::ResourceFetcher;
use crate::transport::{ReqwestTransport, Transport};
use serde::de::DeserializeOwned;

/// Restaurants API interface
pub struct RestaurantsApi<T: ?Sized = ReqwestTransport> {
    fetcher: ResourceFetcher<T>,
}

impl<T: Transport + ?Sized> RestaurantsApi<T> {
    /// Create a new restaurants API interface
    pub(crate) fn new(fetcher: ResourceFetcher<T>) -> Self {
        Self { fetcher }
    }

    /// Get one restaurant by ID
    ///
    /// GET /restaurant/<id>
    pub async fn get_one_restaurant_by_id<D: DeserializeOwned>(
        &self,
        restaurant_id: &str,
        token: &BearerToken,
    ) -> FetchResult<D> {
        self.fetcher.fetch(restaurant_id, token).await
    }

    /// Get one restaurant by ID, keeping the failure cause
    pub async fn try_get_one_restaurant_by_id<D: DeserializeOwned>(
        &self,
        restaurant_id: &str,
        token: &BearerToken,
    ) -> FetchOutcome<D> {
        self.fetcher.try_fetch(restaurant_id, token).await
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::BearerToken;
    use crate::config::ClientConfig;
    use crate::envelope::FetchResult;
    use crate::fetcher::tests::StubTransport;
    use crate::FoodhubClient;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Restaurant {
        id: String,
        name: String,
        #[serde(default)]
        tags: Vec<String>,
    }

    #[tokio::test]
    async fn test_get_one_restaurant_by_id_typed() {
        let transport = StubTransport::respond(
            200,
            r#"{"status":true,"data":{"id":"r9","name":"Luigi's","tags":["italian"]}}"#,
        );
        let client = FoodhubClient::with_transport(ClientConfig::default(), transport).unwrap();

        let result: FetchResult<Restaurant> = client
            .restaurants()
            .get_one_restaurant_by_id("r9", &BearerToken::new("tok"))
            .await;

        assert_eq!(result.message, "Restaurant data fetched");
        let restaurant = result.into_data().unwrap();
        assert_eq!(restaurant.name, "Luigi's");
        assert_eq!(restaurant.tags, vec!["italian".to_string()]);
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_failure() {
        let transport = StubTransport::respond(200, r#"{"data":{"id":"r9"}}"#);
        let client = FoodhubClient::with_transport(ClientConfig::default(), transport).unwrap();

        let result: FetchResult<Restaurant> = client
            .restaurants()
            .get_one_restaurant_by_id("r9", &BearerToken::new("tok"))
            .await;

        assert_eq!(result, FetchResult::not_found("Restaurant"));
    }
}
