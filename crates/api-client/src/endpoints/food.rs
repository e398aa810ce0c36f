//! Food endpoints
//!
//! Maps to `GET {base}/food/{id}`, which answers `{"data": <food>}`.

use crate::auth::BearerToken;
use crate::envelope::FetchResult;
use crate::error::FetchOutcome;
use crate::fetcher::ResourceFetcher;
use crate::transport::{ReqwestTransport, Transport};
use serde::de::DeserializeOwned;

/// Food API interface
pub struct FoodApi<T: ?Sized = ReqwestTransport> {
    fetcher: ResourceFetcher<T>,
}

impl<T: Transport + ?Sized> FoodApi<T> {
    /// Create a new food API interface
    pub(crate) fn new(fetcher: ResourceFetcher<T>) -> Self {
        Self { fetcher }
    }

    /// Get one food item by ID
    ///
    /// GET /food/<id>
    pub async fn get_one_food_by_id<D: DeserializeOwned>(
        &self,
        food_id: &str,
        token: &BearerToken,
    ) -> FetchResult<D> {
        self.fetcher.fetch(food_id, token).await
    }

    /// Get one food item by ID, keeping the failure cause
    pub async fn try_get_one_food_by_id<D: DeserializeOwned>(
        &self,
        food_id: &str,
        token: &BearerToken,
    ) -> FetchOutcome<D> {
        self.fetcher.try_fetch(food_id, token).await
    }
}
