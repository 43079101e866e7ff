//! 收藏夹服务

use fournil_shared::Product;
use fournil_shared::error::ApiResult;
use fournil_shared::protocol::{AddFavoriteRequest, ListFavoritesRequest, RemoveFavoriteRequest};

use super::client::RestClient;

#[derive(Clone)]
pub struct FavoriteService {
    client: RestClient,
}

impl FavoriteService {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, user_id: u64) -> ApiResult<Vec<Product>> {
        self.client
            .execute(&ListFavoritesRequest { user_id })
            .await
            .map_err(|e| e.in_op("favorites.list"))
    }

    pub async fn add(&self, user_id: u64, product_id: u64) -> ApiResult<()> {
        self.client
            .execute(&AddFavoriteRequest {
                user_id,
                product_id,
            })
            .await
            .map_err(|e| e.in_op_with("favorites.add", product_id.to_string()))
    }

    pub async fn remove(&self, user_id: u64, product_id: u64) -> ApiResult<()> {
        self.client
            .execute(&RemoveFavoriteRequest {
                user_id,
                product_id,
            })
            .await
            .map_err(|e| e.in_op_with("favorites.remove", product_id.to_string()))
    }
}
