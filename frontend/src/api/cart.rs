//! 购物车服务

use async_trait::async_trait;
use fournil_shared::CartItemDto;
use fournil_shared::error::ApiResult;
use fournil_shared::protocol::{
    AddToCartRequest, ClearCartRequest, GetCartRequest, RemoveFromCartRequest, UpdateCartRequest,
};

use super::client::RestClient;

/// 购物车存储依赖的网关
#[async_trait(?Send)]
pub trait CartGateway: Send + Sync {
    async fn fetch(&self, user_id: u64) -> ApiResult<Vec<CartItemDto>>;
    async fn add(&self, user_id: u64, product_id: u64, quantity: u32) -> ApiResult<()>;
    async fn update(&self, user_id: u64, product_id: u64, quantity: u32) -> ApiResult<()>;
    async fn remove(&self, user_id: u64, product_id: u64) -> ApiResult<()>;
    async fn clear(&self, user_id: u64) -> ApiResult<()>;
}

#[derive(Clone)]
pub struct CartService {
    client: RestClient,
}

impl CartService {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl CartGateway for CartService {
    async fn fetch(&self, user_id: u64) -> ApiResult<Vec<CartItemDto>> {
        self.client
            .execute(&GetCartRequest { user_id })
            .await
            .map_err(|e| e.in_op("cart.fetch"))
    }

    async fn add(&self, user_id: u64, product_id: u64, quantity: u32) -> ApiResult<()> {
        self.client
            .execute(&AddToCartRequest {
                user_id,
                product_id,
                quantity,
            })
            .await
            .map_err(|e| e.in_op_with("cart.add", product_id.to_string()))
    }

    async fn update(&self, user_id: u64, product_id: u64, quantity: u32) -> ApiResult<()> {
        self.client
            .execute(&UpdateCartRequest {
                user_id,
                product_id,
                quantity,
            })
            .await
            .map_err(|e| e.in_op_with("cart.update", product_id.to_string()))
    }

    async fn remove(&self, user_id: u64, product_id: u64) -> ApiResult<()> {
        self.client
            .execute(&RemoveFromCartRequest {
                user_id,
                product_id,
            })
            .await
            .map_err(|e| e.in_op_with("cart.remove", product_id.to_string()))
    }

    async fn clear(&self, user_id: u64) -> ApiResult<()> {
        self.client
            .execute(&ClearCartRequest { user_id })
            .await
            .map_err(|e| e.in_op("cart.clear"))
    }
}
