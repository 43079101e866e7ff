//! 商品目录服务
//!
//! 页面直接调用，不经过存储层，因此无需网关抽象。

use fournil_shared::Product;
use fournil_shared::error::ApiResult;
use fournil_shared::protocol::{
    CreateProductRequest, DeleteProductRequest, GetProductRequest, ListProductsRequest,
    ProductsByCategoryRequest, SearchProductsRequest, UpdateProductRequest,
};

use super::client::RestClient;

#[derive(Clone)]
pub struct ProductService {
    client: RestClient,
}

impl ProductService {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<Product>> {
        self.client
            .execute(&ListProductsRequest)
            .await
            .map_err(|e| e.in_op("products.list"))
    }

    pub async fn get(&self, product_id: u64) -> ApiResult<Product> {
        self.client
            .execute(&GetProductRequest { product_id })
            .await
            .map_err(|e| e.in_op_with("products.get", product_id.to_string()))
    }

    pub async fn search(&self, query: impl Into<String>) -> ApiResult<Vec<Product>> {
        self.client
            .execute(&SearchProductsRequest {
                query: query.into(),
            })
            .await
            .map_err(|e| e.in_op("products.search"))
    }

    pub async fn by_category(&self, category: impl Into<String>) -> ApiResult<Vec<Product>> {
        self.client
            .execute(&ProductsByCategoryRequest {
                category: category.into(),
            })
            .await
            .map_err(|e| e.in_op("products.by_category"))
    }

    // --- 后台目录维护 ---

    pub async fn create(&self, req: CreateProductRequest) -> ApiResult<Product> {
        self.client
            .execute(&req)
            .await
            .map_err(|e| e.in_op("products.create"))
    }

    pub async fn update(&self, req: UpdateProductRequest) -> ApiResult<Product> {
        self.client
            .execute(&req)
            .await
            .map_err(|e| e.in_op("products.update"))
    }

    pub async fn delete(&self, product_id: u64) -> ApiResult<()> {
        self.client
            .execute(&DeleteProductRequest { product_id })
            .await
            .map_err(|e| e.in_op_with("products.delete", product_id.to_string()))
    }
}
