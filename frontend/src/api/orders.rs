//! 订单服务

use async_trait::async_trait;
use fournil_shared::error::ApiResult;
use fournil_shared::protocol::{
    AllOrdersRequest, CancelOrderRequest, CreateOrderRequest, GetOrderRequest, OrderStatsRequest,
    UpdateOrderStatusRequest, UserOrdersRequest,
};
use fournil_shared::{Order, OrderStats, OrderStatus};

use super::client::RestClient;

/// 结算流程与订单页面依赖的网关
#[async_trait(?Send)]
pub trait OrderGateway: Send + Sync {
    async fn create(&self, req: CreateOrderRequest) -> ApiResult<Order>;
    async fn for_user(&self, user_id: u64) -> ApiResult<Vec<Order>>;
    async fn get(&self, order_id: u64) -> ApiResult<Order>;
    async fn all(&self) -> ApiResult<Vec<Order>>;
    async fn set_status(&self, order_id: u64, status: OrderStatus) -> ApiResult<Order>;
    async fn cancel(&self, order_id: u64) -> ApiResult<Order>;
    async fn stats(&self) -> ApiResult<OrderStats>;
}

#[derive(Clone)]
pub struct OrderService {
    client: RestClient,
}

impl OrderService {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl OrderGateway for OrderService {
    async fn create(&self, req: CreateOrderRequest) -> ApiResult<Order> {
        self.client
            .execute(&req)
            .await
            .map_err(|e| e.in_op("order.create"))
    }

    async fn for_user(&self, user_id: u64) -> ApiResult<Vec<Order>> {
        self.client
            .execute(&UserOrdersRequest { user_id })
            .await
            .map_err(|e| e.in_op("order.for_user"))
    }

    async fn get(&self, order_id: u64) -> ApiResult<Order> {
        self.client
            .execute(&GetOrderRequest { order_id })
            .await
            .map_err(|e| e.in_op_with("order.get", order_id.to_string()))
    }

    async fn all(&self) -> ApiResult<Vec<Order>> {
        self.client
            .execute(&AllOrdersRequest)
            .await
            .map_err(|e| e.in_op("order.all"))
    }

    async fn set_status(&self, order_id: u64, status: OrderStatus) -> ApiResult<Order> {
        self.client
            .execute(&UpdateOrderStatusRequest { order_id, status })
            .await
            .map_err(|e| e.in_op_with("order.set_status", order_id.to_string()))
    }

    async fn cancel(&self, order_id: u64) -> ApiResult<Order> {
        self.client
            .execute(&CancelOrderRequest { order_id })
            .await
            .map_err(|e| e.in_op_with("order.cancel", order_id.to_string()))
    }

    async fn stats(&self) -> ApiResult<OrderStats> {
        self.client
            .execute(&OrderStatsRequest)
            .await
            .map_err(|e| e.in_op("order.stats"))
    }
}
