//! 后台统计与客户管理服务

use fournil_shared::error::ApiResult;
use fournil_shared::protocol::{
    ActivityFeedRequest, DashboardStatsRequest, DeleteCustomerRequest, ListCustomersRequest,
    SalesAnalyticsRequest, TopProductsRequest,
};
use fournil_shared::{ActivityEntry, CustomerSummary, DashboardStats, SalesPoint, TopProduct};

use super::client::RestClient;

#[derive(Clone)]
pub struct AdminService {
    client: RestClient,
}

impl AdminService {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    pub async fn dashboard_stats(&self) -> ApiResult<DashboardStats> {
        self.client
            .execute(&DashboardStatsRequest)
            .await
            .map_err(|e| e.in_op("admin.dashboard_stats"))
    }

    pub async fn customers(&self) -> ApiResult<Vec<CustomerSummary>> {
        self.client
            .execute(&ListCustomersRequest)
            .await
            .map_err(|e| e.in_op("admin.customers"))
    }

    pub async fn delete_customer(&self, user_id: u64) -> ApiResult<()> {
        self.client
            .execute(&DeleteCustomerRequest { user_id })
            .await
            .map_err(|e| e.in_op_with("admin.delete_customer", user_id.to_string()))
    }

    pub async fn sales(&self) -> ApiResult<Vec<SalesPoint>> {
        self.client
            .execute(&SalesAnalyticsRequest)
            .await
            .map_err(|e| e.in_op("admin.sales"))
    }

    pub async fn top_products(&self) -> ApiResult<Vec<TopProduct>> {
        self.client
            .execute(&TopProductsRequest)
            .await
            .map_err(|e| e.in_op("admin.top_products"))
    }

    /// 活动日志，仪表盘以 best-effort 方式刷新，失败不打扰用户
    pub async fn activity(&self) -> ApiResult<Vec<ActivityEntry>> {
        self.client
            .execute(&ActivityFeedRequest)
            .await
            .map_err(|e| e.in_op("admin.activity"))
    }
}
