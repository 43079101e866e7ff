//! Fournil 共享模型库
//!
//! 前端与远程 REST 后端之间的契约层：
//! - 领域模型（用户、商品、购物车、订单等）
//! - `protocol`: 类型化的 API 请求/响应定义
//! - `error`: 统一的错误类型

pub mod error;
pub mod protocol;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// LocalStorage 中保存 Bearer Token 的键
pub const STORAGE_TOKEN_KEY: &str = "authToken";
/// LocalStorage 中保存序列化 User 的键
pub const STORAGE_USER_KEY: &str = "user";
/// 认证请求头名称
pub const HEADER_AUTHORIZATION: &str = "Authorization";
/// 路径中包含此片段的端点不触发会话过期处理
pub const AUTH_PATH_MARKER: &str = "/auth/";

// =========================================================
// 用户与会话 (User & Session)
// =========================================================

/// 用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::Customer
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: u64,
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// 登录/注册成功后返回的会话数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    pub token: String,
    pub user: User,
}

// =========================================================
// 商品 (Product)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub price: Decimal,
    #[serde(default)]
    pub image: String,
    #[serde(default = "default_true")]
    pub available: bool,
    /// 促销折扣百分比（0-100），由后台促销界面维护
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

fn default_true() -> bool {
    true
}

impl Product {
    /// 应用折扣后的实际售价（保留两位小数）
    pub fn effective_price(&self) -> Decimal {
        match self.discount_percent {
            Some(d) if d > Decimal::ZERO => {
                let factor = (Decimal::from(100) - d) / Decimal::from(100);
                (self.price * factor).round_dp(2)
            }
            _ => self.price,
        }
    }

    pub fn is_discounted(&self) -> bool {
        matches!(self.discount_percent, Some(d) if d > Decimal::ZERO)
    }
}

// =========================================================
// 购物车 (Cart)
// =========================================================

/// 服务端购物车行的传输格式
///
/// 后端购物车接口使用 camelCase 字段，本地模型为 snake_case，
/// 通过 `CartLine::from` 做一次显式映射。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    pub product_id: u64,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// 本地购物车行
///
/// 不变量：`quantity >= 1`，数量降至 0 以下由调用方转为删除操作。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// 行 id，直接取自商品 id
    pub id: u64,
    pub product_id: u64,
    pub name: String,
    pub image: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl From<CartItemDto> for CartLine {
    fn from(dto: CartItemDto) -> Self {
        Self {
            id: dto.product_id,
            product_id: dto.product_id,
            name: dto.name,
            image: dto.image,
            price: dto.price,
            quantity: dto.quantity.max(1),
        }
    }
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// 各行数量之和（每次渲染重新计算，不单独存储）
pub fn cart_item_count(lines: &[CartLine]) -> u32 {
    lines.iter().map(|l| l.quantity).sum()
}

/// 购物车小计
pub fn cart_subtotal(lines: &[CartLine]) -> Decimal {
    lines.iter().map(CartLine::line_total).sum()
}

/// 金额展示格式，固定两位小数
pub fn format_price(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

// =========================================================
// 订单 (Order)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// 仅 Pending 状态的订单允许客户取消
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }

    /// 后台订单管理中可手动设置的状态集合
    pub fn assignable() -> &'static [OrderStatus] {
        &[
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::OutForDelivery,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 下单时的行快照，创建后不再变更
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: u64,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl From<&CartLine> for OrderItem {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id,
            name: line.name.clone(),
            price: line.price,
            quantity: line.quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: u64,
    pub user_id: u64,
    pub items: Vec<OrderItem>,
    pub delivery_address: DeliveryAddress,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

// =========================================================
// 配送地址 (Delivery Address)
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub zip_code: String,
}

impl DeliveryAddress {
    /// 提交前的必填校验：街道、城市、邮编均不可为空。
    ///
    /// 校验失败时不应发出任何网络请求。
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.street.trim().is_empty() {
            return Err("Street is required");
        }
        if self.city.trim().is_empty() {
            return Err("City is required");
        }
        if self.zip_code.trim().is_empty() {
            return Err("Zip code is required");
        }
        Ok(())
    }
}

/// 州/省输入过滤：仅保留字母与空格（输入约束，非安全边界）
pub fn filter_letters(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect()
}

/// 邮编输入过滤：仅保留数字
pub fn filter_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

// =========================================================
// 联系表单 (Contact)
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

// =========================================================
// 后台统计与分析 (Admin Stats & Analytics)
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_orders: u64,
    pub pending_orders: u64,
    pub total_customers: u64,
    pub total_products: u64,
    pub total_revenue: Decimal,
}

/// `/order/stats` 返回的订单维度统计
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderStats {
    pub total: u64,
    pub pending: u64,
    pub delivered: u64,
    pub cancelled: u64,
    pub revenue: Decimal,
}

/// 销售曲线上的一个采样点（按天或按月聚合由后端决定）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub label: String,
    pub orders: u64,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub product_id: u64,
    pub name: String,
    pub units_sold: u64,
    pub revenue: Decimal,
}

/// 后台活动日志条目，仪表盘以 best-effort 方式刷新
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: u64,
    pub message: String,
    pub at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub user_id: u64,
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub orders_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<chrono::DateTime<chrono::Utc>>,
}

// =========================================================
// 单元测试
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: u64, price: Decimal, quantity: u32) -> CartLine {
        CartLine {
            id: product_id,
            product_id,
            name: format!("product-{}", product_id),
            image: String::new(),
            price,
            quantity,
        }
    }

    #[test]
    fn cart_count_and_subtotal() {
        let lines = vec![
            line(1, Decimal::new(250, 2), 2),
            line(2, Decimal::new(999, 2), 1),
        ];
        assert_eq!(cart_item_count(&lines), 3);
        assert_eq!(cart_subtotal(&lines), Decimal::new(1499, 2));
    }

    #[test]
    fn cart_dto_maps_to_local_shape() {
        let json = r#"{"productId":42,"name":"Sourdough","image":"sd.jpg","price":9.99,"quantity":1}"#;
        let dto: CartItemDto = serde_json::from_str(json).unwrap();
        let local = CartLine::from(dto);
        assert_eq!(local.id, 42);
        assert_eq!(local.product_id, 42);
        assert_eq!(local.price, Decimal::new(999, 2));
        assert_eq!(local.quantity, 1);
    }

    #[test]
    fn effective_price_applies_discount() {
        let mut p = Product {
            product_id: 1,
            name: "Baguette".into(),
            description: String::new(),
            category: "Bread".into(),
            price: Decimal::new(400, 2),
            image: String::new(),
            available: true,
            discount_percent: None,
            rating: None,
        };
        assert_eq!(p.effective_price(), Decimal::new(400, 2));

        p.discount_percent = Some(Decimal::from(25));
        assert_eq!(p.effective_price(), Decimal::new(300, 2));
        assert!(p.is_discounted());
    }

    #[test]
    fn address_validation_gates_required_fields() {
        let mut addr = DeliveryAddress {
            street: "1 Rue du Four".into(),
            city: "Lyon".into(),
            state: "AR".into(),
            zip_code: "69001".into(),
        };
        assert!(addr.validate().is_ok());

        addr.street = "  ".into();
        assert_eq!(addr.validate(), Err("Street is required"));

        addr.street = "1 Rue du Four".into();
        addr.zip_code = String::new();
        assert_eq!(addr.validate(), Err("Zip code is required"));
    }

    #[test]
    fn input_filters() {
        assert_eq!(filter_letters("New York 2!"), "New York ");
        assert_eq!(filter_digits("69-001a"), "69001");
    }

    #[test]
    fn order_status_roundtrip_and_cancel_rule() {
        let s: OrderStatus = serde_json::from_str("\"Out for Delivery\"").unwrap();
        assert_eq!(s, OrderStatus::OutForDelivery);
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"Out for Delivery\"");

        assert!(OrderStatus::Pending.can_cancel());
        assert!(!OrderStatus::Processing.can_cancel());
        assert!(!OrderStatus::Cancelled.can_cancel());
    }
}
