//! Typed API protocol.
//!
//! Every backend endpoint is described by a request type implementing
//! [`ApiRequest`], which binds the request body to its response type, HTTP
//! method and URL path. The REST client is generic over this trait, so adding
//! an endpoint never touches the transport layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    ActivityEntry, CartItemDto, ContactMessage, CustomerSummary, DashboardStats, DeliveryAddress,
    Order, OrderItem, OrderStats, OrderStatus, Product, SalesPoint, SessionData, TopProduct, User,
};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an
/// API endpoint.
///
/// Unlike a `const PATH`, the path is a method here: most of our endpoints
/// carry ids or query strings in the URL.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// The URL path (or suffix), including any path params / query string.
    fn path(&self) -> String;
}

// =========================================================
// Response envelope
// =========================================================

/// The uniform response wrapper used by the backend:
/// `{ success, message, data }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

/// Error payload shape for non-2xx responses.
///
/// The user-facing message is `message`, falling back to the first entry of
/// `errors`, shown verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

impl ErrorBody {
    /// Extract the display message from a raw error body, if any.
    pub fn extract_message(raw: &str) -> Option<String> {
        let body: ErrorBody = serde_json::from_str(raw).ok()?;
        if let Some(message) = body.message {
            if !message.is_empty() {
                return Some(message);
            }
        }
        body.errors
            .and_then(|errors| errors.into_iter().next())
            .filter(|e| !e.is_empty())
    }
}

// =========================================================
// Auth endpoints
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl ApiRequest for RegisterRequest {
    type Response = SessionData;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/auth/users/register".into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for SignInRequest {
    type Response = SessionData;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/auth/users/signin".into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(skip)]
    pub user_id: u64,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl ApiRequest for UpdateProfileRequest {
    type Response = User;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        format!("/auth/users/profile/{}", self.user_id)
    }
}

// =========================================================
// Product endpoints
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListProductsRequest;

impl ApiRequest for ListProductsRequest {
    type Response = Vec<Product>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/products".into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetProductRequest {
    pub product_id: u64,
}

impl ApiRequest for GetProductRequest {
    type Response = Product;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/products/{}", self.product_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchProductsRequest {
    pub query: String,
}

impl ApiRequest for SearchProductsRequest {
    type Response = Vec<Product>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/products/search?q={}", urlencoding::encode(&self.query))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsByCategoryRequest {
    pub category: String,
}

impl ApiRequest for ProductsByCategoryRequest {
    type Response = Vec<Product>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/products/category/{}", urlencoding::encode(&self.category))
    }
}

/// Admin: create a catalog entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: Decimal,
    pub image: String,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<Decimal>,
}

impl ApiRequest for CreateProductRequest {
    type Response = Product;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/products".into()
    }
}

/// Admin: full update of a catalog entry (also drives the promotions screen
/// through `discount_percent`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(skip)]
    pub product_id: u64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: Decimal,
    pub image: String,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<Decimal>,
}

impl ApiRequest for UpdateProductRequest {
    type Response = Product;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        format!("/products/{}", self.product_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteProductRequest {
    pub product_id: u64,
}

impl ApiRequest for DeleteProductRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/products/{}", self.product_id)
    }
}

// =========================================================
// Cart endpoints
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCartRequest {
    pub user_id: u64,
}

impl ApiRequest for GetCartRequest {
    type Response = Vec<CartItemDto>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/cart/{}", self.user_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddToCartRequest {
    pub user_id: u64,
    pub product_id: u64,
    pub quantity: u32,
}

impl ApiRequest for AddToCartRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/cart/add".into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCartRequest {
    pub user_id: u64,
    pub product_id: u64,
    pub quantity: u32,
}

impl ApiRequest for UpdateCartRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        "/cart/update".into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveFromCartRequest {
    pub user_id: u64,
    pub product_id: u64,
}

impl ApiRequest for RemoveFromCartRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        "/cart/remove".into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearCartRequest {
    #[serde(skip)]
    pub user_id: u64,
}

impl ApiRequest for ClearCartRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/cart/clear/{}", self.user_id)
    }
}

// =========================================================
// Order endpoints
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: u64,
    pub items: Vec<OrderItem>,
    pub delivery_address: DeliveryAddress,
    pub total_amount: Decimal,
}

impl ApiRequest for CreateOrderRequest {
    type Response = Order;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/order/create".into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserOrdersRequest {
    pub user_id: u64,
}

impl ApiRequest for UserOrdersRequest {
    type Response = Vec<Order>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/order/user/{}", self.user_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetOrderRequest {
    pub order_id: u64,
}

impl ApiRequest for GetOrderRequest {
    type Response = Order;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/order/{}", self.order_id)
    }
}

/// Admin: every order in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllOrdersRequest;

impl ApiRequest for AllOrdersRequest {
    type Response = Vec<Order>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/order/all".into()
    }
}

/// Admin: move an order through its lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub order_id: u64,
    pub status: OrderStatus,
}

impl ApiRequest for UpdateOrderStatusRequest {
    type Response = Order;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        "/order/status".into()
    }
}

/// Customer cancellation; the backend rejects non-Pending orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelOrderRequest {
    #[serde(skip)]
    pub order_id: u64,
}

impl ApiRequest for CancelOrderRequest {
    type Response = Order;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        format!("/order/cancel/{}", self.order_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatsRequest;

impl ApiRequest for OrderStatsRequest {
    type Response = OrderStats;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/order/stats".into()
    }
}

// =========================================================
// Admin endpoints
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStatsRequest;

impl ApiRequest for DashboardStatsRequest {
    type Response = DashboardStats;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/admin/dashboard/stats".into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCustomersRequest;

impl ApiRequest for ListCustomersRequest {
    type Response = Vec<CustomerSummary>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/admin/customers".into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCustomerRequest {
    pub user_id: u64,
}

impl ApiRequest for DeleteCustomerRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/admin/customers/{}", self.user_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesAnalyticsRequest;

impl ApiRequest for SalesAnalyticsRequest {
    type Response = Vec<SalesPoint>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/admin/analytics/sales".into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopProductsRequest;

impl ApiRequest for TopProductsRequest {
    type Response = Vec<TopProduct>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/admin/analytics/products".into()
    }
}

/// Best-effort activity feed for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFeedRequest;

impl ApiRequest for ActivityFeedRequest {
    type Response = Vec<ActivityEntry>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/admin/analytics/activity".into()
    }
}

// =========================================================
// Contact & favorites
// =========================================================

impl ApiRequest for ContactMessage {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/contact/send".into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListFavoritesRequest {
    pub user_id: u64,
}

impl ApiRequest for ListFavoritesRequest {
    type Response = Vec<Product>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/user/{}/favorites", self.user_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFavoriteRequest {
    #[serde(skip)]
    pub user_id: u64,
    #[serde(skip)]
    pub product_id: u64,
}

impl ApiRequest for AddFavoriteRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("/user/{}/favorites/{}", self.user_id, self.product_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveFavoriteRequest {
    #[serde(skip)]
    pub user_id: u64,
    #[serde(skip)]
    pub product_id: u64,
}

impl ApiRequest for RemoveFavoriteRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/user/{}/favorites/{}", self.user_id, self.product_id)
    }
}

// =========================================================
// Tests
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_carry_params() {
        assert_eq!(GetCartRequest { user_id: 7 }.path(), "/cart/7");
        assert_eq!(ClearCartRequest { user_id: 7 }.path(), "/cart/clear/7");
        assert_eq!(CancelOrderRequest { order_id: 3 }.path(), "/order/cancel/3");
        assert_eq!(
            SearchProductsRequest {
                query: "pain au chocolat".into()
            }
            .path(),
            "/products/search?q=pain%20au%20chocolat"
        );
        assert_eq!(
            AddFavoriteRequest {
                user_id: 1,
                product_id: 42
            }
            .path(),
            "/user/1/favorites/42"
        );
    }

    #[test]
    fn path_only_fields_do_not_serialize() {
        let body = serde_json::to_value(&ClearCartRequest { user_id: 7 }).unwrap();
        assert_eq!(body, serde_json::json!({}));

        let body = serde_json::to_value(&UpdateProfileRequest {
            user_id: 9,
            full_name: "Ada".into(),
            phone_number: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "full_name": "Ada" }));
    }

    #[test]
    fn envelope_error_message_extraction() {
        assert_eq!(
            ErrorBody::extract_message(r#"{"message":"Email already registered"}"#).as_deref(),
            Some("Email already registered")
        );
        assert_eq!(
            ErrorBody::extract_message(r#"{"errors":["Password too short","other"]}"#).as_deref(),
            Some("Password too short")
        );
        assert_eq!(ErrorBody::extract_message(r#"{"success":false}"#), None);
        assert_eq!(ErrorBody::extract_message("not json"), None);
    }

    #[test]
    fn envelope_decodes_missing_fields() {
        let env: ApiEnvelope<SessionData> =
            serde_json::from_str(r#"{"success":false,"message":"Invalid credentials"}"#).unwrap();
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message.as_deref(), Some("Invalid credentials"));
    }
}
