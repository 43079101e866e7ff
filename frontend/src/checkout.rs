//! 结算流程
//!
//! 购物车页面内的小状态机：浏览 → 打开地址弹窗 → 确认 → 下单成功后
//! 清空购物车并关闭弹窗。校验不过时不发出任何网络请求；下单失败时
//! 弹窗保持打开、购物车保持不变。

use std::sync::Arc;

use fournil_shared::error::{ApiError, ApiResult};
use fournil_shared::protocol::CreateOrderRequest;
use fournil_shared::{DeliveryAddress, Order, OrderItem, User, cart_subtotal, filter_digits, filter_letters};
use leptos::prelude::*;

use crate::api::orders::OrderGateway;
use crate::cart::CartStore;
use crate::notify::Toaster;

// =========================================================
// 地址表单
// =========================================================

/// 配送地址表单状态
///
/// 使用 `RwSignal` 因为它实现了 `Copy`，适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct AddressForm {
    pub street: RwSignal<String>,
    pub city: RwSignal<String>,
    pub state: RwSignal<String>,
    pub zip_code: RwSignal<String>,
}

impl AddressForm {
    pub fn new() -> Self {
        Self {
            street: RwSignal::new(String::new()),
            city: RwSignal::new(String::new()),
            state: RwSignal::new(String::new()),
            zip_code: RwSignal::new(String::new()),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.street.set(String::new());
        self.city.set(String::new());
        self.state.set(String::new());
        self.zip_code.set(String::new());
    }

    /// 州/省输入：过滤为仅字母与空格
    pub fn input_state(&self, raw: &str) {
        self.state.set(filter_letters(raw));
    }

    /// 邮编输入：过滤为仅数字
    pub fn input_zip(&self, raw: &str) {
        self.zip_code.set(filter_digits(raw));
    }

    /// 表单快照（字段做 trim）
    pub fn to_address(&self) -> DeliveryAddress {
        DeliveryAddress {
            street: self.street.get_untracked().trim().to_string(),
            city: self.city.get_untracked().trim().to_string(),
            state: self.state.get_untracked().trim().to_string(),
            zip_code: self.zip_code.get_untracked().trim().to_string(),
        }
    }
}

impl Default for AddressForm {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================
// 结算状态机
// =========================================================

#[derive(Clone)]
pub struct Checkout {
    pub dialog_open: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    pub form: AddressForm,
    cart: CartStore,
    orders: Arc<dyn OrderGateway>,
    user: Signal<Option<User>>,
    toaster: Toaster,
}

impl Checkout {
    pub fn new(
        cart: CartStore,
        orders: Arc<dyn OrderGateway>,
        user: Signal<Option<User>>,
        toaster: Toaster,
    ) -> Self {
        Self {
            dialog_open: RwSignal::new(false),
            submitting: RwSignal::new(false),
            form: AddressForm::new(),
            cart,
            orders,
            user,
            toaster,
        }
    }

    /// 发起结算：要求非空购物车与已登录用户
    pub fn begin(&self) {
        if self.user.get_untracked().is_none() {
            self.toaster.error("Please sign in to check out");
            return;
        }
        if self.cart.is_empty() {
            self.toaster.error("Your cart is empty");
            return;
        }
        self.dialog_open.set(true);
    }

    /// 确认下单
    ///
    /// 必填校验不过时直接返回，不发出网络请求；
    /// 成功路径：一次下单调用 + 一次购物车清空 + 关闭弹窗。
    pub async fn confirm(&self) -> ApiResult<Order> {
        let user = self
            .user
            .get_untracked()
            .ok_or_else(ApiError::auth_required)?;

        let address = self.form.to_address();
        if let Err(message) = address.validate() {
            self.toaster.error(message);
            return Err(ApiError::validation(message));
        }

        let lines = self.cart.lines_untracked();
        if lines.is_empty() {
            self.toaster.error("Your cart is empty");
            return Err(ApiError::validation("Cart is empty"));
        }

        self.submitting.set(true);
        let request = CreateOrderRequest {
            user_id: user.user_id,
            items: lines.iter().map(OrderItem::from).collect(),
            delivery_address: address,
            total_amount: cart_subtotal(&lines),
        };
        let result = self.orders.create(request).await;
        self.submitting.set(false);

        match result {
            Ok(order) => {
                self.cart.clear_cart().await;
                self.dialog_open.set(false);
                self.form.reset();
                self.toaster.success("Order placed, thank you!");
                Ok(order)
            }
            Err(e) => {
                // 弹窗保持打开，购物车不动，错误原样展示
                self.toaster.error(e.message());
                Err(e)
            }
        }
    }
}

// =========================================================
// 单元测试
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::cart::CartGateway;
    use async_trait::async_trait;
    use fournil_shared::protocol::{
        CreateOrderRequest as CreateReq,
    };
    use fournil_shared::{CartItemDto, OrderStats, OrderStatus, Role};
    use rust_decimal::Decimal;
    use std::sync::Mutex;

    /// 订单网关模拟：记录每次下单请求
    #[derive(Default)]
    struct MockOrderGateway {
        created: Mutex<Vec<CreateReq>>,
        fail_create: Mutex<bool>,
    }

    impl MockOrderGateway {
        fn new() -> Self {
            Self::default()
        }

        fn fail_next(&self) {
            *self.fail_create.lock().unwrap() = true;
        }

        fn created_count(&self) -> usize {
            self.created.lock().unwrap().len()
        }
    }

    #[async_trait(?Send)]
    impl OrderGateway for MockOrderGateway {
        async fn create(&self, req: CreateReq) -> ApiResult<Order> {
            if *self.fail_create.lock().unwrap() {
                return Err(ApiError::server("Bakery is closed"));
            }
            let order = Order {
                order_id: 1000 + self.created.lock().unwrap().len() as u64,
                user_id: req.user_id,
                items: req.items.clone(),
                delivery_address: req.delivery_address.clone(),
                total_amount: req.total_amount,
                status: OrderStatus::Pending,
                created_at: None,
            };
            self.created.lock().unwrap().push(req);
            Ok(order)
        }

        async fn for_user(&self, _user_id: u64) -> ApiResult<Vec<Order>> {
            Ok(Vec::new())
        }

        async fn get(&self, _order_id: u64) -> ApiResult<Order> {
            Err(ApiError::not_found("no such order"))
        }

        async fn all(&self) -> ApiResult<Vec<Order>> {
            Ok(Vec::new())
        }

        async fn set_status(&self, _order_id: u64, _status: OrderStatus) -> ApiResult<Order> {
            Err(ApiError::not_found("no such order"))
        }

        async fn cancel(&self, _order_id: u64) -> ApiResult<Order> {
            Err(ApiError::not_found("no such order"))
        }

        async fn stats(&self) -> ApiResult<OrderStats> {
            Ok(OrderStats::default())
        }
    }

    /// 购物车网关模拟：只统计 clear 次数
    #[derive(Default)]
    struct CountingCartGateway {
        clear_calls: Mutex<u32>,
        server_lines: Mutex<Vec<CartItemDto>>,
    }

    #[async_trait(?Send)]
    impl CartGateway for CountingCartGateway {
        async fn fetch(&self, _user_id: u64) -> ApiResult<Vec<CartItemDto>> {
            Ok(self.server_lines.lock().unwrap().clone())
        }

        async fn add(&self, _user_id: u64, _product_id: u64, _quantity: u32) -> ApiResult<()> {
            Ok(())
        }

        async fn update(&self, _user_id: u64, _product_id: u64, _quantity: u32) -> ApiResult<()> {
            Ok(())
        }

        async fn remove(&self, _user_id: u64, _product_id: u64) -> ApiResult<()> {
            Ok(())
        }

        async fn clear(&self, _user_id: u64) -> ApiResult<()> {
            *self.clear_calls.lock().unwrap() += 1;
            Ok(())
        }
    }

    fn customer(user_id: u64) -> User {
        User {
            user_id,
            full_name: "Marie Blanchard".into(),
            email: "marie@example.com".into(),
            phone_number: None,
            role: Role::Customer,
            profile_picture: None,
        }
    }

    fn seeded_checkout() -> (Arc<MockOrderGateway>, Arc<CountingCartGateway>, Checkout) {
        let orders = Arc::new(MockOrderGateway::new());
        let cart_gateway = Arc::new(CountingCartGateway::default());
        *cart_gateway.server_lines.lock().unwrap() = vec![CartItemDto {
            product_id: 42,
            name: "Sourdough".into(),
            image: String::new(),
            price: Decimal::new(999, 2),
            quantity: 2,
        }];

        let toaster = Toaster::new();
        let user = RwSignal::new(Some(customer(7)));
        let cart = CartStore::new(user.into(), cart_gateway.clone(), toaster);
        let checkout = Checkout::new(cart, orders.clone(), user.into(), toaster);
        (orders, cart_gateway, checkout)
    }

    fn fill_address(form: &AddressForm) {
        form.street.set("1 Rue du Four".into());
        form.city.set("Lyon".into());
        form.input_state("AR");
        form.input_zip("69001");
    }

    #[tokio::test]
    async fn missing_required_field_blocks_submission() {
        let (orders, _, checkout) = seeded_checkout();
        checkout.cart.refresh().await.unwrap();
        checkout.begin();
        assert!(checkout.dialog_open.get_untracked());

        // 街道为空：不发出任何下单请求
        checkout.form.city.set("Lyon".into());
        checkout.form.input_zip("69001");
        let err = checkout.confirm().await.unwrap_err();
        assert_eq!(err.message(), "Street is required");
        assert_eq!(orders.created_count(), 0);
        assert!(checkout.dialog_open.get_untracked());
    }

    #[tokio::test]
    async fn successful_confirm_creates_once_and_clears_once() {
        let (orders, cart_gateway, checkout) = seeded_checkout();
        checkout.cart.refresh().await.unwrap();
        checkout.begin();
        fill_address(&checkout.form);

        let order = checkout.confirm().await.unwrap();

        assert_eq!(orders.created_count(), 1);
        assert_eq!(*cart_gateway.clear_calls.lock().unwrap(), 1);
        assert_eq!(order.total_amount, Decimal::new(1998, 2));
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);

        // 成功后：弹窗关闭、表单重置、本地购物车清空
        assert!(!checkout.dialog_open.get_untracked());
        assert!(checkout.form.street.get_untracked().is_empty());
        assert!(checkout.cart.is_empty());
    }

    #[tokio::test]
    async fn failed_submission_keeps_dialog_open_and_cart_intact() {
        let (orders, cart_gateway, checkout) = seeded_checkout();
        checkout.cart.refresh().await.unwrap();
        checkout.begin();
        fill_address(&checkout.form);
        orders.fail_next();

        let err = checkout.confirm().await.unwrap_err();
        assert_eq!(err.message(), "Bakery is closed");

        assert!(checkout.dialog_open.get_untracked());
        assert_eq!(*cart_gateway.clear_calls.lock().unwrap(), 0);
        assert_eq!(checkout.cart.lines_untracked().len(), 1);
        assert!(!checkout.submitting.get_untracked());
    }

    #[tokio::test]
    async fn begin_requires_nonempty_cart() {
        let (_, _, checkout) = seeded_checkout();
        // 未 refresh：本地购物车为空
        checkout.begin();
        assert!(!checkout.dialog_open.get_untracked());
    }

    #[tokio::test]
    async fn state_and_zip_inputs_are_filtered() {
        let form = AddressForm::new();
        form.input_state("Rh0ne Alpes!");
        form.input_zip("69-001");
        assert_eq!(form.state.get_untracked(), "Rhne Alpes");
        assert_eq!(form.zip_code.get_untracked(), "69001");
    }
}
