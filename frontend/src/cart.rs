//! 购物车状态管理
//!
//! 本地购物车与服务端的同步策略：变更先走服务端，随后整体重拉一次
//! （最后一次拉取为准，不做增量合并）。所有变更都要求已登录用户，
//! 无会话时本地强制为空、变更被拒绝。
//!
//! `item_count` 与小计始终由行数据派生，从不单独存储，构造上不可能
//! 与行数据漂移。

use std::sync::Arc;

use fournil_shared::error::{ApiError, ApiResult};
use fournil_shared::{CartLine, User, cart_item_count, cart_subtotal};
use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::api::cart::CartGateway;
use crate::log::log_error;
use crate::notify::Toaster;

/// 购物车存储
#[derive(Clone)]
pub struct CartStore {
    lines: RwSignal<Vec<CartLine>>,
    user: Signal<Option<User>>,
    gateway: Arc<dyn CartGateway>,
    toaster: Toaster,
}

impl CartStore {
    pub fn new(user: Signal<Option<User>>, gateway: Arc<dyn CartGateway>, toaster: Toaster) -> Self {
        Self {
            lines: RwSignal::new(Vec::new()),
            user,
            gateway,
            toaster,
        }
    }

    // --- 派生值 ---

    pub fn lines(&self) -> Signal<Vec<CartLine>> {
        let lines = self.lines;
        Signal::derive(move || lines.get())
    }

    pub fn lines_untracked(&self) -> Vec<CartLine> {
        self.lines.get_untracked()
    }

    /// 各行数量之和
    pub fn item_count(&self) -> Signal<u32> {
        let lines = self.lines;
        Signal::derive(move || lines.with(|l| cart_item_count(l)))
    }

    pub fn subtotal(&self) -> Signal<Decimal> {
        let lines = self.lines;
        Signal::derive(move || lines.with(|l| cart_subtotal(l)))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.with_untracked(Vec::is_empty)
    }

    // --- 同步操作 ---

    /// 变更操作的用户门槛：无会话时本地清空并拒绝
    fn require_user(&self) -> ApiResult<u64> {
        match self.user.get_untracked() {
            Some(user) => Ok(user.user_id),
            None => {
                self.lines.set(Vec::new());
                Err(ApiError::auth_required())
            }
        }
    }

    /// 拉取服务端购物车并整体替换本地行
    pub async fn refresh(&self) -> ApiResult<()> {
        let Some(user) = self.user.get_untracked() else {
            self.lines.set(Vec::new());
            return Ok(());
        };
        let items = self.gateway.fetch(user.user_id).await?;
        self.lines
            .set(items.into_iter().map(CartLine::from).collect());
        Ok(())
    }

    /// 加入购物车：调用端点后无条件 refresh 对账
    ///
    /// 成功与失败都会通知用户；失败同时抛给调用方。
    pub async fn add_to_cart(&self, product_id: u64, quantity: u32) -> ApiResult<()> {
        let user_id = self.require_user().map_err(|e| {
            self.toaster.error("Please sign in to add items to your cart");
            e
        })?;

        if let Err(e) = self.gateway.add(user_id, product_id, quantity).await {
            self.toaster.error(e.message());
            return Err(e);
        }
        self.refresh().await?;
        self.toaster.success("Added to cart");
        Ok(())
    }

    /// 移除一行：失败只通知，不再抛出
    pub async fn remove_from_cart(&self, product_id: u64) {
        let Ok(user_id) = self.require_user() else {
            self.toaster.error("Please sign in first");
            return;
        };

        let result = match self.gateway.remove(user_id, product_id).await {
            Ok(()) => self.refresh().await,
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            self.toaster.error(e.message());
        }
    }

    /// 调整数量：降到 0 以下转为移除，绝不产生零/负数量行
    pub async fn update_quantity(&self, product_id: u64, quantity: i64) -> ApiResult<()> {
        if quantity <= 0 {
            self.remove_from_cart(product_id).await;
            return Ok(());
        }

        let user_id = self.require_user().map_err(|e| {
            self.toaster.error("Please sign in first");
            e
        })?;

        if let Err(e) = self
            .gateway
            .update(user_id, product_id, quantity as u32)
            .await
        {
            self.toaster.error(e.message());
            return Err(e);
        }
        self.refresh().await
    }

    /// 清空购物车：本地立即清空，远端尽力而为
    ///
    /// 远端失败不打扰用户，留待下次 refresh 对账。
    pub async fn clear_cart(&self) {
        self.lines.set(Vec::new());
        if let Some(user) = self.user.get_untracked() {
            if let Err(e) = self.gateway.clear(user.user_id).await {
                log_error!("[Cart] Remote clear failed: {}", e);
            }
        }
    }

    /// 用户切换（登录、注销、换号）时的显式订阅入口：触发一次重拉
    pub async fn on_user_change(&self) {
        if let Err(e) = self.refresh().await {
            log_error!("[Cart] Refresh after user change failed: {}", e);
        }
    }
}

// =========================================================
// 单元测试
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fournil_shared::{CartItemDto, Role};
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// 服务端购物车的内存模拟：记录操作日志，可按操作名注入失败
    #[derive(Default)]
    struct MockCartGateway {
        log: Mutex<Vec<String>>,
        server_lines: Mutex<Vec<CartItemDto>>,
        fail_ops: Mutex<HashSet<&'static str>>,
    }

    impl MockCartGateway {
        fn new() -> Self {
            Self::default()
        }

        fn fail_on(&self, op: &'static str) {
            self.fail_ops.lock().unwrap().insert(op);
        }

        fn check(&self, op: &'static str) -> ApiResult<()> {
            if self.fail_ops.lock().unwrap().contains(op) {
                return Err(ApiError::server(format!("simulated {} failure", op)));
            }
            Ok(())
        }

        fn log_entries(&self) -> Vec<String> {
            self.log.lock().unwrap().clone()
        }

        fn count_op(&self, prefix: &str) -> usize {
            self.log
                .lock()
                .unwrap()
                .iter()
                .filter(|entry| entry.starts_with(prefix))
                .count()
        }

        fn seed(&self, items: Vec<CartItemDto>) {
            *self.server_lines.lock().unwrap() = items;
        }
    }

    fn dto(product_id: u64, price: Decimal, quantity: u32) -> CartItemDto {
        CartItemDto {
            product_id,
            name: format!("product-{}", product_id),
            image: String::new(),
            price,
            quantity,
        }
    }

    #[async_trait(?Send)]
    impl CartGateway for MockCartGateway {
        async fn fetch(&self, user_id: u64) -> ApiResult<Vec<CartItemDto>> {
            self.log.lock().unwrap().push(format!("fetch:{}", user_id));
            self.check("fetch")?;
            Ok(self.server_lines.lock().unwrap().clone())
        }

        async fn add(&self, user_id: u64, product_id: u64, quantity: u32) -> ApiResult<()> {
            self.log
                .lock()
                .unwrap()
                .push(format!("add:{}:{}:{}", user_id, product_id, quantity));
            self.check("add")?;
            let mut lines = self.server_lines.lock().unwrap();
            match lines.iter_mut().find(|l| l.product_id == product_id) {
                Some(line) => line.quantity += quantity,
                None => lines.push(dto(product_id, Decimal::new(999, 2), quantity)),
            }
            Ok(())
        }

        async fn update(&self, user_id: u64, product_id: u64, quantity: u32) -> ApiResult<()> {
            self.log
                .lock()
                .unwrap()
                .push(format!("update:{}:{}:{}", user_id, product_id, quantity));
            self.check("update")?;
            if let Some(line) = self
                .server_lines
                .lock()
                .unwrap()
                .iter_mut()
                .find(|l| l.product_id == product_id)
            {
                line.quantity = quantity;
            }
            Ok(())
        }

        async fn remove(&self, user_id: u64, product_id: u64) -> ApiResult<()> {
            self.log
                .lock()
                .unwrap()
                .push(format!("remove:{}:{}", user_id, product_id));
            self.check("remove")?;
            self.server_lines
                .lock()
                .unwrap()
                .retain(|l| l.product_id != product_id);
            Ok(())
        }

        async fn clear(&self, user_id: u64) -> ApiResult<()> {
            self.log.lock().unwrap().push(format!("clear:{}", user_id));
            self.check("clear")?;
            self.server_lines.lock().unwrap().clear();
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

    fn setup(user: Option<User>) -> (Arc<MockCartGateway>, Toaster, CartStore, RwSignal<Option<User>>) {
        let gateway = Arc::new(MockCartGateway::new());
        let toaster = Toaster::new();
        let user_signal = RwSignal::new(user);
        let store = CartStore::new(user_signal.into(), gateway.clone(), toaster);
        (gateway, toaster, store, user_signal)
    }

    #[tokio::test]
    async fn add_then_refresh_reconciles_count_and_subtotal() {
        // 空购物车加入商品 42 × 1，服务端返回 9.99 一行
        let (gateway, _, store, _) = setup(Some(customer(7)));

        store.add_to_cart(42, 1).await.unwrap();

        assert_eq!(store.item_count().get_untracked(), 1);
        assert_eq!(store.subtotal().get_untracked(), Decimal::new(999, 2));
        // add 之后无条件 refresh
        assert_eq!(
            gateway.log_entries(),
            vec!["add:7:42:1".to_string(), "fetch:7".to_string()]
        );
    }

    #[tokio::test]
    async fn item_count_matches_server_after_settled_refresh() {
        let (gateway, _, store, _) = setup(Some(customer(7)));

        store.add_to_cart(1, 2).await.unwrap();
        store.add_to_cart(2, 1).await.unwrap();
        store.update_quantity(1, 5).await.unwrap();

        let server_sum: u32 = gateway
            .server_lines
            .lock()
            .unwrap()
            .iter()
            .map(|l| l.quantity)
            .sum();
        assert_eq!(store.item_count().get_untracked(), server_sum);
        assert_eq!(store.item_count().get_untracked(), 6);
    }

    #[tokio::test]
    async fn zero_and_negative_quantity_delegate_to_remove() {
        for quantity in [0i64, -1] {
            let (gateway, _, store, _) = setup(Some(customer(7)));
            gateway.seed(vec![dto(42, Decimal::new(999, 2), 2)]);
            store.refresh().await.unwrap();

            store.update_quantity(42, quantity).await.unwrap();

            assert_eq!(gateway.count_op("remove:7:42"), 1);
            assert_eq!(gateway.count_op("update:"), 0);
            assert!(store.lines_untracked().is_empty());
        }
    }

    #[tokio::test]
    async fn mutations_without_user_are_rejected_and_cart_forced_empty() {
        let (gateway, toaster, store, _) = setup(None);

        let err = store.add_to_cart(42, 1).await.unwrap_err();
        assert!(err.is_auth_required());
        assert!(gateway.log_entries().is_empty());
        assert!(toaster.current().get_untracked().is_some());

        // refresh 无用户时强制清空且不出错
        store.refresh().await.unwrap();
        assert!(store.lines_untracked().is_empty());
        assert!(gateway.log_entries().is_empty());
    }

    #[tokio::test]
    async fn refresh_replaces_lines_wholesale() {
        let (gateway, _, store, _) = setup(Some(customer(7)));
        gateway.seed(vec![
            dto(1, Decimal::new(250, 2), 1),
            dto(2, Decimal::new(300, 2), 2),
        ]);
        store.refresh().await.unwrap();
        assert_eq!(store.lines_untracked().len(), 2);

        // 服务端变化后再次 refresh：最后一次拉取为准
        gateway.seed(vec![dto(3, Decimal::new(100, 2), 1)]);
        store.refresh().await.unwrap();
        let lines = store.lines_untracked();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product_id, 3);
    }

    #[tokio::test]
    async fn clear_cart_is_optimistic_and_swallows_remote_failure() {
        let (gateway, toaster, store, _) = setup(Some(customer(7)));
        gateway.seed(vec![dto(1, Decimal::new(250, 2), 1)]);
        store.refresh().await.unwrap();
        assert!(!store.is_empty());

        gateway.fail_on("clear");
        store.clear_cart().await;

        // 本地立即清空，远端失败被吞掉，不产生用户通知
        assert!(store.is_empty());
        assert_eq!(gateway.count_op("clear:7"), 1);
        assert!(toaster.current().get_untracked().is_none());
    }

    #[tokio::test]
    async fn add_failure_notifies_and_propagates() {
        let (gateway, toaster, store, _) = setup(Some(customer(7)));
        gateway.fail_on("add");

        let err = store.add_to_cart(42, 1).await.unwrap_err();
        assert_eq!(err.message(), "simulated add failure");
        assert!(toaster.current().get_untracked().is_some());
        // add 失败后不 refresh
        assert_eq!(gateway.count_op("fetch:"), 0);
        assert!(store.lines_untracked().is_empty());
    }

    #[tokio::test]
    async fn remove_failure_is_reported_but_not_rethrown() {
        let (gateway, toaster, store, _) = setup(Some(customer(7)));
        gateway.seed(vec![dto(42, Decimal::new(999, 2), 1)]);
        store.refresh().await.unwrap();

        gateway.fail_on("remove");
        store.remove_from_cart(42).await;

        assert!(toaster.current().get_untracked().is_some());
        // 本地行保持不变，留待下次 refresh
        assert_eq!(store.lines_untracked().len(), 1);
    }

    #[tokio::test]
    async fn user_change_triggers_single_refresh() {
        let (gateway, _, store, user_signal) = setup(Some(customer(7)));
        gateway.seed(vec![dto(1, Decimal::new(250, 2), 1)]);

        store.on_user_change().await;
        assert_eq!(gateway.count_op("fetch:7"), 1);
        assert_eq!(store.item_count().get_untracked(), 1);

        // 注销：本地清空，不再访问服务端
        user_signal.set(None);
        store.on_user_change().await;
        assert!(store.lines_untracked().is_empty());
        assert_eq!(gateway.count_op("fetch:"), 1);
    }
}
