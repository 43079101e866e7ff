//! API 层
//!
//! `client` 是唯一的 HTTP 通道；每个后端资源对应一个服务。
//! 存储层（会话、购物车、结算）只依赖网关 trait，不依赖具体服务。

pub mod admin;
pub mod auth;
pub mod cart;
pub mod client;
pub mod contact;
pub mod favorites;
pub mod orders;
pub mod products;

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::web::{BrowserNavigator, LocalStorage};

pub use client::RestClient;

/// 全部后端服务的聚合，整个应用共享一份（通过 Context 注入）
#[derive(Clone)]
pub struct Backend {
    pub auth: auth::AuthService,
    pub products: products::ProductService,
    pub cart: cart::CartService,
    pub orders: orders::OrderService,
    pub admin: admin::AdminService,
    pub contact: contact::ContactService,
    pub favorites: favorites::FavoriteService,
}

impl Backend {
    pub fn new(config: ApiConfig) -> Self {
        let client = RestClient::new(
            config,
            Arc::new(LocalStorage),
            Arc::new(BrowserNavigator),
        );
        Self {
            auth: auth::AuthService::new(client.clone()),
            products: products::ProductService::new(client.clone()),
            cart: cart::CartService::new(client.clone()),
            orders: orders::OrderService::new(client.clone()),
            admin: admin::AdminService::new(client.clone()),
            contact: contact::ContactService::new(client.clone()),
            favorites: favorites::FavoriteService::new(client),
        }
    }
}

/// 从 Context 获取后端服务
pub fn use_backend() -> Backend {
    leptos::prelude::use_context::<Backend>().expect("Backend should be provided")
}
