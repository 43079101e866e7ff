//! Fournil 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `routes` / `router`: 两棵互斥路由树与共享路由引擎
//! - `session` / `cart` / `checkout`: 显式注入依赖的状态存储
//! - `app`: 顶层应用状态机（闪屏 → 身份选择 → 登录 → 顾客端/后台）
//! - `api`: REST 客户端与各资源服务
//! - `components`: UI 组件层

mod api;
mod app;
mod cart;
mod checkout;
mod config;
mod log;
mod notify;
mod router;
mod routes;
mod session;

mod components {
    pub mod admin;
    pub mod auth_page;
    pub mod customer;
    pub(crate) mod icons;
    pub mod role_select;
    pub mod splash;
}

// 原生 Web API 封装模块
// 提供对浏览器原生 API 的轻量级封装，存储与导航都经由这里的
// trait 出口，便于测试注入。
pub(crate) mod web {
    pub mod navigation;
    pub mod storage;

    pub use navigation::{
        BrowserNavigator, Navigator, current_path, push_history_state, replace_history_state,
    };
    pub use storage::{KeyValueStore, LocalStorage};
}

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::Backend;
use crate::app::AppShell;
use crate::cart::CartStore;
use crate::config::ApiConfig;
use crate::notify::{ToastHost, Toaster};
use crate::session::SessionStore;
use crate::web::LocalStorage;

#[component]
pub fn App() -> impl IntoView {
    // 1. 后端服务与通知服务
    let backend = Backend::new(ApiConfig::from_env());
    let toaster = Toaster::new();

    // 2. 会话存储：从 LocalStorage 同步恢复一次
    let session = SessionStore::new(Arc::new(LocalStorage), Arc::new(backend.auth.clone()));
    session.hydrate();

    // 3. 购物车存储：用户信号注入，变更全部走网关
    let cart = CartStore::new(
        session.user_signal(),
        Arc::new(backend.cart.clone()),
        toaster,
    );

    provide_context(backend);
    provide_context(toaster);
    provide_context(session);
    provide_context(cart);

    view! {
        <AppShell />
        <ToastHost />
    }
}
