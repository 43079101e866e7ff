//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM 或 web_sys。
//! 顾客端与后台端使用两棵互不重叠的路由树（两个独立枚举），
//! 由顶层应用状态机决定挂载哪一棵，绝不同时挂载。

use std::fmt::Display;

/// 路由树的公共能力：URL path 与路由枚举间的互转
///
/// 两棵路由树共享同一个路由引擎（[`crate::router::Router`]）。
pub trait RoutePath: Clone + Copy + PartialEq + Default + Send + Sync + 'static {
    /// 将 URL path 解析为路由，未知路径归入 NotFound
    fn from_path(path: &str) -> Self;

    /// 获取路由对应的 URL path
    fn to_path(&self) -> String;
}

// =========================================================
// 顾客端路由树
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    /// 商品目录
    Menu,
    /// 商品详情
    Product(u64),
    /// 购物车与结算
    Cart,
    /// 个人资料、订单历史与收藏
    Profile,
    Contact,
    About,
    NotFound,
}

impl RoutePath for CustomerRoute {
    fn from_path(path: &str) -> Self {
        if let Some(rest) = path.strip_prefix("/product/") {
            return match rest.parse::<u64>() {
                Ok(id) => Self::Product(id),
                Err(_) => Self::NotFound,
            };
        }
        match path {
            "/" | "" => Self::Home,
            "/menu" => Self::Menu,
            "/cart" => Self::Cart,
            "/profile" => Self::Profile,
            "/contact" => Self::Contact,
            "/about" => Self::About,
            _ => Self::NotFound,
        }
    }

    fn to_path(&self) -> String {
        match self {
            Self::Home => "/".into(),
            Self::Menu => "/menu".into(),
            Self::Product(id) => format!("/product/{}", id),
            Self::Cart => "/cart".into(),
            Self::Profile => "/profile".into(),
            Self::Contact => "/contact".into(),
            Self::About => "/about".into(),
            Self::NotFound => "/404".into(),
        }
    }
}

impl Display for CustomerRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

// =========================================================
// 后台路由树
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminRoute {
    /// 仪表盘 (默认路由)
    #[default]
    Dashboard,
    Products,
    Orders,
    Customers,
    Promotions,
    Settings,
    NotFound,
}

impl RoutePath for AdminRoute {
    fn from_path(path: &str) -> Self {
        match path {
            // 管理员会话下整页重载落在 "/" 时回到仪表盘
            "/" | "" | "/admin" => Self::Dashboard,
            "/admin/products" => Self::Products,
            "/admin/orders" => Self::Orders,
            "/admin/customers" => Self::Customers,
            "/admin/promotions" => Self::Promotions,
            "/admin/settings" => Self::Settings,
            _ => Self::NotFound,
        }
    }

    fn to_path(&self) -> String {
        match self {
            Self::Dashboard => "/admin".into(),
            Self::Products => "/admin/products".into(),
            Self::Orders => "/admin/orders".into(),
            Self::Customers => "/admin/customers".into(),
            Self::Promotions => "/admin/promotions".into(),
            Self::Settings => "/admin/settings".into(),
            Self::NotFound => "/404".into(),
        }
    }
}

impl Display for AdminRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

// =========================================================
// 单元测试
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_paths_roundtrip() {
        for route in [
            CustomerRoute::Home,
            CustomerRoute::Menu,
            CustomerRoute::Product(42),
            CustomerRoute::Cart,
            CustomerRoute::Profile,
            CustomerRoute::Contact,
            CustomerRoute::About,
        ] {
            assert_eq!(CustomerRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn customer_unknown_paths() {
        assert_eq!(
            CustomerRoute::from_path("/warehouse"),
            CustomerRoute::NotFound
        );
        assert_eq!(
            CustomerRoute::from_path("/product/abc"),
            CustomerRoute::NotFound
        );
    }

    #[test]
    fn admin_paths_roundtrip() {
        for route in [
            AdminRoute::Dashboard,
            AdminRoute::Products,
            AdminRoute::Orders,
            AdminRoute::Customers,
            AdminRoute::Promotions,
            AdminRoute::Settings,
        ] {
            assert_eq!(AdminRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn admin_root_falls_back_to_dashboard() {
        // 已认证管理员整页刷新时 URL 往往是 "/"
        assert_eq!(AdminRoute::from_path("/"), AdminRoute::Dashboard);
    }

    #[test]
    fn trees_do_not_overlap() {
        // 顾客树不认识后台路径，反之亦然
        assert_eq!(CustomerRoute::from_path("/admin"), CustomerRoute::NotFound);
        assert_eq!(AdminRoute::from_path("/menu"), AdminRoute::NotFound);
    }
}
