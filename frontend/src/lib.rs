//! RozKaam 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 屏幕流转定义（领域模型，纯逻辑）
//! - `web::router`: 路由服务（核心引擎，认证/缓存信号驱动）
//! - `auth`: 会话状态管理
//! - `queries`: 远程调用的缓存层
//! - `components`: UI 组件层

mod api;
mod auth;
mod queries;
mod whatsapp;
mod components {
    pub mod customer_home;
    mod icons;
    pub mod labour_edit;
    pub mod labour_home;
    pub mod labour_setup;
    pub mod login;
    mod profile_form;
    pub mod select_role;
    pub mod splash;
    pub mod toast;
}

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{AuthContext, init_auth, use_auth};
use crate::components::customer_home::CustomerHomeScreen;
use crate::components::labour_edit::LabourEditScreen;
use crate::components::labour_home::LabourHomeScreen;
use crate::components::labour_setup::LabourSetupScreen;
use crate::components::login::LoginScreen;
use crate::components::select_role::SelectRoleScreen;
use crate::components::splash::SplashScreen;
use crate::components::toast::{ToastHost, provide_toast};
use crate::queries::{QueryClient, QueryState, use_queries};

// 原生 Web API 封装模块
pub(crate) mod web {
    pub mod console;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use storage::LocalStorage;
}

use web::route::Screen;
use web::router::{Router, RouterInputs, RouterOutlet};

/// 屏幕匹配函数
fn screen_matcher(screen: Screen) -> AnyView {
    match screen {
        Screen::Splash => view! { <SplashScreen /> }.into_any(),
        Screen::Login => view! { <LoginScreen /> }.into_any(),
        Screen::SelectRole => view! { <SelectRoleScreen /> }.into_any(),
        Screen::LabourSetup => view! { <LabourSetupScreen /> }.into_any(),
        Screen::LabourHome => view! { <LabourHomeScreen /> }.into_any(),
        Screen::LabourEdit => view! { <LabourEditScreen /> }.into_any(),
        Screen::CustomerHome => view! { <CustomerHomeScreen /> }.into_any(),
    }
}

/// 认证就绪后填充档案缓存
///
/// enabled 守卫：后端句柄存在才发起；已有结论的缓存不重复拉取。
fn setup_prefetch() {
    let auth_ctx = use_auth();
    let queries = use_queries();

    Effect::new(move |_| {
        let state = auth_ctx.state.get();
        let Some(backend) = state.is_authenticated.then(|| state.backend.clone()).flatten() else {
            return;
        };

        if queries.user_profile.get_untracked() == QueryState::NotFetched {
            let backend = backend.clone();
            spawn_local(async move {
                queries.refetch_user_profile(&backend).await;
            });
        }
        if queries.labour_profile.get_untracked() == QueryState::NotFetched {
            spawn_local(async move {
                queries.refetch_labour_profile(&backend).await;
            });
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文与查询缓存（启动时创建，登出时清空）
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    let queries = QueryClient::new();
    provide_context(queries);
    provide_toast();

    // 2. 恢复存量会话（期间路由保持不动）
    init_auth(&auth_ctx, queries);

    // 3. 登录后自动拉取档案缓存
    setup_prefetch();

    // 4. 路由服务：注入认证与缓存信号实现守卫
    let inputs = RouterInputs {
        is_initializing: auth_ctx.is_initializing_signal(),
        is_authenticated: auth_ctx.is_authenticated_signal(),
        user_profile: queries.user_profile,
        labour_profile: queries.labour_profile,
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <Router inputs=inputs>
                <RouterOutlet matcher=screen_matcher />
            </Router>
            <ToastHost />
        </div>
    }
}
