//! 认证模块
//!
//! 管理会话状态，与路由系统解耦：路由服务只消费注入的信号。
//! 身份提供方的内部实现不在本应用范围内，这里只持有它发放的
//! 不透明会话令牌，并在每次启动时校验存量令牌是否仍然有效。

use std::rc::Rc;

use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, ApiError, Backend};
use crate::queries::{QueryClient, QueryState};
use crate::web::console;

const STORAGE_SESSION_KEY: &str = "rozkaam_session";
const SESSION_ENDPOINT: &str = "/api/auth/session";

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// 后端句柄（仅在认证成功后存在）
    pub backend: Option<Rc<dyn Backend>>,
    pub is_authenticated: bool,
    /// 恢复存量会话期间为 true，路由在此期间不迁移
    pub is_initializing: bool,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
/// `AuthState` 持有 `Rc` 句柄，信号必须使用线程本地存储
/// （此处的 `LocalStorage` 是响应式系统的存储标记，
/// 与 `web::LocalStorage` 无关）。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState, LocalStorage>,
    pub set_state: WriteSignal<AuthState, LocalStorage>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal_local(AuthState::default());
        Self { state, set_state }
    }

    /// 认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }

    /// 初始化状态信号（用于路由服务注入）
    pub fn is_initializing_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_initializing)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 向身份服务换取不透明会话令牌
async fn request_session() -> Result<String, ApiError> {
    let response = Request::post(SESSION_ENDPOINT)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<String>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// 初始化认证状态
///
/// 存在存量令牌时先异步探测其有效性；探测结果顺便填充
/// 用户档案缓存，避免登录后的重复请求。
pub fn init_auth(ctx: &AuthContext, queries: QueryClient) {
    let Some(token) = crate::web::LocalStorage::get(STORAGE_SESSION_KEY) else {
        return;
    };

    ctx.set_state.update(|state| state.is_initializing = true);

    let set_state = ctx.set_state;
    spawn_local(async move {
        let backend: Rc<dyn Backend> = Rc::new(ApiClient::new(token));
        match backend.get_caller_user_profile().await {
            Ok(profile) => {
                queries.user_profile.set(QueryState::Ready(profile));
                set_state.update(|state| {
                    state.backend = Some(backend);
                    state.is_authenticated = true;
                    state.is_initializing = false;
                });
            }
            Err(e) => {
                console::log(&format!("[Auth] stored session rejected: {}", e));
                crate::web::LocalStorage::delete(STORAGE_SESSION_KEY);
                set_state.update(|state| state.is_initializing = false);
            }
        }
    });
}

/// 登录并保存状态
///
/// 换取令牌后用一次档案读取验证会话；成功才持久化令牌。
/// 返回登录是否成功。
pub async fn login(ctx: AuthContext, queries: QueryClient) -> bool {
    let Ok(token) = request_session().await else {
        return false;
    };

    let backend: Rc<dyn Backend> = Rc::new(ApiClient::new(token.clone()));
    match backend.get_caller_user_profile().await {
        Ok(profile) => {
            crate::web::LocalStorage::set(STORAGE_SESSION_KEY, &token);
            queries.user_profile.set(QueryState::Ready(profile));
            ctx.set_state.update(|state| {
                state.backend = Some(backend);
                state.is_authenticated = true;
            });
            true
        }
        Err(e) => {
            console::error(&format!("[Auth] session validation failed: {}", e));
            false
        }
    }
}

/// 注销：清除令牌、清空缓存
///
/// 导航由路由服务监听认证状态变化自动处理。
pub fn logout(ctx: AuthContext, queries: QueryClient) {
    crate::web::LocalStorage::delete(STORAGE_SESSION_KEY);
    queries.clear();
    ctx.set_state.update(|state| {
        state.backend = None;
        state.is_authenticated = false;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::MockBackend;

    #[test]
    fn context_signals_track_backend_handle() {
        // 状态里带 Rc 句柄，信号读写必须在单线程存储上工作
        let ctx = AuthContext::new();
        assert!(!ctx.is_authenticated_signal().get_untracked());
        assert!(ctx.state.get_untracked().backend.is_none());

        let backend: Rc<dyn Backend> = Rc::new(MockBackend::new());
        ctx.set_state.update(|state| {
            state.backend = Some(backend);
            state.is_authenticated = true;
        });

        assert!(ctx.is_authenticated_signal().get_untracked());
        assert!(ctx.state.get_untracked().backend.is_some());
    }

    #[test]
    fn initializing_signal_follows_state() {
        let ctx = AuthContext::new();
        assert!(!ctx.is_initializing_signal().get_untracked());

        ctx.set_state.update(|state| state.is_initializing = true);
        assert!(ctx.is_initializing_signal().get_untracked());
    }
}
