//! 路由服务模块 - 核心引擎
//!
//! 没有 URL 路由：当前屏幕完全由认证与档案状态驱动，
//! 通过 Signal 驱动界面更新。迁移规则在 `route::next_screen`
//! 中独立于渲染实现，这里只负责接线：
//! "输入变化 -> 重新求值 -> 更新屏幕"。

use leptos::prelude::*;
use rozkaam_shared::{Labour, UserProfile};

use super::console;
use super::route::{FlowInputs, Screen, next_screen};
use super::timer::Timeout;
use crate::queries::QueryState;

/// 闪屏固定停留时长
const SPLASH_DELAY_MS: u32 = 2_000;

/// 路由服务的注入输入
///
/// 认证与缓存信号由外部注入，路由服务不依赖其来源。
#[derive(Clone, Copy)]
pub struct RouterInputs {
    pub is_initializing: Signal<bool>,
    pub is_authenticated: Signal<bool>,
    pub user_profile: RwSignal<QueryState<Option<UserProfile>>>,
    pub labour_profile: RwSignal<QueryState<Option<Labour>>>,
}

/// 路由器服务
#[derive(Clone, Copy)]
pub struct RouterService {
    current_screen: ReadSignal<Screen>,
    set_screen: WriteSignal<Screen>,
}

impl RouterService {
    fn new() -> Self {
        let (current_screen, set_screen) = signal(Screen::Splash);
        Self { current_screen, set_screen }
    }

    /// 获取当前屏幕信号
    pub fn current_screen(&self) -> ReadSignal<Screen> {
        self.current_screen
    }

    /// 显式导航（主页 <-> 编辑页等用户主动跳转）
    ///
    /// 状态机会在下一次求值时校验该屏幕是否仍然合法。
    pub fn navigate(&self, screen: Screen) {
        console::log(&format!("[Router] navigate to {:?}", screen));
        self.set_screen.set(screen);
    }

    /// 闪屏定时器：2 秒后无条件进入登录页
    fn start_splash_timer(&self) {
        let current = self.current_screen;
        let set_screen = self.set_screen;
        Timeout::new(SPLASH_DELAY_MS, move || {
            if current.get_untracked() == Screen::Splash {
                console::log("[Router] splash finished, entering login");
                set_screen.set(Screen::Login);
            }
        })
        .forget();
    }

    /// 电平触发的屏幕求值
    ///
    /// 任何输入（认证状态、档案缓存、当前屏幕）变化都会重新执行；
    /// `next_screen` 幂等，输入不变时不会产生迁移。
    fn setup_flow(&self, inputs: RouterInputs) {
        let current = self.current_screen;
        let set_screen = self.set_screen;

        Effect::new(move |_| {
            let flow = FlowInputs {
                is_initializing: inputs.is_initializing.get(),
                is_authenticated: inputs.is_authenticated.get(),
                user_profile: inputs.user_profile.get(),
                labour_profile: inputs.labour_profile.get(),
            };
            let screen = current.get();

            if let Some(next) = next_screen(screen, &flow) {
                console::log(&format!("[Router] {:?} -> {:?}", screen, next));
                set_screen.set(next);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(inputs: RouterInputs) -> RouterService {
    let router = RouterService::new();

    router.start_splash_timer();
    router.setup_flow(inputs);

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件，应在 App 根部使用
#[component]
pub fn Router(
    /// 认证与缓存输入信号
    inputs: RouterInputs,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(inputs);

    children()
}

/// 路由出口组件
///
/// 根据当前屏幕渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 屏幕匹配函数：接收当前屏幕，返回对应视图
    matcher: fn(Screen) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_screen().get();
        matcher(current)
    }
}
