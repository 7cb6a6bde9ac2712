//! 全局通知组件
//!
//! 各屏幕通过 `ToastContext` 发布成功/失败消息，
//! `ToastHost` 统一渲染并在 3 秒后自动清除。

use leptos::prelude::*;

const TOAST_CLEAR_SECS: u64 = 3;

/// 单条通知；generation 标识其所属的定时清除任务
#[derive(Debug, Clone, PartialEq)]
struct Toast {
    message: String,
    is_error: bool,
    generation: u64,
}

/// 通知上下文
#[derive(Clone, Copy)]
pub struct ToastContext {
    state: RwSignal<Option<Toast>>,
    counter: RwSignal<u64>,
}

impl ToastContext {
    fn new() -> Self {
        Self {
            state: RwSignal::new(None),
            counter: RwSignal::new(0),
        }
    }

    fn post(&self, message: String, is_error: bool) {
        let generation = self.counter.get_untracked() + 1;
        self.counter.set(generation);
        self.state.set(Some(Toast { message, is_error, generation }));
    }

    pub fn success(&self, msg: impl Into<String>) {
        self.post(msg.into(), false);
    }

    pub fn error(&self, msg: impl Into<String>) {
        self.post(msg.into(), true);
    }

    /// 仅当当前通知仍是 `generation` 那一条时才清除。
    /// 过期的定时器不得清掉后发布的通知。
    fn clear_if_current(&self, generation: u64) {
        let is_current = self
            .state
            .with_untracked(|t| t.as_ref().is_some_and(|t| t.generation == generation));
        if is_current {
            self.state.set(None);
        }
    }
}

/// 提供通知上下文到 Context
pub fn provide_toast() -> ToastContext {
    let ctx = ToastContext::new();
    provide_context(ctx);
    ctx
}

/// 从 Context 获取通知上下文
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}

/// 通知宿主组件，应在 App 根部挂载一次
#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = use_toast();
    let state = toast.state;

    // 每条通知挂载自己的清除任务
    Effect::new(move |_| {
        if let Some(generation) = state.get().map(|t| t.generation) {
            set_timeout(
                move || toast.clear_if_current(generation),
                std::time::Duration::from_secs(TOAST_CLEAR_SECS),
            );
        }
    });

    view! {
        <Show when=move || state.get().is_some()>
            <div class="toast toast-top toast-center z-50">
                <div class=move || {
                    let is_error = state.get().map(|t| t.is_error).unwrap_or(false);
                    if is_error {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || state.get().map(|t| t.message)}</span>
                </div>
            </div>
        </Show>
    }
}
