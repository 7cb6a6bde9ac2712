//! 定时器封装模块
//!
//! 封装 `setTimeout` 的一次性定时器。`Timeout` 被 drop 时自动取消，
//! 与闪屏组件卸载时清除计时的语义一致。

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// 一次性定时器
pub struct Timeout {
    handle: i32,
    #[allow(dead_code)]
    closure: Closure<dyn FnMut()>,
}

impl Timeout {
    /// 创建定时器，`millis` 毫秒后触发一次 `callback`
    ///
    /// # Panics
    /// 如果无法获取 window 对象或设置定时器失败
    pub fn new<F>(millis: u32, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let closure = Closure::new(callback);
        let window = web_sys::window().expect("无法获取 window 对象");

        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis as i32,
            )
            .expect("设置定时器失败");

        Self { handle, closure }
    }

    /// 取消定时器；drop 时会自动调用
    pub fn cancel(&self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }

    /// 放弃所有权，让定时器存活到触发为止
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.cancel();
    }
}
