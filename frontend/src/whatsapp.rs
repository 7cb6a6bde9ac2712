//! WhatsApp 跳转
//!
//! 联系工人通过外部消息应用完成，本应用只负责拼出
//! `wa.me` 链接并打开新标签页，不与自身后端交换任何数据。

/// 由存储的电话号码生成聊天链接（去掉所有非数字字符）
pub fn chat_link(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}", digits)
}

/// 新标签页打开聊天窗口
pub fn open_chat(phone: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(&chat_link(phone), "_blank");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_strips_formatting_characters() {
        assert_eq!(chat_link("+91 98765-43210"), "https://wa.me/919876543210");
    }

    #[test]
    fn plain_digits_pass_through() {
        assert_eq!(chat_link("9876543210"), "https://wa.me/9876543210");
    }

    #[test]
    fn link_tolerates_empty_phone() {
        assert_eq!(chat_link(""), "https://wa.me/");
    }
}
