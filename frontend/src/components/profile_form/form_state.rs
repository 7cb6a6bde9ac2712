//! 工人档案表单状态
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有与回填
//! - 提交前的本地校验（校验失败不发起任何远程调用）
//! - 数据到更新请求的转换

use leptos::prelude::*;
use rozkaam_shared::options;
use rozkaam_shared::protocol::UpdateLabourProfileRequest;
use rozkaam_shared::Labour;

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，适合作为 Props 传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub name: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub skill: RwSignal<String>,
    pub area: RwSignal<String>,
    /// 日薪的原始输入文本，提交时才解析
    pub wage: RwSignal<String>,
    /// 仅档案填写页展示；更新请求不携带此字段
    pub available: RwSignal<bool>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            skill: RwSignal::new(String::new()),
            area: RwSignal::new(String::new()),
            wage: RwSignal::new(String::new()),
            available: RwSignal::new(true),
        }
    }

    /// 从已有档案回填表单（编辑页）
    pub fn prefill(&self, labour: &Labour) {
        self.name.set(labour.name.clone());
        self.phone.set(labour.phone.clone());
        self.skill.set(labour.skill.clone());
        self.area.set(labour.area.clone());
        self.wage.set(labour.wage.to_string());
        self.available.set(labour.available);
    }

    /// 校验并生成更新请求
    ///
    /// 规则：name/phone 去除首尾空白后非空；skill/area 必须来自
    /// 固定选项表；wage 必须是正整数。返回首个失败项的用户提示。
    pub fn validate(&self) -> Result<UpdateLabourProfileRequest, String> {
        let name = self.name.get_untracked().trim().to_string();
        if name.is_empty() {
            return Err("Please enter your name".to_string());
        }

        let phone = self.phone.get_untracked().trim().to_string();
        if phone.is_empty() {
            return Err("Please enter your phone number".to_string());
        }

        let skill = self.skill.get_untracked();
        if !options::is_skill(&skill) {
            return Err("Please select a skill".to_string());
        }

        let area = self.area.get_untracked();
        if !options::is_area(&area) {
            return Err("Please select an area".to_string());
        }

        let wage = self
            .wage
            .get_untracked()
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|wage| *wage > 0)
            .ok_or_else(|| "Please enter a valid daily wage".to_string())?;

        Ok(UpdateLabourProfileRequest { name, phone, skill, area, wage })
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::api::tests::MockBackend;
    use crate::api::Backend;
    use crate::queries::QueryClient;

    fn filled_form() -> FormState {
        let form = FormState::new();
        form.name.set("Ramesh".to_string());
        form.phone.set("9876543210".to_string());
        form.skill.set("plumbing".to_string());
        form.area.set("downtown".to_string());
        form.wage.set("500".to_string());
        form
    }

    #[test]
    fn valid_form_produces_request() {
        let request = filled_form().validate().unwrap();
        assert_eq!(request.name, "Ramesh");
        assert_eq!(request.skill, "plumbing");
        assert_eq!(request.wage, 500);
    }

    #[test]
    fn name_and_phone_are_trimmed() {
        let form = filled_form();
        form.name.set("  Ramesh  ".to_string());
        form.phone.set(" 9876543210 ".to_string());
        let request = form.validate().unwrap();
        assert_eq!(request.name, "Ramesh");
        assert_eq!(request.phone, "9876543210");
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let form = filled_form();
        form.name.set("   ".to_string());
        assert_eq!(form.validate().unwrap_err(), "Please enter your name");
    }

    #[test]
    fn empty_phone_is_rejected() {
        let form = filled_form();
        form.phone.set(String::new());
        assert_eq!(form.validate().unwrap_err(), "Please enter your phone number");
    }

    #[test]
    fn unselected_skill_is_rejected() {
        let form = filled_form();
        form.skill.set(String::new());
        assert_eq!(form.validate().unwrap_err(), "Please select a skill");
    }

    #[test]
    fn skill_outside_option_table_is_rejected() {
        let form = filled_form();
        form.skill.set("hacking".to_string());
        assert!(form.validate().is_err());
    }

    #[test]
    fn unselected_area_is_rejected() {
        let form = filled_form();
        form.area.set(String::new());
        assert_eq!(form.validate().unwrap_err(), "Please select an area");
    }

    #[test]
    fn zero_wage_is_rejected() {
        let form = filled_form();
        form.wage.set("0".to_string());
        assert_eq!(form.validate().unwrap_err(), "Please enter a valid daily wage");
    }

    #[test]
    fn non_numeric_wage_is_rejected() {
        for raw in ["", "abc", "-5", "12.5"] {
            let form = filled_form();
            form.wage.set(raw.to_string());
            assert!(form.validate().is_err(), "wage {:?} should be rejected", raw);
        }
    }

    #[tokio::test]
    async fn rejected_form_issues_no_remote_write() {
        // 校验失败的提交路径不得触达后端
        let form = filled_form();
        form.wage.set("abc".to_string());

        let backend = Rc::new(MockBackend::new());
        let queries = QueryClient::new();
        if let Ok(request) = form.validate() {
            let handle: Rc<dyn Backend> = backend.clone();
            queries.update_labour_profile(&handle, request).await.unwrap();
        }

        assert_eq!(backend.update_calls.get(), 0);
    }

    #[tokio::test]
    async fn valid_form_issues_exactly_one_write() {
        let backend = Rc::new(MockBackend::new());
        let queries = QueryClient::new();
        let request = filled_form().validate().unwrap();

        let handle: Rc<dyn Backend> = backend.clone();
        queries.update_labour_profile(&handle, request).await.unwrap();

        assert_eq!(backend.update_calls.get(), 1);
    }

    #[test]
    fn prefill_copies_profile_fields() {
        let labour = Labour {
            id: "l-1".to_string(),
            owner: "acc-1".to_string(),
            name: "Ramesh".to_string(),
            phone: "9876543210".to_string(),
            skill: "welding".to_string(),
            area: "riverside".to_string(),
            wage: 700,
            available: false,
            rating: 5,
            created_time: 0,
        };
        let form = FormState::new();
        form.prefill(&labour);
        assert_eq!(form.wage.get_untracked(), "700");
        assert_eq!(form.skill.get_untracked(), "welding");
        assert!(!form.available.get_untracked());
        assert!(form.validate().is_ok());
    }
}
