use serde::{Deserialize, Serialize};

pub mod options;
pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_SESSION_KEY: &str = "X-Session-Token";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 账户角色，注册时选择，之后不可更改
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Customer,
    Labour,
}

/// 轻量用户档案
///
/// 仅用于判断"角色已选择"状态，name/phone 可能为空。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: Option<String>,
    pub role: UserRole,
    pub phone: Option<String>,
}

/// 服务端账户记录
///
/// 注册时由服务端创建，客户端只读。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub owner: String,
    pub role: UserRole,
    pub created_time: u64,
}

/// 工人档案
///
/// 通过 `UpdateLabourProfileRequest` 整体写入；`available` 可单独切换。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Labour {
    pub id: String,
    pub owner: String,
    pub name: String,
    pub phone: String,
    pub skill: String,
    pub area: String,
    /// 日薪（非负整数货币单位）
    pub wage: u64,
    pub available: bool,
    pub rating: u64,
    pub created_time: u64,
}

impl Labour {
    /// 档案是否完整：name/skill/area 非空且 wage > 0
    ///
    /// 不完整的档案会被路由送回档案填写页。
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.skill.is_empty() && !self.area.is_empty() && self.wage > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labour() -> Labour {
        Labour {
            id: "l-1".to_string(),
            owner: "acc-1".to_string(),
            name: "Ramesh".to_string(),
            phone: "+91 98765 43210".to_string(),
            skill: "plumbing".to_string(),
            area: "downtown".to_string(),
            wage: 500,
            available: true,
            rating: 4,
            created_time: 1_700_000_000_000,
        }
    }

    #[test]
    fn complete_profile_is_complete() {
        assert!(labour().is_complete());
    }

    #[test]
    fn empty_name_is_incomplete() {
        let mut l = labour();
        l.name = String::new();
        assert!(!l.is_complete());
    }

    #[test]
    fn empty_skill_is_incomplete() {
        let mut l = labour();
        l.skill = String::new();
        assert!(!l.is_complete());
    }

    #[test]
    fn empty_area_is_incomplete() {
        let mut l = labour();
        l.area = String::new();
        assert!(!l.is_complete());
    }

    #[test]
    fn zero_wage_is_incomplete() {
        let mut l = labour();
        l.wage = 0;
        assert!(!l.is_complete());
    }

    #[test]
    fn blank_remote_record_is_incomplete() {
        // 服务端可能返回全空的占位记录
        let l = Labour {
            id: String::new(),
            owner: String::new(),
            name: String::new(),
            phone: String::new(),
            skill: String::new(),
            area: String::new(),
            wage: 0,
            available: false,
            rating: 0,
            created_time: 0,
        };
        assert!(!l.is_complete());
    }

    #[test]
    fn role_serializes_as_snake_case_tag() {
        assert_eq!(serde_json::to_string(&UserRole::Labour).unwrap(), "\"labour\"");
        assert_eq!(serde_json::to_string(&UserRole::Customer).unwrap(), "\"customer\"");
    }

    #[test]
    fn user_profile_round_trips_optional_fields() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"name":null,"role":"customer","phone":null}"#).unwrap();
        assert_eq!(profile.role, UserRole::Customer);
        assert!(profile.name.is_none());
        assert!(profile.phone.is_none());
    }
}
