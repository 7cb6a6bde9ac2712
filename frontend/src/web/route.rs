//! 屏幕流转定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! `next_screen` 是电平触发的迁移函数：输入任意变化时重新求值，
//! 输入不变时必须返回 `None`（幂等）。

use rozkaam_shared::{Labour, UserProfile, UserRole};

use crate::queries::QueryState;

/// 应用屏幕枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// 启动闪屏（仅由定时器离开）
    #[default]
    Splash,
    Login,
    /// 角色选择
    SelectRole,
    /// 工人档案填写
    LabourSetup,
    LabourHome,
    /// 工人档案编辑（仅可从 LabourHome 进入）
    LabourEdit,
    CustomerHome,
}

/// 迁移函数的输入快照
#[derive(Debug, Clone)]
pub struct FlowInputs {
    /// 会话是否仍在初始化（恢复存量会话期间为 true）
    pub is_initializing: bool,
    pub is_authenticated: bool,
    pub user_profile: QueryState<Option<UserProfile>>,
    pub labour_profile: QueryState<Option<Labour>>,
}

/// 计算目标屏幕；无迁移时返回 `None`
///
/// 规则（按优先级）：
/// 1. 初始化中或闪屏上：不迁移
/// 2. 未认证：强制回登录页
/// 3. 用户档案未拿到结论：原地等待
/// 4. 档案缺失（含拉取失败）：去角色选择页
/// 5. 顾客：仅从 Login/SelectRole 进入 CustomerHome
/// 6. 工人：档案不完整去 LabourSetup；完整时仅从
///    Login/SelectRole/LabourSetup 进入 LabourHome
pub fn next_screen(current: Screen, inputs: &FlowInputs) -> Option<Screen> {
    if inputs.is_initializing || current == Screen::Splash {
        return None;
    }

    if !inputs.is_authenticated {
        return (current != Screen::Login).then_some(Screen::Login);
    }

    if !inputs.user_profile.is_settled() {
        return None;
    }
    // 拉取失败与 null 同样视为"未选择角色"
    let profile = inputs.user_profile.data().and_then(|p| p.as_ref());
    let Some(profile) = profile else {
        return (current != Screen::SelectRole).then_some(Screen::SelectRole);
    };

    match profile.role {
        UserRole::Customer => {
            // 不把用户从其它屏幕上拽走
            matches!(current, Screen::Login | Screen::SelectRole).then_some(Screen::CustomerHome)
        }
        UserRole::Labour => {
            if !inputs.labour_profile.is_settled() {
                return None;
            }
            let complete = inputs
                .labour_profile
                .data()
                .and_then(|l| l.as_ref())
                .is_some_and(Labour::is_complete);
            if !complete {
                (current != Screen::LabourSetup).then_some(Screen::LabourSetup)
            } else {
                matches!(current, Screen::Login | Screen::SelectRole | Screen::LabourSetup)
                    .then_some(Screen::LabourHome)
            }
        }
    }
}
