//! 数据访问层
//!
//! 每个远程读取对应一个缓存键；变更成功后使相关缓存失效并立即重拉，
//! 失败则原样返回给调用屏幕，不做自动重试。
//! `QueryClient` 在启动时创建、登出时清空，替代隐式全局状态。

use std::rc::Rc;

use leptos::prelude::*;
use rozkaam_shared::protocol::UpdateLabourProfileRequest;
use rozkaam_shared::{Labour, UserProfile, UserRole};

use crate::api::{ApiError, Backend};
use crate::web::console;

/// 单个缓存键的状态
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryState<T> {
    /// 尚未发起过请求
    #[default]
    NotFetched,
    Loading,
    Ready(T),
    /// 请求失败；缓存数据视为缺失
    Failed(String),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// 是否已有结论（成功或失败）
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Ready(_) | Self::Failed(_))
    }

    pub fn data(&self) -> Option<&T> {
        if let Self::Ready(data) = self { Some(data) } else { None }
    }
}

/// 查询缓存
///
/// 档案类查询在此集中缓存；工人列表按 (skill, area) 维度
/// 由顾客首页自行持有，不进入全局缓存。
#[derive(Clone, Copy)]
pub struct QueryClient {
    pub user_profile: RwSignal<QueryState<Option<UserProfile>>>,
    pub labour_profile: RwSignal<QueryState<Option<Labour>>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            user_profile: RwSignal::new(QueryState::NotFetched),
            labour_profile: RwSignal::new(QueryState::NotFetched),
        }
    }

    /// 登出时清空所有缓存
    pub fn clear(&self) {
        self.user_profile.set(QueryState::NotFetched);
        self.labour_profile.set(QueryState::NotFetched);
    }

    pub async fn refetch_user_profile(&self, backend: &Rc<dyn Backend>) {
        self.user_profile.set(QueryState::Loading);
        match backend.get_caller_user_profile().await {
            Ok(profile) => self.user_profile.set(QueryState::Ready(profile)),
            Err(e) => {
                console::error(&format!("[Query] user profile fetch failed: {}", e));
                self.user_profile.set(QueryState::Failed(e.to_string()));
            }
        }
    }

    pub async fn refetch_labour_profile(&self, backend: &Rc<dyn Backend>) {
        self.labour_profile.set(QueryState::Loading);
        match backend.get_my_labour_profile().await {
            Ok(labour) => self.labour_profile.set(QueryState::Ready(labour)),
            Err(e) => {
                console::error(&format!("[Query] labour profile fetch failed: {}", e));
                self.labour_profile.set(QueryState::Failed(e.to_string()));
            }
        }
    }

    /// 注册角色；成功后重拉用户档案缓存
    pub async fn register_role(
        &self,
        backend: &Rc<dyn Backend>,
        role: UserRole,
    ) -> Result<(), ApiError> {
        backend.register(role).await?;
        self.refetch_user_profile(backend).await;
        Ok(())
    }

    /// 整体写入工人档案；成功后重拉工人档案缓存
    pub async fn update_labour_profile(
        &self,
        backend: &Rc<dyn Backend>,
        request: UpdateLabourProfileRequest,
    ) -> Result<(), ApiError> {
        backend.update_labour_profile(request).await?;
        self.refetch_labour_profile(backend).await;
        Ok(())
    }

    /// 切换可用状态；成功后重拉工人档案缓存
    pub async fn set_availability(
        &self,
        backend: &Rc<dyn Backend>,
        available: bool,
    ) -> Result<(), ApiError> {
        backend.set_labour_availability(available).await?;
        self.refetch_labour_profile(backend).await;
        Ok(())
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取查询缓存
pub fn use_queries() -> QueryClient {
    use_context::<QueryClient>().expect("QueryClient should be provided")
}
