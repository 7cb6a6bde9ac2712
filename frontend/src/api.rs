//! 后端客户端
//!
//! `Backend` trait 定义远程服务的能力接口，屏蔽具体传输方式；
//! `ApiClient` 是基于 `gloo-net` 的同源 HTTP 实现。
//! 测试通过 `tests::MockBackend` 替换传输层。

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use rozkaam_shared::protocol::{
    ApiRequest, GetCallerUserProfileRequest, GetMyLabourProfileRequest, HttpMethod,
    ListLaboursRequest, RegisterUserRequest, SetLabourAvailabilityRequest,
    UpdateLabourProfileRequest,
};
use rozkaam_shared::{HEADER_SESSION_KEY, Labour, UserProfile, UserRole};

/// 远程调用错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 客户端尚未就绪（会话缺失）
    NotReady,
    /// 网络请求失败
    Network(String),
    /// 服务端返回非 2xx 状态
    Status(u16),
    /// 响应解析失败
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::NotReady => write!(f, "client not ready"),
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Status(code) => write!(f, "server returned status {}", code),
            ApiError::Decode(msg) => write!(f, "response decode failed: {}", msg),
        }
    }
}

/// 远程服务能力接口
///
/// 与后端调用契约一一对应；路由与缓存层只依赖此 trait。
#[async_trait(?Send)]
pub trait Backend {
    async fn register(&self, role: UserRole) -> Result<(), ApiError>;
    async fn get_caller_user_profile(&self) -> Result<Option<UserProfile>, ApiError>;
    async fn get_my_labour_profile(&self) -> Result<Option<Labour>, ApiError>;
    async fn update_labour_profile(
        &self,
        request: UpdateLabourProfileRequest,
    ) -> Result<(), ApiError>;
    async fn set_labour_availability(&self, available: bool) -> Result<(), ApiError>;
    async fn list_labours(&self, skill: String, area: String) -> Result<Vec<Labour>, ApiError>;
}

/// 同源 HTTP 客户端
///
/// 每个请求携带会话令牌头；路径与方法由 `ApiRequest` 实现者给出。
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    session_token: String,
}

impl ApiClient {
    pub fn new(session_token: String) -> Self {
        Self { session_token }
    }

    fn builder(method: HttpMethod, path: &str) -> RequestBuilder {
        match method {
            HttpMethod::Get => Request::get(path),
            HttpMethod::Post => Request::post(path),
            HttpMethod::Put => Request::put(path),
        }
    }

    async fn send<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ApiError> {
        let builder =
            Self::builder(R::METHOD, R::PATH).header(HEADER_SESSION_KEY, &self.session_token);

        let response = match R::METHOD {
            HttpMethod::Get => builder.send().await,
            HttpMethod::Post | HttpMethod::Put => builder
                .header("Content-Type", "application/json")
                .json(request)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        response
            .json::<R::Response>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl Backend for ApiClient {
    async fn register(&self, role: UserRole) -> Result<(), ApiError> {
        self.send(&RegisterUserRequest { role }).await
    }

    async fn get_caller_user_profile(&self) -> Result<Option<UserProfile>, ApiError> {
        self.send(&GetCallerUserProfileRequest).await
    }

    async fn get_my_labour_profile(&self) -> Result<Option<Labour>, ApiError> {
        self.send(&GetMyLabourProfileRequest).await
    }

    async fn update_labour_profile(
        &self,
        request: UpdateLabourProfileRequest,
    ) -> Result<(), ApiError> {
        self.send(&request).await
    }

    async fn set_labour_availability(&self, available: bool) -> Result<(), ApiError> {
        self.send(&SetLabourAvailabilityRequest { available }).await
    }

    async fn list_labours(&self, skill: String, area: String) -> Result<Vec<Labour>, ApiError> {
        self.send(&ListLaboursRequest { skill, area }).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// 内存后端，模拟远程服务的状态与故障
    pub struct MockBackend {
        pub profile: RefCell<Option<UserProfile>>,
        pub labour: RefCell<Option<Labour>>,
        pub labours: RefCell<Vec<Labour>>,
        pub list_calls: Cell<usize>,
        pub update_calls: Cell<usize>,
        /// 为 true 时所有调用返回 Status(500)
        pub failing: Cell<bool>,
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self {
                profile: RefCell::new(None),
                labour: RefCell::new(None),
                labours: RefCell::new(Vec::new()),
                list_calls: Cell::new(0),
                update_calls: Cell::new(0),
                failing: Cell::new(false),
            }
        }

        pub fn with_profile(self, role: UserRole) -> Self {
            *self.profile.borrow_mut() = Some(UserProfile {
                name: None,
                role,
                phone: None,
            });
            self
        }

        pub fn with_labour(self, labour: Labour) -> Self {
            *self.labour.borrow_mut() = Some(labour);
            self
        }

        pub fn sample_labour(available: bool) -> Labour {
            Labour {
                id: "l-1".to_string(),
                owner: "acc-1".to_string(),
                name: "Ramesh".to_string(),
                phone: "+91 98765 43210".to_string(),
                skill: "plumbing".to_string(),
                area: "downtown".to_string(),
                wage: 500,
                available,
                rating: 4,
                created_time: 1_700_000_000_000,
            }
        }

        fn check(&self) -> Result<(), ApiError> {
            if self.failing.get() {
                Err(ApiError::Status(500))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl Backend for MockBackend {
        async fn register(&self, role: UserRole) -> Result<(), ApiError> {
            self.check()?;
            *self.profile.borrow_mut() = Some(UserProfile {
                name: None,
                role,
                phone: None,
            });
            Ok(())
        }

        async fn get_caller_user_profile(&self) -> Result<Option<UserProfile>, ApiError> {
            self.check()?;
            Ok(self.profile.borrow().clone())
        }

        async fn get_my_labour_profile(&self) -> Result<Option<Labour>, ApiError> {
            self.check()?;
            Ok(self.labour.borrow().clone())
        }

        async fn update_labour_profile(
            &self,
            request: UpdateLabourProfileRequest,
        ) -> Result<(), ApiError> {
            self.check()?;
            self.update_calls.set(self.update_calls.get() + 1);
            let mut labour = self.labour.borrow_mut();
            let previous = labour.take();
            *labour = Some(Labour {
                id: previous.as_ref().map(|l| l.id.clone()).unwrap_or_else(|| "l-new".to_string()),
                owner: "acc-1".to_string(),
                name: request.name,
                phone: request.phone,
                skill: request.skill,
                area: request.area,
                wage: request.wage,
                available: previous.as_ref().map(|l| l.available).unwrap_or(true),
                rating: previous.as_ref().map(|l| l.rating).unwrap_or(0),
                created_time: previous.map(|l| l.created_time).unwrap_or(0),
            });
            Ok(())
        }

        async fn set_labour_availability(&self, available: bool) -> Result<(), ApiError> {
            self.check()?;
            if let Some(labour) = self.labour.borrow_mut().as_mut() {
                labour.available = available;
            }
            Ok(())
        }

        async fn list_labours(&self, skill: String, area: String) -> Result<Vec<Labour>, ApiError> {
            self.check()?;
            self.list_calls.set(self.list_calls.get() + 1);
            Ok(self
                .labours
                .borrow()
                .iter()
                .filter(|l| l.skill == skill && l.area == area && l.available)
                .cloned()
                .collect())
        }
    }

    #[tokio::test]
    async fn mock_listing_matches_both_tags_only() {
        let backend = MockBackend::new();
        let mut other_area = MockBackend::sample_labour(true);
        other_area.id = "l-2".to_string();
        other_area.area = "riverside".to_string();
        backend
            .labours
            .borrow_mut()
            .extend([MockBackend::sample_labour(true), other_area]);

        let hits = backend
            .list_labours("plumbing".to_string(), "downtown".to_string())
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "l-1");
    }

    #[tokio::test]
    async fn failing_backend_surfaces_status_error() {
        let backend = MockBackend::new();
        backend.failing.set(true);
        let result = backend.get_caller_user_profile().await;
        assert_eq!(result, Err(ApiError::Status(500)));
    }
}
