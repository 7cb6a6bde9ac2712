use crate::{Labour, UserProfile, UserRole};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize + DeserializeOwned {
    /// The response type returned by this request.
    type Response: Serialize + DeserializeOwned;
    /// The URL path (or suffix).
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

// =========================================================
// Request Definitions
// =========================================================

/// Create an account with the chosen role.
/// Unit operations respond with JSON `null`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub role: UserRole,
}

impl ApiRequest for RegisterUserRequest {
    type Response = ();
    const PATH: &'static str = "/api/users/register";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Fetch the caller's lightweight profile, or `null` before a role is chosen.
#[derive(Debug, Serialize, Deserialize)]
pub struct GetCallerUserProfileRequest;

impl ApiRequest for GetCallerUserProfileRequest {
    type Response = Option<UserProfile>;
    const PATH: &'static str = "/api/users/me";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Fetch the caller's own labour profile, or `null` if none exists yet.
#[derive(Debug, Serialize, Deserialize)]
pub struct GetMyLabourProfileRequest;

impl ApiRequest for GetMyLabourProfileRequest {
    type Response = Option<Labour>;
    const PATH: &'static str = "/api/labours/me";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Whole-object upsert of the caller's labour profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateLabourProfileRequest {
    pub name: String,
    pub phone: String,
    pub skill: String,
    pub area: String,
    pub wage: u64,
}

impl ApiRequest for UpdateLabourProfileRequest {
    type Response = ();
    const PATH: &'static str = "/api/labours/me";
    const METHOD: HttpMethod = HttpMethod::Put;
}

/// Toggle the caller's availability flag without touching the rest of the profile.
#[derive(Debug, Serialize, Deserialize)]
pub struct SetLabourAvailabilityRequest {
    pub available: bool,
}

impl ApiRequest for SetLabourAvailabilityRequest {
    type Response = ();
    const PATH: &'static str = "/api/labours/me/availability";
    const METHOD: HttpMethod = HttpMethod::Put;
}

/// List labour profiles matching both filter tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListLaboursRequest {
    pub skill: String,
    pub area: String,
}

impl ApiRequest for ListLaboursRequest {
    type Response = Vec<Labour>;
    const PATH: &'static str = "/api/labours/search";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_use_get_and_carry_no_payload() {
        assert_eq!(GetCallerUserProfileRequest::METHOD, HttpMethod::Get);
        assert_eq!(GetMyLabourProfileRequest::METHOD, HttpMethod::Get);
    }

    #[test]
    fn profile_writes_share_the_resource_path() {
        // 读写同一资源，方法区分语义
        assert_eq!(GetMyLabourProfileRequest::PATH, UpdateLabourProfileRequest::PATH);
        assert_eq!(UpdateLabourProfileRequest::METHOD, HttpMethod::Put);
    }

    #[test]
    fn register_request_serializes_role_tag() {
        let body = serde_json::to_string(&RegisterUserRequest { role: UserRole::Labour }).unwrap();
        assert_eq!(body, r#"{"role":"labour"}"#);
    }

    #[test]
    fn list_request_carries_both_filters() {
        let body = serde_json::to_string(&ListLaboursRequest {
            skill: "plumbing".to_string(),
            area: "downtown".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"skill":"plumbing","area":"downtown"}"#);
    }
}
