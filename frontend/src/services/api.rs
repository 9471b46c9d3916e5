use gloo::net::http::{Request, RequestBuilder, Response};
use shared::{
    ApiResponse, CreateExpenseRequest, CreateUserRequest, LoginRequest, RegisterRequest,
    UpdateExpenseRequest, UpdateUserRequest,
};

const DEFAULT_BASE_URL: &str = "https://expense-tracking2.onrender.com";

/// API client for the remote expense-tracking service. One method per
/// endpoint; each returns the normalized response, or a transport-level
/// error string for the UI to show.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn bearer(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Fold status, content type, and body into the uniform
    /// {ok, status, data} shape. A body that cannot be read becomes the
    /// fixed substitute payload instead of an error.
    async fn normalize(response: Response) -> ApiResponse {
        let status = response.status();
        if status == 204 {
            return ApiResponse::from_body(status, None, "");
        }
        let content_type = response.headers().get("content-type");
        match response.text().await {
            Ok(body) => ApiResponse::from_body(status, content_type.as_deref(), &body),
            Err(_) => ApiResponse::unreadable(status),
        }
    }

    // ==================== Users ====================

    pub async fn list_users(&self, token: Option<&str>) -> Result<ApiResponse, String> {
        let url = format!("{}/users", self.base_url);
        match Self::bearer(Request::get(&url), token).send().await {
            Ok(response) => Ok(Self::normalize(response).await),
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn get_user(&self, id: i64, token: Option<&str>) -> Result<ApiResponse, String> {
        let url = format!("{}/users/{}", self.base_url, id);
        match Self::bearer(Request::get(&url), token).send().await {
            Ok(response) => Ok(Self::normalize(response).await),
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn create_user(
        &self,
        request: &CreateUserRequest,
        token: Option<&str>,
    ) -> Result<ApiResponse, String> {
        let url = format!("{}/users", self.base_url);
        match Self::bearer(Request::post(&url), token)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => Ok(Self::normalize(response).await),
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn update_user(
        &self,
        id: i64,
        request: &UpdateUserRequest,
        token: Option<&str>,
    ) -> Result<ApiResponse, String> {
        let url = format!("{}/users/{}", self.base_url, id);
        match Self::bearer(Request::patch(&url), token)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => Ok(Self::normalize(response).await),
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn delete_user(&self, id: i64, token: Option<&str>) -> Result<ApiResponse, String> {
        let url = format!("{}/users/{}", self.base_url, id);
        match Self::bearer(Request::delete(&url), token).send().await {
            Ok(response) => Ok(Self::normalize(response).await),
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    // ==================== Expenses ====================

    pub async fn list_expenses(&self, token: Option<&str>) -> Result<ApiResponse, String> {
        let url = format!("{}/expenses", self.base_url);
        match Self::bearer(Request::get(&url), token).send().await {
            Ok(response) => Ok(Self::normalize(response).await),
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn get_expense(&self, id: i64, token: Option<&str>) -> Result<ApiResponse, String> {
        let url = format!("{}/expenses/{}", self.base_url, id);
        match Self::bearer(Request::get(&url), token).send().await {
            Ok(response) => Ok(Self::normalize(response).await),
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn expenses_for_user(
        &self,
        user_id: i64,
        token: Option<&str>,
    ) -> Result<ApiResponse, String> {
        let url = format!("{}/expenses/user/{}", self.base_url, user_id);
        match Self::bearer(Request::get(&url), token).send().await {
            Ok(response) => Ok(Self::normalize(response).await),
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn create_expense(
        &self,
        request: &CreateExpenseRequest,
        token: Option<&str>,
    ) -> Result<ApiResponse, String> {
        let url = format!("{}/expenses", self.base_url);
        match Self::bearer(Request::post(&url), token)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => Ok(Self::normalize(response).await),
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn update_expense(
        &self,
        id: i64,
        request: &UpdateExpenseRequest,
        token: Option<&str>,
    ) -> Result<ApiResponse, String> {
        let url = format!("{}/expenses/{}", self.base_url, id);
        match Self::bearer(Request::patch(&url), token)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => Ok(Self::normalize(response).await),
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn delete_expense(
        &self,
        id: i64,
        token: Option<&str>,
    ) -> Result<ApiResponse, String> {
        let url = format!("{}/expenses/{}", self.base_url, id);
        match Self::bearer(Request::delete(&url), token).send().await {
            Ok(response) => Ok(Self::normalize(response).await),
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    // ==================== Auth ====================

    pub async fn register(&self, request: &RegisterRequest) -> Result<ApiResponse, String> {
        let url = format!("{}/auth/register", self.base_url);
        match Request::post(&url)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => Ok(Self::normalize(response).await),
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<ApiResponse, String> {
        let url = format!("{}/auth/login", self.base_url);
        match Request::post(&url)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => Ok(Self::normalize(response).await),
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_the_fixed_remote_base_url() {
        assert_eq!(ApiClient::new().base_url, DEFAULT_BASE_URL);
        assert_eq!(ApiClient::default().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_with_base_url_overrides_the_default() {
        let client = ApiClient::with_base_url("http://localhost:3000".to_string());
        assert_eq!(client.base_url, "http://localhost:3000");
    }
}
