use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

// ==================== Request payloads ====================

/// Request for creating a new user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// Request for partially updating an existing user (PATCH semantics,
/// absent fields are left untouched by the server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Request for creating a new expense. Field names follow the remote
/// API's camelCase convention on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    pub category: String,
    pub sub_category: String,
    pub description: String,
    pub amount: f64,
    /// ISO 8601 date (YYYY-MM-DD)
    pub date: String,
    pub user_id: i64,
}

/// Request for partially updating an existing expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpenseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Request for registering a new account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request for logging in with existing credentials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ==================== Form validation ====================

/// Validation failure for a form field. Rendered directly in the UI,
/// so messages are written for people, not logs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} must be a whole number")]
    InvalidId(&'static str),
    #[error("Amount must be a positive number")]
    InvalidAmount,
    #[error("Date must be in YYYY-MM-DD format")]
    InvalidDate,
    #[error("Please fill at least one field to update")]
    NothingToUpdate,
}

/// Parse a required numeric id field.
pub fn parse_id(input: &str, field: &'static str) -> Result<i64, FormError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required(field));
    }
    trimmed.parse().map_err(|_| FormError::InvalidId(field))
}

/// Parse a required amount field: must be numeric and strictly positive.
pub fn parse_amount(input: &str) -> Result<f64, FormError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required("Amount"));
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(FormError::InvalidAmount),
    }
}

/// Parse a required date field as an ISO 8601 calendar date. HTML date
/// inputs emit exactly this shape, so anything else is a typo.
pub fn parse_date(input: &str) -> Result<String, FormError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required("Date"));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|_| trimmed.to_string())
        .map_err(|_| FormError::InvalidDate)
}

fn required(input: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn optional(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl CreateUserRequest {
    pub fn from_form(name: &str, email: &str) -> Result<Self, FormError> {
        Ok(Self {
            name: required(name, "Name")?,
            email: required(email, "Email")?,
        })
    }
}

impl UpdateUserRequest {
    /// Builds a partial update; rejects the form when no field is filled.
    pub fn from_form(name: &str, email: &str) -> Result<Self, FormError> {
        let request = Self {
            name: optional(name),
            email: optional(email),
        };
        if request.name.is_none() && request.email.is_none() {
            return Err(FormError::NothingToUpdate);
        }
        Ok(request)
    }
}

impl CreateExpenseRequest {
    pub fn from_form(
        category: &str,
        sub_category: &str,
        description: &str,
        amount: &str,
        date: &str,
        user_id: &str,
    ) -> Result<Self, FormError> {
        Ok(Self {
            category: required(category, "Category")?,
            sub_category: required(sub_category, "Sub Category")?,
            description: description.trim().to_string(),
            amount: parse_amount(amount)?,
            date: parse_date(date)?,
            user_id: parse_id(user_id, "User ID")?,
        })
    }
}

impl UpdateExpenseRequest {
    pub fn from_form(
        category: &str,
        sub_category: &str,
        description: &str,
        amount: &str,
        date: &str,
    ) -> Result<Self, FormError> {
        let request = Self {
            category: optional(category),
            sub_category: optional(sub_category),
            description: optional(description),
            amount: match optional(amount) {
                Some(raw) => Some(parse_amount(&raw)?),
                None => None,
            },
            date: match optional(date) {
                Some(raw) => Some(parse_date(&raw)?),
                None => None,
            },
        };
        if request.category.is_none()
            && request.sub_category.is_none()
            && request.description.is_none()
            && request.amount.is_none()
            && request.date.is_none()
        {
            return Err(FormError::NothingToUpdate);
        }
        Ok(request)
    }
}

impl RegisterRequest {
    pub fn from_form(name: &str, email: &str, password: &str) -> Result<Self, FormError> {
        Ok(Self {
            name: required(name, "Name")?,
            email: required(email, "Email")?,
            password: required(password, "Password")?,
        })
    }
}

impl LoginRequest {
    pub fn from_form(email: &str, password: &str) -> Result<Self, FormError> {
        Ok(Self {
            email: required(email, "Email")?,
            password: required(password, "Password")?,
        })
    }
}

// ==================== Normalized responses ====================

/// Substitute payload when a body advertised as JSON fails to parse
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON response";
/// Substitute payload when the body cannot be read at all
pub const UNREADABLE_BODY_MESSAGE: &str = "Could not read response";
/// Shown whenever any endpoint reports 401/403 and the session is torn down
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please log in again.";

/// Body of a normalized response
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
    /// 204 No Content
    Empty,
}

/// Uniform shape produced for every HTTP response regardless of its
/// content type: {ok, status, data}. Callers branch on `ok` and
/// `is_auth_failure` instead of re-inspecting headers.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub ok: bool,
    pub status: u16,
    pub data: Payload,
}

impl ApiResponse {
    /// Classify a response from its status, content type, and raw body.
    /// Never fails: malformed bodies become fixed substitute payloads.
    pub fn from_body(status: u16, content_type: Option<&str>, body: &str) -> Self {
        let ok = (200..300).contains(&status);
        if status == 204 {
            return Self {
                ok,
                status,
                data: Payload::Empty,
            };
        }
        let data = match content_type {
            Some(ct) if ct.contains("application/json") => match serde_json::from_str(body) {
                Ok(value) => Payload::Json(value),
                Err(_) => Payload::Json(json!({ "message": INVALID_JSON_MESSAGE })),
            },
            _ => Payload::Text(body.to_string()),
        };
        Self { ok, status, data }
    }

    /// Fallback when the body stream could not be read.
    pub fn unreadable(status: u16) -> Self {
        Self {
            ok: (200..300).contains(&status),
            status,
            data: Payload::Json(json!({ "message": UNREADABLE_BODY_MESSAGE })),
        }
    }

    /// True when the server reported the session invalid; the caller is
    /// expected to tear the session down.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status, 401 | 403)
    }

    pub fn json(&self) -> Option<&Value> {
        match &self.data {
            Payload::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Token field of a login response body
    pub fn login_token(&self) -> Option<&str> {
        self.json()?.get("token")?.as_str()
    }
}

// ==================== Session & auth state ====================

/// Claims embedded in the bearer token payload. Decoded client-side
/// without signature verification; this identifies the signed-in user
/// for display only and grants nothing by itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Failure to decode the bearer token's embedded payload
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TokenError {
    #[error("token is not in header.payload.signature form")]
    Malformed,
    #[error("token payload is not valid base64: {0}")]
    Base64(String),
    #[error("token payload is not a valid claims object: {0}")]
    Claims(String),
}

/// Decode the claims from the middle segment of a JWT-shaped token.
pub fn decode_token_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(TokenError::Malformed),
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| TokenError::Base64(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Claims(e.to_string()))
}

/// An authenticated session: the opaque bearer token plus the user
/// record decoded from it. Both halves are persisted across page loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: TokenClaims,
}

impl Session {
    pub fn from_token(token: &str) -> Result<Self, TokenError> {
        Ok(Self {
            token: token.to_string(),
            user: decode_token_claims(token)?,
        })
    }
}

/// The client's authentication state, modeled explicitly instead of a
/// nullable global. Anonymous becomes Authenticated only through
/// `signed_in` (a successful login); the reverse transition is
/// `signed_out`, used for both explicit logout and any server-reported
/// auth failure.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticated(Session),
}

impl AuthState {
    pub fn signed_in(session: Session) -> Self {
        AuthState::Authenticated(session)
    }

    pub fn signed_out() -> Self {
        AuthState::Anonymous
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::Authenticated(session) => Some(session),
            AuthState::Anonymous => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.session().map(|s| s.token.as_str())
    }

    pub fn user(&self) -> Option<&TokenClaims> {
        self.session().map(|s| &s.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(payload).unwrap());
        format!("{}.{}.signature", header, body)
    }

    #[test]
    fn test_create_user_requires_both_fields() {
        assert_eq!(
            CreateUserRequest::from_form("", "ada@example.com"),
            Err(FormError::Required("Name"))
        );
        assert_eq!(
            CreateUserRequest::from_form("Ada", "   "),
            Err(FormError::Required("Email"))
        );

        let request = CreateUserRequest::from_form("  Ada ", " ada@example.com ").unwrap();
        assert_eq!(request.name, "Ada");
        assert_eq!(request.email, "ada@example.com");
    }

    #[test]
    fn test_update_user_needs_at_least_one_field() {
        assert_eq!(
            UpdateUserRequest::from_form("", "  "),
            Err(FormError::NothingToUpdate)
        );

        let request = UpdateUserRequest::from_form("Ada", "").unwrap();
        assert_eq!(request.name.as_deref(), Some("Ada"));
        assert_eq!(request.email, None);
        // None fields stay off the wire so PATCH leaves them untouched
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"name":"Ada"}"#);
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(" 42 ", "User ID"), Ok(42));
        assert_eq!(parse_id("", "User ID"), Err(FormError::Required("User ID")));
        assert_eq!(
            parse_id("abc", "User ID"),
            Err(FormError::InvalidId("User ID"))
        );
    }

    #[test]
    fn test_parse_amount_rejects_non_positive_and_non_numeric() {
        assert_eq!(parse_amount("12.50"), Ok(12.5));
        assert_eq!(parse_amount(""), Err(FormError::Required("Amount")));
        assert_eq!(parse_amount("0"), Err(FormError::InvalidAmount));
        assert_eq!(parse_amount("-3"), Err(FormError::InvalidAmount));
        assert_eq!(parse_amount("twelve"), Err(FormError::InvalidAmount));
        assert_eq!(parse_amount("NaN"), Err(FormError::InvalidAmount));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-01-01"), Ok("2024-01-01".to_string()));
        assert_eq!(parse_date(""), Err(FormError::Required("Date")));
        assert_eq!(parse_date("01/01/2024"), Err(FormError::InvalidDate));
        assert_eq!(parse_date("2024-13-40"), Err(FormError::InvalidDate));
    }

    #[test]
    fn test_create_expense_requires_every_field_but_description() {
        let missing = [
            ("", "Lunch", "12.50", "2024-01-01", "1", FormError::Required("Category")),
            ("Food", "", "12.50", "2024-01-01", "1", FormError::Required("Sub Category")),
            ("Food", "Lunch", "", "2024-01-01", "1", FormError::Required("Amount")),
            ("Food", "Lunch", "12.50", "", "1", FormError::Required("Date")),
            ("Food", "Lunch", "12.50", "2024-01-01", "", FormError::Required("User ID")),
        ];
        for (category, sub, amount, date, user_id, expected) in missing {
            assert_eq!(
                CreateExpenseRequest::from_form(category, sub, "", amount, date, user_id),
                Err(expected)
            );
        }

        let request =
            CreateExpenseRequest::from_form("Food", "Lunch", "", "12.50", "2024-01-01", "1")
                .unwrap();
        assert_eq!(request.description, "");
        assert_eq!(request.amount, 12.5);
    }

    #[test]
    fn test_create_expense_serializes_camel_case() {
        let request =
            CreateExpenseRequest::from_form("Food", "Lunch", "team lunch", "12.50", "2024-01-01", "7")
                .unwrap();
        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(
            wire,
            json!({
                "category": "Food",
                "subCategory": "Lunch",
                "description": "team lunch",
                "amount": 12.5,
                "date": "2024-01-01",
                "userId": 7
            })
        );
    }

    #[test]
    fn test_update_expense_needs_a_field_and_positive_amount() {
        assert_eq!(
            UpdateExpenseRequest::from_form("", "", "", "", ""),
            Err(FormError::NothingToUpdate)
        );
        assert_eq!(
            UpdateExpenseRequest::from_form("", "", "", "-5", ""),
            Err(FormError::InvalidAmount)
        );

        let request = UpdateExpenseRequest::from_form("Travel", "", "", "", "").unwrap();
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"category":"Travel"}"#
        );
    }

    #[test]
    fn test_auth_forms_require_all_fields() {
        assert_eq!(
            RegisterRequest::from_form("Ada", "ada@example.com", ""),
            Err(FormError::Required("Password"))
        );
        assert_eq!(
            LoginRequest::from_form("", "hunter2"),
            Err(FormError::Required("Email"))
        );
        assert!(LoginRequest::from_form("ada@example.com", "hunter2").is_ok());
    }

    #[test]
    fn test_normalize_no_content() {
        let response = ApiResponse::from_body(204, Some("application/json"), "");
        assert!(response.ok);
        assert_eq!(response.status, 204);
        assert_eq!(response.data, Payload::Empty);
    }

    #[test]
    fn test_normalize_json_body() {
        let response =
            ApiResponse::from_body(200, Some("application/json; charset=utf-8"), r#"{"id":1}"#);
        assert!(response.ok);
        assert_eq!(response.json(), Some(&json!({"id": 1})));
    }

    #[test]
    fn test_normalize_invalid_json_substitutes_fixed_payload() {
        let response = ApiResponse::from_body(200, Some("application/json"), "{not json");
        assert!(response.ok);
        assert_eq!(response.json(), Some(&json!({"message": INVALID_JSON_MESSAGE})));
    }

    #[test]
    fn test_normalize_plain_text_body() {
        let response = ApiResponse::from_body(500, Some("text/plain"), "boom");
        assert!(!response.ok);
        assert_eq!(response.data, Payload::Text("boom".to_string()));

        let no_header = ApiResponse::from_body(200, None, "hello");
        assert_eq!(no_header.data, Payload::Text("hello".to_string()));
    }

    #[test]
    fn test_unreadable_body_substitutes_fixed_payload() {
        let response = ApiResponse::unreadable(200);
        assert_eq!(
            response.json(),
            Some(&json!({"message": UNREADABLE_BODY_MESSAGE}))
        );
    }

    #[test]
    fn test_auth_failure_statuses() {
        for status in [401, 403] {
            let response = ApiResponse::from_body(status, Some("application/json"), "{}");
            assert!(response.is_auth_failure(), "status {}", status);
        }
        for status in [200, 204, 400, 404, 500] {
            let response = ApiResponse::from_body(status, None, "");
            assert!(!response.is_auth_failure(), "status {}", status);
        }
    }

    #[test]
    fn test_login_token_extraction() {
        let response =
            ApiResponse::from_body(200, Some("application/json"), r#"{"token":"abc.def.ghi"}"#);
        assert_eq!(response.login_token(), Some("abc.def.ghi"));

        let missing = ApiResponse::from_body(200, Some("application/json"), r#"{"ok":true}"#);
        assert_eq!(missing.login_token(), None);

        let text = ApiResponse::from_body(200, None, "abc.def.ghi");
        assert_eq!(text.login_token(), None);
    }

    #[test]
    fn test_decode_token_claims() {
        let token = token_with_payload(&json!({
            "id": 7,
            "name": "Ada Lovelace",
            "email": "ada@example.com"
        }));
        let claims = decode_token_claims(&token).unwrap();
        assert_eq!(claims.id, 7);
        assert_eq!(claims.name, "Ada Lovelace");
        assert_eq!(claims.email, "ada@example.com");
    }

    #[test]
    fn test_decode_token_claims_failures() {
        assert_eq!(
            decode_token_claims("just-a-string"),
            Err(TokenError::Malformed)
        );
        assert_eq!(decode_token_claims("a.b.c.d"), Err(TokenError::Malformed));
        assert!(matches!(
            decode_token_claims("header.!!!not-base64!!!.sig"),
            Err(TokenError::Base64(_))
        ));

        let not_claims = format!(
            "header.{}.sig",
            URL_SAFE_NO_PAD.encode(br#"{"sub":"no name here"}"#)
        );
        assert!(matches!(
            decode_token_claims(&not_claims),
            Err(TokenError::Claims(_))
        ));
    }

    #[test]
    fn test_session_round_trips_through_storage_form() {
        let token = token_with_payload(&json!({
            "id": 1, "name": "Ada", "email": "ada@example.com"
        }));
        let session = Session::from_token(&token).unwrap();
        let serialized = serde_json::to_string(&session.user).unwrap();
        let restored: TokenClaims = serde_json::from_str(&serialized).unwrap();
        assert_eq!(restored, session.user);
    }

    #[test]
    fn test_auth_state_transitions() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());
        assert_eq!(state.token(), None);

        let token = token_with_payload(&json!({
            "id": 1, "name": "Ada", "email": "ada@example.com"
        }));
        let session = Session::from_token(&token).unwrap();
        let signed_in = AuthState::signed_in(session.clone());
        assert!(signed_in.is_authenticated());
        assert_eq!(signed_in.token(), Some(token.as_str()));
        assert_eq!(signed_in.user().map(|u| u.name.as_str()), Some("Ada"));

        let signed_out = AuthState::signed_out();
        assert_eq!(signed_out, AuthState::Anonymous);
    }
}
