use serde::{Deserialize, Serialize};
use serde_json::json;
use store::models::{AuthPayload, User, UserRole};
use store::KeyValueStore;

use crate::client::{encode, ApiClient};
use crate::error::ApiError;
use crate::transport::{Method, Transport};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthPayload, ApiError> {
        self.send_json(Method::Post, "/auth/login".into(), request)
            .await
    }

    /// Creates the account and triggers an OTP email. Returns the server message.
    pub async fn signup(&self, request: &SignupRequest) -> Result<Option<String>, ApiError> {
        self.send_unit(Method::Post, "/auth/signup".into(), Some(encode(request)?))
            .await
    }

    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<AuthPayload, ApiError> {
        self.send_json(
            Method::Post,
            "/auth/verify-otp".into(),
            &json!({ "email": email, "otp": otp }),
        )
        .await
    }

    pub async fn resend_otp(&self, email: &str) -> Result<Option<String>, ApiError> {
        self.send_unit(
            Method::Post,
            "/auth/resend-otp".into(),
            Some(json!({ "email": email })),
        )
        .await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<Option<String>, ApiError> {
        self.send_unit(
            Method::Post,
            "/auth/forgot-password".into(),
            Some(json!({ "email": email })),
        )
        .await
    }

    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<Option<String>, ApiError> {
        self.send_unit(
            Method::Post,
            "/auth/reset-password".into(),
            Some(encode(request)?),
        )
        .await
    }

    pub async fn logout(&self) -> Result<Option<String>, ApiError> {
        self.send_unit(Method::Post, "/auth/logout".into(), None)
            .await
    }

    pub async fn get_profile(&self) -> Result<User, ApiError> {
        self.get("/auth/profile".into()).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        self.send_json(Method::Put, "/auth/profile".into(), update)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{caregiver, client, FakeTransport};

    #[tokio::test]
    async fn test_login_request_shape() {
        let fake = FakeTransport::new();
        fake.push_json(
            200,
            json!({ "success": true, "data": { "token": "t", "user": caregiver() } }),
        );
        let payload = client(&fake)
            .login(&LoginRequest {
                email: "carol@example.com".into(),
                password: "secret123".into(),
            })
            .await
            .unwrap();
        assert_eq!(payload.user, caregiver());

        let sent = &fake.requests()[0];
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.path, "/auth/login");
        assert_eq!(
            sent.body,
            Some(json!({ "email": "carol@example.com", "password": "secret123" }))
        );
    }

    #[tokio::test]
    async fn test_signup_sends_role_and_returns_message() {
        let fake = FakeTransport::new();
        fake.push_json(
            201,
            json!({ "success": true, "message": "OTP sent to your email" }),
        );
        let message = client(&fake)
            .signup(&SignupRequest {
                name: "Pat".into(),
                email: "pat@example.com".into(),
                password: "password1".into(),
                role: UserRole::Patient,
            })
            .await
            .unwrap();
        assert_eq!(message.as_deref(), Some("OTP sent to your email"));
        assert_eq!(fake.requests()[0].body.as_ref().unwrap()["role"], json!("patient"));
    }

    #[tokio::test]
    async fn test_reset_password_uses_camel_case() {
        let fake = FakeTransport::new();
        fake.push_json(200, json!({ "success": true }));
        client(&fake)
            .reset_password(&ResetPasswordRequest {
                email: "a@b.co".into(),
                otp: "123456".into(),
                new_password: "newpassword".into(),
            })
            .await
            .unwrap();
        let body = fake.requests()[0].body.clone().unwrap();
        assert_eq!(body["newPassword"], json!("newpassword"));
        assert_eq!(fake.requests()[0].path, "/auth/reset-password");
    }
}
