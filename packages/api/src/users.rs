//! User and session endpoints.

use crate::client::TaskwellClient;
use crate::error::Result;
use crate::models::{NewUser, User};
use reqwest::Method;
use serde_json::json;

impl TaskwellClient {
    /// Register a new account.
    ///
    /// POST /api/users
    pub async fn register(&self, new_user: &NewUser) -> Result<User> {
        let builder = self.request(Method::POST, "/api/users")?.json(new_user);
        self.send_json(builder, "Registration failed").await
    }

    /// Log in with form-encoded credentials; the session comes back as a
    /// cookie, so a 2xx status is the only thing checked here.
    ///
    /// POST /login
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let builder = self
            .request(Method::POST, "/login")?
            .form(&[("username", username), ("password", password)]);
        self.send_unit(builder, "Login failed").await
    }

    /// Probe the current session.
    ///
    /// GET /api/users/me
    pub async fn current_user(&self) -> Result<User> {
        let builder = self.request(Method::GET, "/api/users/me")?;
        self.send_json(builder, "Failed to fetch user info").await
    }

    /// Mark the current account as verified.
    ///
    /// PUT /api/users/me/verify
    pub async fn verify_current_user(&self) -> Result<()> {
        let builder = self.request(Method::PUT, "/api/users/me/verify")?;
        self.send_unit(builder, "Verification failed").await
    }

    /// Change the account's username, confirmed by the current password.
    ///
    /// PUT /api/users/{id}/username
    pub async fn update_username(
        &self,
        user_id: i64,
        new_username: &str,
        current_password: &str,
    ) -> Result<User> {
        let builder = self
            .request(Method::PUT, &format!("/api/users/{user_id}/username"))?
            .json(&json!({
                "username": new_username,
                "currentPassword": current_password,
            }));
        self.send_json(builder, "Failed to update username").await
    }

    /// Change the account's email, confirmed by the current password.
    ///
    /// PUT /api/users/{id}/email
    pub async fn update_email(
        &self,
        user_id: i64,
        new_email: &str,
        current_password: &str,
    ) -> Result<User> {
        let builder = self
            .request(Method::PUT, &format!("/api/users/{user_id}/email"))?
            .json(&json!({
                "email": new_email,
                "currentPassword": current_password,
            }));
        self.send_json(builder, "Failed to update email").await
    }

    /// Change the account's password.
    ///
    /// PUT /api/users/{id}/password
    pub async fn update_password(
        &self,
        user_id: i64,
        new_password: &str,
        current_password: &str,
    ) -> Result<()> {
        let builder = self
            .request(Method::PUT, &format!("/api/users/{user_id}/password"))?
            .json(&json!({
                "password": new_password,
                "currentPassword": current_password,
            }));
        self.send_unit(builder, "Failed to update password").await
    }
}
