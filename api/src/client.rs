//! # Admin API client
//!
//! [`AdminApi`] wraps the four administrative endpoints behind one typed
//! interface. In the browser it rides on `gloo-net`; on native targets it
//! uses `reqwest`. Both paths share the same surface, so callers never see
//! the split.
//!
//! A client is cheap to construct and is built fresh per request from the
//! auth context, so a token that changes after mount is picked up by the
//! next call.

use serde::Deserialize;

use crate::error::ApiError;
use crate::models::{User, UserRole};

#[cfg(target_arch = "wasm32")]
use gloo_net::http::Request;

const LIST_USERS_PATH: &str = "/api/admin/users";
const BAN_PATH: &str = "/api/admin/ban";

/// HTTP client for the admin endpoints.
pub struct AdminApi {
    base: String,
    token: Option<String>,
    #[cfg(not(target_arch = "wasm32"))]
    http: reqwest::Client,
}

impl AdminApi {
    /// Client against the page's own origin (empty base URL).
    pub fn new(token: Option<String>) -> Self {
        Self::with_base(String::new(), token)
    }

    /// Client against an explicit base URL, e.g. `"https://api.example.com"`.
    pub fn with_base(base: String, token: Option<String>) -> Self {
        Self {
            base,
            token,
            #[cfg(not(target_arch = "wasm32"))]
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the full user roster.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json(LIST_USERS_PATH).await
    }

    /// Assign a role to the user with the given id. Returns the updated user.
    pub async fn assign_role(&self, id: i64, role: UserRole) -> Result<User, ApiError> {
        self.put_json(&format!("/api/admin/give-role/{id}"), &[("role", role.as_str())])
            .await
    }

    /// Flip the block state of the account with the given email. The
    /// response carries the authoritative `isBlocked` value.
    pub async fn toggle_block(&self, email: &str) -> Result<User, ApiError> {
        self.put_json(BAN_PATH, &[("email", email)]).await
    }

    /// Delete the user with the given id. The response body is ignored.
    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/admin/users/{id}")).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

#[cfg(target_arch = "wasm32")]
impl AdminApi {
    fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let mut request = Request::get(&self.url(path));
        if let Some(ref bearer) = self.bearer() {
            request = request.header("Authorization", bearer);
        }
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::decode(response).await
    }

    async fn put_json<T>(&self, path: &str, params: &[(&str, &str)]) -> Result<T, ApiError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let mut request = Request::put(&self.url(path)).query(params.iter().copied());
        if let Some(ref bearer) = self.bearer() {
            request = request.header("Authorization", bearer);
        }
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::decode(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let mut request = Request::delete(&self.url(path));
        if let Some(ref bearer) = self.bearer() {
            request = request.header("Authorization", bearer);
        }
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Http(response.status()));
        }
        Ok(())
    }

    async fn decode<T>(response: gloo_net::http::Response) -> Result<T, ApiError>
    where
        T: for<'de> Deserialize<'de>,
    {
        if !response.ok() {
            return Err(ApiError::Http(response.status()));
        }
        response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl AdminApi {
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token {
            Some(ref token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = self.authorize(self.http.get(self.url(path)));
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::decode(response).await
    }

    async fn put_json<T>(&self, path: &str, params: &[(&str, &str)]) -> Result<T, ApiError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = self.authorize(self.http.put(self.url(path)).query(params));
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::decode(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.authorize(self.http.delete(self.url(path)));
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if !response.status().is_success() {
            return Err(ApiError::Http(response.status().as_u16()));
        }
        Ok(())
    }

    async fn decode<T>(response: reqwest::Response) -> Result<T, ApiError>
    where
        T: for<'de> Deserialize<'de>,
    {
        if !response.status().is_success() {
            return Err(ApiError::Http(response.status().as_u16()));
        }
        response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_and_path() {
        let api = AdminApi::with_base("https://api.example.com".to_string(), None);
        assert_eq!(api.url(LIST_USERS_PATH), "https://api.example.com/api/admin/users");

        let same_origin = AdminApi::new(None);
        assert_eq!(same_origin.url(BAN_PATH), "/api/admin/ban");
    }
}
