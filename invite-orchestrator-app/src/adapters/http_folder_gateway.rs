//! HTTP gateway speaking the panel backend's REST API.
//!
//! One `reqwest` client with explicit timeouts; every operation is a
//! request under `{base_url}/api/inviting/{folder_id}`. Error bodies
//! arrive as `{"message": "..."}` and are surfaced as `ApiError`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::json;

use invite_orchestrator_core::error::{CoreError, CoreResult};
use invite_orchestrator_core::traits::FolderGateway;
use invite_orchestrator_core::types::{FolderBundle, LaunchMode};

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// `FolderGateway` over the panel backend's REST API
pub struct HttpFolderGateway {
    client: Client,
    base_url: String,
}

impl HttpFolderGateway {
    /// Create a gateway for the backend at `base_url`.
    ///
    /// A trailing slash on `base_url` is tolerated and stripped.
    pub fn new(base_url: impl Into<String>) -> CoreResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| CoreError::NetworkError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Endpoint for the folder itself, or for an action under it.
    fn endpoint(&self, folder_id: &str, action: &str) -> String {
        if action.is_empty() {
            format!("{}/api/inviting/{folder_id}", self.base_url)
        } else {
            format!("{}/api/inviting/{folder_id}/{action}", self.base_url)
        }
    }

    /// Send the request and read the whole response.
    ///
    /// Unified processing: logging, transport error mapping. Status
    /// interpretation is left to the caller via `into_result`.
    async fn execute(
        &self,
        request: RequestBuilder,
        method: &str,
        url: &str,
    ) -> CoreResult<(u16, String)> {
        log::debug!("{method} {url}");

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                CoreError::Timeout(e.to_string())
            } else {
                CoreError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("Response status: {status}");

        let body = response
            .text()
            .await
            .map_err(|e| CoreError::NetworkError(format!("Failed to read response body: {e}")))?;

        Ok((status, body))
    }
}

/// Map a response to the matching result. 404 becomes the operation's
/// own not-found error, 502-504 stay transport-level, any other
/// non-2xx carries the backend's message.
fn into_result(status: u16, body: String, not_found: CoreError) -> CoreResult<String> {
    match status {
        200..=299 => Ok(body),
        404 => Err(not_found),
        502..=504 => Err(CoreError::NetworkError(format!("HTTP {status}: {body}"))),
        _ => Err(CoreError::ApiError {
            status,
            message: error_message(&body),
        }),
    }
}

/// Extract the backend's `{"message": "..."}` error body, falling back
/// to the raw text when the body is anything else.
fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    serde_json::from_str::<ErrorBody>(body).map_or_else(|_| body.to_string(), |b| b.message)
}

#[async_trait]
impl FolderGateway for HttpFolderGateway {
    async fn fetch_folder(&self, folder_id: &str) -> CoreResult<FolderBundle> {
        let url = self.endpoint(folder_id, "");
        let (status, body) = self.execute(self.client.get(&url), "GET", &url).await?;
        let body = into_result(
            status,
            body,
            CoreError::FolderNotFound(folder_id.to_string()),
        )?;
        serde_json::from_str(&body).map_err(|e| CoreError::ParseError(e.to_string()))
    }

    async fn create_folder(&self, folder_id: &str, name: &str) -> CoreResult<()> {
        let url = self.endpoint(folder_id, "create-folder");
        let request = self.client.post(&url).json(&json!({ "name": name }));
        let (status, body) = self.execute(request, "POST", &url).await?;
        into_result(
            status,
            body,
            CoreError::FolderNotFound(folder_id.to_string()),
        )?;
        Ok(())
    }

    async fn rename_folder(&self, folder_id: &str, name: &str) -> CoreResult<()> {
        let url = self.endpoint(folder_id, "rename");
        let request = self.client.put(&url).json(&json!({ "name": name }));
        let (status, body) = self.execute(request, "PUT", &url).await?;
        into_result(
            status,
            body,
            CoreError::FolderNotFound(folder_id.to_string()),
        )?;
        Ok(())
    }

    async fn change_chat(&self, folder_id: &str, chat: &str) -> CoreResult<()> {
        let url = self.endpoint(folder_id, "change-chat");
        let request = self.client.put(&url).json(&json!({ "chat": chat }));
        let (status, body) = self.execute(request, "PUT", &url).await?;
        into_result(
            status,
            body,
            CoreError::FolderNotFound(folder_id.to_string()),
        )?;
        Ok(())
    }

    async fn change_message(&self, folder_id: &str, message: &str) -> CoreResult<()> {
        let url = self.endpoint(folder_id, "add-message");
        let request = self.client.put(&url).json(&json!({ "message": message }));
        let (status, body) = self.execute(request, "PUT", &url).await?;
        into_result(
            status,
            body,
            CoreError::FolderNotFound(folder_id.to_string()),
        )?;
        Ok(())
    }

    async fn change_usernames(&self, folder_id: &str, usernames: &[String]) -> CoreResult<()> {
        let url = self.endpoint(folder_id, "change-usernames");
        let request = self.client.put(&url).json(&json!({ "usernames": usernames }));
        let (status, body) = self.execute(request, "PUT", &url).await?;
        into_result(
            status,
            body,
            CoreError::FolderNotFound(folder_id.to_string()),
        )?;
        Ok(())
    }

    async fn change_groups(&self, folder_id: &str, groups: &[String]) -> CoreResult<()> {
        let url = self.endpoint(folder_id, "change-groups");
        let request = self.client.put(&url).json(&json!({ "groups": groups }));
        let (status, body) = self.execute(request, "PUT", &url).await?;
        into_result(
            status,
            body,
            CoreError::FolderNotFound(folder_id.to_string()),
        )?;
        Ok(())
    }

    async fn move_folder(&self, folder_id: &str, dest_path: &str) -> CoreResult<()> {
        let url = self.endpoint(folder_id, "move");
        let request = self.client.put(&url).json(&json!({ "path": dest_path }));
        let (status, body) = self.execute(request, "PUT", &url).await?;
        into_result(
            status,
            body,
            CoreError::FolderNotFound(folder_id.to_string()),
        )?;
        Ok(())
    }

    async fn delete_folder(&self, folder_id: &str) -> CoreResult<String> {
        let url = self.endpoint(folder_id, "");
        let (status, body) = self.execute(self.client.delete(&url), "DELETE", &url).await?;
        let body = into_result(
            status,
            body,
            CoreError::FolderNotFound(folder_id.to_string()),
        )?;
        // The backend answers with a JSON string: the path to show next.
        serde_json::from_str(&body).map_err(|e| CoreError::ParseError(e.to_string()))
    }

    async fn create_account(&self, folder_id: &str, name: &str, phone: &str) -> CoreResult<()> {
        let url = self.endpoint(folder_id, "create-account");
        let request = self
            .client
            .post(&url)
            .json(&json!({ "name": name, "phone": phone }));
        let (status, body) = self.execute(request, "POST", &url).await?;
        into_result(
            status,
            body,
            CoreError::FolderNotFound(folder_id.to_string()),
        )?;
        Ok(())
    }

    async fn delete_account(&self, folder_id: &str, account_id: &str) -> CoreResult<()> {
        let url = self.endpoint(folder_id, &format!("accounts/{account_id}"));
        let (status, body) = self.execute(self.client.delete(&url), "DELETE", &url).await?;
        into_result(
            status,
            body,
            CoreError::AccountNotFound(account_id.to_string()),
        )?;
        Ok(())
    }

    async fn generate_intervals(&self, folder_id: &str) -> CoreResult<()> {
        let url = self.endpoint(folder_id, "generate-interval");
        let (status, body) = self.execute(self.client.post(&url), "POST", &url).await?;
        into_result(
            status,
            body,
            CoreError::FolderNotFound(folder_id.to_string()),
        )?;
        Ok(())
    }

    async fn launch(&self, folder_id: &str, mode: LaunchMode) -> CoreResult<()> {
        let url = self.endpoint(folder_id, &format!("launch/{}", mode.as_str()));
        let (status, body) = self.execute(self.client.post(&url), "POST", &url).await?;
        into_result(
            status,
            body,
            CoreError::FolderNotFound(folder_id.to_string()),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> HttpFolderGateway {
        HttpFolderGateway::new("http://panel.local").unwrap()
    }

    // ---- endpoint ----

    #[test]
    fn endpoint_for_the_folder_itself() {
        assert_eq!(
            gateway().endpoint("64f0", ""),
            "http://panel.local/api/inviting/64f0"
        );
    }

    #[test]
    fn endpoint_for_an_action() {
        assert_eq!(
            gateway().endpoint("64f0", "create-folder"),
            "http://panel.local/api/inviting/64f0/create-folder"
        );
    }

    #[test]
    fn endpoint_for_a_nested_resource() {
        assert_eq!(
            gateway().endpoint("64f0", "accounts/a7"),
            "http://panel.local/api/inviting/64f0/accounts/a7"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_stripped() {
        let gateway = HttpFolderGateway::new("http://panel.local/").unwrap();
        assert_eq!(
            gateway.endpoint("64f0", "rename"),
            "http://panel.local/api/inviting/64f0/rename"
        );
    }

    // ---- into_result ----

    #[test]
    fn success_passes_the_body_through() {
        let result = into_result(
            200,
            "\"/\"".to_string(),
            CoreError::FolderNotFound("64f0".into()),
        );
        assert_eq!(result.unwrap(), "\"/\"");
    }

    #[test]
    fn not_found_uses_the_operation_error() {
        let result = into_result(
            404,
            String::new(),
            CoreError::AccountNotFound("a7".into()),
        );
        assert!(matches!(result, Err(CoreError::AccountNotFound(id)) if id == "a7"));
    }

    #[test]
    fn bad_request_carries_the_backend_message() {
        let result = into_result(
            400,
            r#"{"message": "First specify the usernames"}"#.to_string(),
            CoreError::FolderNotFound("64f0".into()),
        );
        assert!(matches!(
            result,
            Err(CoreError::ApiError { status: 400, message }) if message == "First specify the usernames"
        ));
    }

    #[test]
    fn unparseable_error_body_is_kept_raw() {
        let result = into_result(
            500,
            "internal server error".to_string(),
            CoreError::FolderNotFound("64f0".into()),
        );
        assert!(matches!(
            result,
            Err(CoreError::ApiError { status: 500, message }) if message == "internal server error"
        ));
    }

    #[test]
    fn gateway_errors_stay_transport_level() {
        let result = into_result(
            503,
            "Service Unavailable".to_string(),
            CoreError::FolderNotFound("64f0".into()),
        );
        assert!(matches!(result, Err(CoreError::NetworkError(_))));
    }

    // ---- error_message ----

    #[test]
    fn message_body_is_unwrapped() {
        assert_eq!(error_message(r#"{"message": "no such chat"}"#), "no such chat");
    }

    #[test]
    fn other_bodies_are_returned_verbatim() {
        assert_eq!(error_message("<html>oops</html>"), "<html>oops</html>");
    }
}
