use crate::config::CONFIG;
use backon::{ExponentialBuilder, Retryable};
use tracing::error;

/// Stateless caller for the AI completion API.
pub struct CompletionApi;

impl CompletionApi {
    /// POST the completion request, retrying transient 5xx responses under
    /// `retry_policy`. Non-5xx responses are returned as-is for the caller
    /// to inspect.
    pub async fn try_post<T>(
        client: reqwest::Client,
        retry_policy: ExponentialBuilder,
        body: &T,
    ) -> Result<reqwest::Response, reqwest::Error>
    where
        T: serde::Serialize,
    {
        let url = CONFIG.ai.api_url.clone();

        (|| async {
            let resp = client
                .post(url.clone())
                .bearer_auth(CONFIG.ai.api_key.as_str())
                .json(body)
                .send()
                .await?;
            if resp.status().is_server_error() {
                let status = resp.status();
                let err = resp.error_for_status().unwrap_err();
                error!("completion API server error (will retry): {}", status);
                return Err(err);
            }
            Ok(resp)
        })
        .retry(retry_policy)
        .await
    }
}
