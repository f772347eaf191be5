use crate::config::CONFIG;
use crate::error::LeadError;
use crate::types::email::{EmailReceipt, EmailRequest};

/// Stateless caller for the transactional email-delivery API.
pub struct EmailApi;

impl EmailApi {
    /// Deliver one email. Single-shot: delivery failures propagate to the
    /// caller, which decides whether they are user-visible.
    pub async fn send(
        client: reqwest::Client,
        req: &EmailRequest,
    ) -> Result<EmailReceipt, LeadError> {
        let resp = client
            .post(CONFIG.email.api_url.clone())
            .bearer_auth(CONFIG.email.api_key.as_str())
            .json(req)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(LeadError::UpstreamStatus(resp.status()));
        }

        Ok(resp.json::<EmailReceipt>().await?)
    }
}
