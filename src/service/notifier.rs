use std::time::Duration;

use backon::ExponentialBuilder;
use tracing::{debug, info, warn};

use crate::api::{CompletionApi, EmailApi};
use crate::config::CONFIG;
use crate::error::LeadError;
use crate::types::completion::{ChatMessage, CompletionRequest, CompletionResponse};
use crate::types::email::EmailRequest;
use crate::types::lead::Industry;
use crate::types::notify::ConfirmationRequest;

/// Static copy substituted whenever the AI call yields nothing usable.
pub const FALLBACK_BODY: &str = "Thanks for reaching out! We received your details \
and will be in touch shortly with ideas tailored to your industry.";

const SYSTEM_PROMPT: &str = "You write short, warm confirmation emails for a B2B \
lead-capture form. Plain text only, no subject line, no signature.";

/// Sends the personalized confirmation email for a captured lead.
///
/// AI generation is best-effort: any failure there degrades to
/// [`FALLBACK_BODY`]. Only email delivery failure fails the call.
#[derive(Clone)]
pub struct Notifier {
    client: reqwest::Client,
}

impl Notifier {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Generate copy, render the HTML body, and deliver the email.
    /// Returns whether fallback copy was used.
    pub async fn send_confirmation(&self, req: &ConfirmationRequest) -> Result<bool, LeadError> {
        let (body, fallback) = match self.generate_copy(req).await {
            Some(text) => (text, false),
            None => {
                debug!(to = %req.email, "no usable completion; substituting fallback copy");
                (FALLBACK_BODY.to_string(), true)
            }
        };

        let email = EmailRequest {
            from: CONFIG.email.from_address.clone(),
            to: vec![req.email.clone()],
            subject: CONFIG.email.subject.clone(),
            html: render_email_html(&req.name, &body),
        };
        let receipt = EmailApi::send(self.client.clone(), &email).await?;

        info!(
            to = %req.email,
            delivery_id = receipt.id.as_deref().unwrap_or("-"),
            fallback,
            "confirmation email delivered"
        );
        Ok(fallback)
    }

    /// Call the completion API. Every failure mode (transport, error status,
    /// undecodable body, empty content) collapses to None.
    async fn generate_copy(&self, req: &ConfirmationRequest) -> Option<String> {
        let retry_policy = ExponentialBuilder::default()
            .with_min_delay(Duration::from_secs(1))
            .with_max_delay(Duration::from_secs(3))
            .with_max_times(2)
            .with_jitter();

        let body = CompletionRequest {
            model: CONFIG.ai.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(build_prompt(&req.name, req.industry)),
            ],
            max_tokens: CONFIG.ai.max_tokens,
        };

        let resp = match CompletionApi::try_post(self.client.clone(), retry_policy, &body).await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(error = %e, "completion request failed");
                return None;
            }
        };
        if !resp.status().is_success() {
            warn!(status = %resp.status(), "completion API returned error status");
            return None;
        }
        let parsed = match resp.json::<CompletionResponse>().await {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "completion response decode failed");
                return None;
            }
        };
        extract_completion(&parsed)
    }
}

pub fn build_prompt(name: &str, industry: Industry) -> String {
    format!(
        "Write a confirmation paragraph for {name}, who works in the {} industry \
         and just requested more information. Mention one concrete way our product \
         helps companies in that industry. Two to three sentences.",
        industry.label()
    )
}

/// First choice's message content, trimmed; None when absent or blank.
pub fn extract_completion(resp: &CompletionResponse) -> Option<String> {
    let content = resp.choices.first()?.message.as_ref()?.content.as_deref()?;
    let content = content.trim();
    (!content.is_empty()).then(|| content.to_string())
}

pub fn render_email_html(name: &str, body: &str) -> String {
    format!(
        "<div style=\"font-family:Arial,sans-serif;max-width:600px;margin:0 auto\">\
         <h2>Hi {name},</h2>\
         <p>{body}</p>\
         <p>&mdash; The Leadgate team</p>\
         </div>",
        name = escape_html(name),
        body = escape_html(body),
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
