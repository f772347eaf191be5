pub mod completion;
pub mod email;
pub mod lead;
pub mod notify;

pub use completion::{ChatMessage, CompletionRequest, CompletionResponse};
pub use email::{EmailReceipt, EmailRequest};
pub use lead::{Industry, LeadAccepted, LeadSubmission};
pub use notify::{ConfirmationRequest, ConfirmationSent};
