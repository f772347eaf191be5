pub mod completion_api;
pub mod email_api;

pub use completion_api::CompletionApi;
pub use email_api::EmailApi;
