use std::time::Duration;

use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};

use crate::config::CONFIG;
use crate::db::LeadStorage;
use crate::error::LeadError;
use crate::handlers::form::form_page_handler;
use crate::handlers::leads::submit_lead_handler;
use crate::handlers::notify::send_confirmation_handler;
use crate::service::Notifier;

#[derive(Clone)]
pub struct AppState {
    pub storage: LeadStorage,
    pub notifier: Notifier,
}

impl AppState {
    pub fn new(storage: LeadStorage) -> Result<Self, LeadError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(CONFIG.http_timeout_secs))
            .build()?;
        Ok(Self {
            storage,
            notifier: Notifier::new(client),
        })
    }
}

pub fn leadgate_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(form_page_handler))
        .route("/healthz", get(healthz_handler))
        .route("/api/leads", post(submit_lead_handler))
        .route("/functions/send-confirmation", post(send_confirmation_handler))
        .with_state(state)
}

async fn healthz_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
