//! The outbound send: one POST to the email relay per submission.

use gloo_net::http::Request;
use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;

use crate::config::{self, RelayCredentials};

/// Template variables the relay fills into the outgoing mail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailParams {
    pub from_name: String,
    pub phone: String,
    pub reply_to: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("email relay credentials are not configured")]
    MissingCredentials,
    #[error("could not build relay request: {0}")]
    Request(String),
    #[error("relay unreachable: {0}")]
    Network(String),
    #[error("relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Anything that can deliver the contact form's contents.
pub trait EmailRelay {
    async fn send(&self, params: &EmailParams) -> Result<(), RelayError>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailParams,
}

/// The hosted EmailJS REST endpoint.
#[derive(Clone, Debug)]
pub struct EmailJsRelay {
    url: String,
    credentials: Option<RelayCredentials>,
}

impl EmailJsRelay {
    pub fn new(url: impl Into<String>, credentials: Option<RelayCredentials>) -> Self {
        Self {
            url: url.into(),
            credentials,
        }
    }

    pub fn from_config() -> Self {
        let credentials = RelayCredentials::from_env();
        if credentials.is_none() {
            warn!("EMAILJS_* credentials missing at build time, contact form cannot send");
        }
        Self::new(config::get_relay_url(), credentials)
    }
}

impl EmailRelay for EmailJsRelay {
    async fn send(&self, params: &EmailParams) -> Result<(), RelayError> {
        let credentials = self.credentials.as_ref().ok_or(RelayError::MissingCredentials)?;
        let body = SendRequest {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            template_params: params,
        };

        let request = Request::post(&self.url)
            .json(&body)
            .map_err(|e| RelayError::Request(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        if response.ok() {
            debug!("Relay accepted message from {}", params.reply_to);
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(RelayError::Rejected { status, body })
        }
    }
}
