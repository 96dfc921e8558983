use serde::Serialize;
use thiserror::Error;

use super::form::MessageDraft;

/// Hosted templated-email relay the contact form dispatches through.
pub const RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

// Relay-side identifiers. The key is public-key material by the relay's
// design; it only authorizes sending through the template below.
const SERVICE_ID: &str = "service_u6url0q";
const TEMPLATE_ID: &str = "template_lhqyxhr";
const PUBLIC_KEY: &str = "apo3Q3wWL4MAzQtZU";

const OWNER_NAME: &str = "Nicholas Kent";
const OWNER_EMAIL: &str = "nicholaskentx@gmail.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_name: &'static str,
    pub to_email: &'static str,
}

/// Payload shape the relay expects; the field names are part of its API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendRequest {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub user_id: &'static str,
    pub template_params: TemplateParams,
}

impl SendRequest {
    pub fn from_draft(draft: &MessageDraft) -> Self {
        Self {
            service_id: SERVICE_ID,
            template_id: TEMPLATE_ID,
            user_id: PUBLIC_KEY,
            template_params: TemplateParams {
                from_name: draft.name.clone(),
                from_email: draft.email.clone(),
                message: draft.message.clone(),
                to_name: OWNER_NAME,
                to_email: OWNER_EMAIL,
            },
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("could not reach the relay: {0}")]
    Transport(String),
    #[error("relay rejected the message with status {0}")]
    Rejected(u16),
}

/// POST the request to the relay. Only the response status is consumed.
#[cfg(feature = "hydrate")]
pub async fn send(request: &SendRequest) -> Result<(), RelayError> {
    use gloo_net::http::Request;

    let response = Request::post(RELAY_ENDPOINT)
        .json(request)
        .map_err(|err| RelayError::Transport(err.to_string()))?
        .send()
        .await
        .map_err(|err| RelayError::Transport(err.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        Err(RelayError::Rejected(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_the_relay_wire_shape() {
        let draft = MessageDraft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        };
        let value = serde_json::to_value(SendRequest::from_draft(&draft))
            .expect("request should serialize");

        assert_eq!(value["service_id"], SERVICE_ID);
        assert_eq!(value["template_id"], TEMPLATE_ID);
        assert_eq!(value["user_id"], PUBLIC_KEY);

        let params = &value["template_params"];
        assert_eq!(params["from_name"], "Ada");
        assert_eq!(params["from_email"], "ada@example.com");
        assert_eq!(params["message"], "Hello");
        assert_eq!(params["to_name"], OWNER_NAME);
        assert_eq!(params["to_email"], OWNER_EMAIL);
    }
}
