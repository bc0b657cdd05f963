//! Request and response bodies for client endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::error::ApiError;
use crate::application::handlers::ClientOverview;
use crate::domain::client::{Client, ClientStatus, ContactDetails};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateClientRequest {
    #[serde(flatten)]
    pub contact: ContactDetails,
    /// Provision a portal right away.
    #[serde(default)]
    pub open_portal: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListClientsParams {
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Parses a status name, mapping failures to a 400 with the field name.
pub fn parse_status(raw: &str) -> Result<ClientStatus, ApiError> {
    raw.parse::<ClientStatus>().map_err(|err| {
        ApiError::bad_request(err.to_string())
            .with_details(serde_json::json!({ "field": "status" }))
    })
}

/// A client with the status an operator sees and any differing suggestion.
#[derive(Debug, Clone, Serialize)]
pub struct ClientSummaryResponse {
    #[serde(flatten)]
    pub client: Client,
    pub display_status: ClientStatus,
    pub suggested_status: Option<ClientStatus>,
}

impl From<ClientOverview> for ClientSummaryResponse {
    fn from(overview: ClientOverview) -> Self {
        Self {
            display_status: overview.assessment.display_status(),
            suggested_status: overview.assessment.hint(),
            client: overview.client,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn unknown_status_is_bad_request() {
        let err = parse_status("lead").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(parse_status("Churned").unwrap(), ClientStatus::Churned);
    }

    #[test]
    fn create_request_reads_flat_contact() {
        let req: CreateClientRequest = serde_json::from_value(serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "open_portal": true,
        }))
        .unwrap();

        assert_eq!(req.contact.name, "Ada");
        assert!(req.contact.company.is_none());
        assert!(req.open_portal);
    }
}
