//! Client aggregate entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ClientId, PortalId, Timestamp};

use super::{ClientError, ClientStatus};

/// Contact fields supplied on intake or edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl ContactDetails {
    /// Trims fields and checks name and email.
    pub fn validated(self) -> Result<Self, ClientError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ClientError::validation("name", "Name cannot be empty"));
        }

        let email = self.email.trim().to_string();
        let well_formed = email
            .split_once('@')
            .map(|(local, domain)| !local.is_empty() && !domain.is_empty())
            .unwrap_or(false);
        if !well_formed {
            return Err(ClientError::validation(
                "email",
                "Email must have the form local@domain",
            ));
        }

        Ok(Self {
            name,
            email,
            company: non_blank(self.company),
            phone: non_blank(self.phone),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Client aggregate.
///
/// `stored_status` is operator-authoritative. Derived suggestions live in
/// `StatusAssessment` and never write back here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub stored_status: ClientStatus,
    pub portal_id: Option<PortalId>,
    pub last_activity: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Client {
    /// Registers a new client as a prospect.
    pub fn register(
        id: ClientId,
        contact: ContactDetails,
        now: Timestamp,
    ) -> Result<Self, ClientError> {
        let contact = contact.validated()?;
        Ok(Self {
            id,
            name: contact.name,
            email: contact.email,
            company: contact.company,
            phone: contact.phone,
            stored_status: ClientStatus::Prospect,
            portal_id: None,
            last_activity: None,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn update_contact(
        &mut self,
        contact: ContactDetails,
        now: Timestamp,
    ) -> Result<(), ClientError> {
        let contact = contact.validated()?;
        self.name = contact.name;
        self.email = contact.email;
        self.company = contact.company;
        self.phone = contact.phone;
        self.updated_at = now;
        Ok(())
    }

    /// Operator override of the lifecycle status.
    pub fn set_status(&mut self, status: ClientStatus, now: Timestamp) {
        self.stored_status = status;
        self.updated_at = now;
    }

    /// Records client activity; older timestamps are ignored.
    pub fn touch_activity(&mut self, at: Timestamp) {
        if self.last_activity.map_or(true, |last| at.is_after(&last)) {
            self.last_activity = Some(at);
        }
    }

    /// Opens a portal for the client, keeping an existing one.
    pub fn ensure_portal(&mut self, now: Timestamp) -> PortalId {
        match self.portal_id {
            Some(id) => id,
            None => {
                let id = PortalId::new();
                self.portal_id = Some(id);
                self.updated_at = now;
                id
            }
        }
    }
}
