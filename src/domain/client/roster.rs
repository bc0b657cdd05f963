//! Client list filtering and ordering.
//!
//! Both use the stored status only; suggestions never reorder the roster.

use super::{Client, ClientStatus};

/// Keeps clients whose stored status matches `status` (all when `None`),
/// ordered by stored status then name.
pub fn filter_and_sort(clients: Vec<Client>, status: Option<ClientStatus>) -> Vec<Client> {
    let mut roster: Vec<Client> = clients
        .into_iter()
        .filter(|c| status.map_or(true, |s| c.stored_status == s))
        .collect();
    roster.sort_by(|a, b| {
        a.stored_status
            .cmp(&b.stored_status)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    roster
}
