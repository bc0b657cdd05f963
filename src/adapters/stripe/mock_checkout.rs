//! Mock checkout session creator for testing.
//!
//! Supports pre-configured sessions, error injection and call tracking.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{CheckoutError, CheckoutRequest, CheckoutSession, CheckoutSessionCreator};

/// Mock `CheckoutSessionCreator`.
///
/// # Example
///
/// ```ignore
/// let mock = MockCheckoutSessionCreator::new();
/// mock.set_error(CheckoutError::network("Test timeout"));
/// let result = mock.create_checkout_session(request).await;
/// assert_eq!(mock.requests().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockCheckoutSessionCreator {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Session to return on the next call.
    next_session: Option<CheckoutSession>,

    /// Error to return on the next call.
    next_error: Option<CheckoutError>,

    /// Every request received, in order.
    requests: Vec<CheckoutRequest>,

    counter: u32,
}

impl MockCheckoutSessionCreator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session returned by the next call.
    pub fn set_session(&self, session: CheckoutSession) {
        self.inner.lock().unwrap().next_session = Some(session);
    }

    /// Make the next call fail with `error`.
    pub fn set_error(&self, error: CheckoutError) {
        self.inner.lock().unwrap().next_error = Some(error);
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<CheckoutRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }
}

#[async_trait]
impl CheckoutSessionCreator for MockCheckoutSessionCreator {
    async fn create_checkout_session(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutSession, CheckoutError> {
        let mut state = self.inner.lock().unwrap();
        state.requests.push(request);

        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        if let Some(session) = state.next_session.take() {
            return Ok(session);
        }

        state.counter += 1;
        let id = format!("cs_mock_{}", state.counter);
        Ok(CheckoutSession {
            url: format!("https://checkout.example.com/pay/{}", id),
            id,
            expires_at: chrono::Utc::now().timestamp() + 24 * 60 * 60,
        })
    }
}
