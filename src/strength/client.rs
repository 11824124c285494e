// src/strength/client.rs
use std::future::Future;
use std::sync::{Mutex, MutexGuard};
use serde::Serialize;

use crate::core::config::Config;
use crate::models::StrengthResult;
use crate::strength::error::{Result, StrengthCheckError};

/// Something that can rate a password, normally the remote `/check` service.
pub trait StrengthEvaluator {
    fn evaluate(&self, password: &str) -> impl Future<Output = Result<StrengthResult>> + Send;
}

#[derive(Serialize)]
struct CheckRequest<'a> {
    password: &'a str,
}

/// Evaluator that posts the password as JSON to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpEvaluator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpEvaluator {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.check_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.strength_endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl StrengthEvaluator for HttpEvaluator {
    async fn evaluate(&self, password: &str) -> Result<StrengthResult> {
        log::debug!("Sending strength check to {}", self.endpoint);

        let response = self.client
            .post(&self.endpoint)
            .json(&CheckRequest { password })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(StrengthCheckError::Status {
                status: status.as_u16(),
                body,
            });
        }

        // Parse into the typed result so a shape mismatch is an error, not data
        let result = serde_json::from_str(&body)?;
        Ok(result)
    }
}

/// What a call to [`StrengthChecker::check_strength`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Empty password: nothing was sent and the displayed result is unchanged.
    Skipped,
    /// Another check is still in flight: nothing was sent.
    Busy,
    /// The displayed result was replaced with this value.
    Completed(StrengthResult),
}

#[derive(Default)]
struct CheckerState {
    pending: bool,
    result: Option<StrengthResult>,
}

/// Strength feedback for the checker page.
///
/// Holds the last displayed result and whether a request is outstanding.
/// Only one request runs at a time; triggers while one is pending are
/// dropped rather than queued.
pub struct StrengthChecker<E> {
    evaluator: E,
    state: Mutex<CheckerState>,
}

impl<E: StrengthEvaluator> StrengthChecker<E> {
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            state: Mutex::new(CheckerState::default()),
        }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn is_pending(&self) -> bool {
        self.lock().pending
    }

    /// Whether the check action is currently enabled.
    pub fn can_check(&self) -> bool {
        !self.is_pending()
    }

    pub fn result(&self) -> Option<StrengthResult> {
        self.lock().result.clone()
    }

    pub async fn check_strength(&self, password: &str) -> CheckOutcome {
        if password.is_empty() {
            log::debug!("Ignoring strength check for empty password");
            return CheckOutcome::Skipped;
        }

        let _pending = match self.begin() {
            Some(guard) => guard,
            None => {
                log::debug!("Strength check already pending, ignoring trigger");
                return CheckOutcome::Busy;
            }
        };

        let result = match self.evaluator.evaluate(password).await {
            Ok(result) => {
                log::info!("Strength check completed: {}", result.strength_category);
                result
            }
            Err(e) => {
                log::error!("Strength check failed: {}", e);
                StrengthResult::unreachable()
            }
        };

        self.lock().result = Some(result.clone());
        CheckOutcome::Completed(result)
    }

    fn begin(&self) -> Option<PendingGuard<'_>> {
        let mut state = self.lock();
        if state.pending {
            return None;
        }
        state.pending = true;
        Some(PendingGuard { state: &self.state })
    }

    fn lock(&self) -> MutexGuard<'_, CheckerState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// Clears the pending flag when the request finishes or its future is dropped
struct PendingGuard<'a> {
    state: &'a Mutex<CheckerState>,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        state.pending = false;
    }
}
