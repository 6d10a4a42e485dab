//! Summary generation service: one in-flight generation per visit,
//! bounded by a hard timeout, cancelable from the outside. Generation
//! runs the blocking HTTP client on the blocking pool so the async
//! runtime never stalls on the model. Cancellation detaches the caller
//! immediately; the underlying HTTP request dies with its own timeout.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::oneshot;

use super::client::SummaryGenerate;
use super::{parser, prompt, NarrativeSummary, SummarizerError};
use crate::config;
use crate::models::IntakeSession;

pub struct SummaryService<C> {
    client: Arc<C>,
    timeout_secs: u64,
    in_flight: Mutex<HashMap<String, oneshot::Sender<()>>>,
}

/// Frees a visit's single-flight slot when the generation future is
/// dropped, including a caller that abandons the await without ever
/// calling `cancel`.
struct InFlightSlot<'a> {
    slots: &'a Mutex<HashMap<String, oneshot::Sender<()>>>,
    visit_id: String,
}

impl Drop for InFlightSlot<'_> {
    fn drop(&mut self) {
        if let Ok(mut guard) = self.slots.lock() {
            guard.remove(&self.visit_id);
        }
    }
}

impl<C> SummaryService<C>
where
    C: SummaryGenerate + Send + Sync + 'static,
{
    pub fn new(client: C) -> Self {
        Self::with_timeout(client, config::SUMMARIZER_TIMEOUT_SECS)
    }

    pub fn with_timeout(client: C, timeout_secs: u64) -> Self {
        Self {
            client: Arc::new(client),
            timeout_secs,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Generate a narrative summary for a completed session. A second
    /// call for the same visit while one is running returns `Busy`
    /// without touching the running generation.
    pub async fn generate(
        &self,
        session: &IntakeSession,
    ) -> Result<NarrativeSummary, SummarizerError> {
        let visit_id = session.visit_id().to_string();
        let request = prompt::build_prompt(session);

        // Register under the single-flight lock; reject if already busy.
        let mut cancel_rx = {
            let mut guard = self
                .in_flight
                .lock()
                .map_err(|_| SummarizerError::LockPoisoned)?;
            if guard.contains_key(&visit_id) {
                return Err(SummarizerError::Busy(visit_id));
            }
            let (cancel_tx, cancel_rx) = oneshot::channel();
            guard.insert(visit_id.clone(), cancel_tx);
            cancel_rx
        };
        let _slot = InFlightSlot {
            slots: &self.in_flight,
            visit_id: visit_id.clone(),
        };

        let client = Arc::clone(&self.client);
        let mut task = tokio::task::spawn_blocking(move || {
            let raw = client.generate(&request, prompt::SYSTEM_PROMPT)?;
            parser::parse_summary(&raw)
        });

        tokio::select! {
            joined = tokio::time::timeout(Duration::from_secs(self.timeout_secs), &mut task) => {
                match joined {
                    Err(_) => {
                        task.abort();
                        tracing::warn!(
                            visit_id = %visit_id,
                            timeout_secs = self.timeout_secs,
                            "Summary generation timed out"
                        );
                        Err(SummarizerError::Timeout(self.timeout_secs))
                    }
                    Ok(Err(join_err)) => Err(SummarizerError::Http(join_err.to_string())),
                    Ok(Ok(result)) => result,
                }
            }
            _ = &mut cancel_rx => {
                task.abort();
                Err(SummarizerError::Canceled)
            }
        }
    }

    /// Detach a running generation. Returns whether one was in flight.
    pub fn cancel(&self, visit_id: &str) -> bool {
        let Ok(mut guard) = self.in_flight.lock() else {
            return false;
        };
        match guard.remove(visit_id) {
            Some(cancel_tx) => {
                // A dropped receiver means the generation just finished;
                // either way the slot is free again.
                let _ = cancel_tx.send(());
                tracing::info!(visit_id, "Summary generation canceled");
                true
            }
            None => false,
        }
    }

    pub fn is_in_flight(&self, visit_id: &str) -> bool {
        self.in_flight
            .lock()
            .map(|guard| guard.contains_key(visit_id))
            .unwrap_or(false)
    }
}
