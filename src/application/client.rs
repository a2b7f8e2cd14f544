use crate::application::salary_service::{SalaryEstimate, SalaryService};
use crate::domain::employee::EmployeeProfile;
use crate::domain::errors::{PipelineError, PredictionFailed};
use crossbeam_channel::{Receiver, Sender};
use tokio::runtime::Handle;
use tracing::error;

pub type EstimateOutcome = Result<SalaryEstimate, PredictionFailed>;

/// A client interface for submitting profiles from a synchronous UI thread.
/// Work runs on the Tokio runtime; outcomes come back over a channel and are
/// collected with the non-blocking [`SalaryClient::poll`].
pub struct SalaryClient {
    service: SalaryService,
    runtime: Handle,
    outcome_tx: Sender<EstimateOutcome>,
    outcome_rx: Receiver<EstimateOutcome>,
    in_flight: usize,
}

impl SalaryClient {
    pub fn new(service: SalaryService, runtime: Handle) -> Self {
        let (outcome_tx, outcome_rx) = crossbeam_channel::unbounded();
        Self {
            service,
            runtime,
            outcome_tx,
            outcome_rx,
            in_flight: 0,
        }
    }

    pub fn service(&self) -> &SalaryService {
        &self.service
    }

    pub fn submit(&mut self, profile: EmployeeProfile) {
        let service = self.service.clone();
        let tx = self.outcome_tx.clone();
        self.in_flight += 1;

        // Every submit sends exactly one outcome, even when the estimate panics.
        self.runtime.spawn(async move {
            let task = tokio::spawn(async move { service.estimate(&profile).await });
            let outcome = match task.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!("SalaryClient: estimate task failed: {}", e);
                    Err(PredictionFailed::from(PipelineError::Aborted(e.to_string())))
                }
            };
            let _ = tx.send(outcome);
        });
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight > 0
    }

    /// Latest finished outcome, if any. Older outcomes still queued are skipped.
    pub fn poll(&mut self) -> Option<EstimateOutcome> {
        let mut latest = None;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            latest = Some(outcome);
        }
        latest
    }
}
