//! In-memory proposer returning canned proposal text.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::schedule::ports::{ProposalRequest, ProposerError, ProposerResult, ScheduleProposer};

/// Proposer that answers every request with the same text.
///
/// Serves as the offline fallback when no generator is configured and as a
/// test double. Every received request is recorded.
#[derive(Debug, Clone)]
pub struct StaticScheduleProposer {
    response: Result<String, String>,
    requests: Arc<RwLock<Vec<ProposalRequest>>>,
}

impl StaticScheduleProposer {
    /// Creates a proposer that always returns `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
            requests: Arc::default(),
        }
    }

    /// Creates a proposer that always reports the generator as unavailable.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            requests: Arc::default(),
        }
    }

    /// Returns the requests received so far.
    ///
    /// # Errors
    ///
    /// Returns [`ProposerError::Unavailable`] if the request log lock is
    /// poisoned.
    pub fn requests(&self) -> ProposerResult<Vec<ProposalRequest>> {
        let requests = self
            .requests
            .read()
            .map_err(|err| ProposerError::Unavailable(err.to_string()))?;
        Ok(requests.clone())
    }
}

#[async_trait]
impl ScheduleProposer for StaticScheduleProposer {
    async fn propose(&self, request: &ProposalRequest) -> ProposerResult<String> {
        self.requests
            .write()
            .map_err(|err| ProposerError::Unavailable(err.to_string()))?
            .push(request.clone());
        self.response.clone().map_err(ProposerError::Unavailable)
    }
}
