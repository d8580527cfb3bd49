//! The call lifeline's in-flight request.
//!
//! Asking the oracle can be slow, so the session hands out a
//! [`PendingCall`] that front ends run wherever they like. The resulting
//! [`CallOutcome`] carries the round it was asked in; the session drops it
//! if the player has moved on by then.

use std::sync::Arc;

use crate::oracle::{Oracle, OracleError, OracleRequest};

/// An oracle request that has been paid for but not yet answered.
pub struct PendingCall {
    round: u64,
    request: OracleRequest,
    oracle: Arc<dyn Oracle>,
}

impl std::fmt::Debug for PendingCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingCall")
            .field("round", &self.round)
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

impl PendingCall {
    pub(crate) fn new(round: u64, request: OracleRequest, oracle: Arc<dyn Oracle>) -> Self {
        Self {
            round,
            request,
            oracle,
        }
    }

    /// The round this call belongs to.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// What will be sent to the oracle.
    pub fn request(&self) -> &OracleRequest {
        &self.request
    }

    /// Ask the oracle. May block.
    pub fn run(self) -> CallOutcome {
        let result = self
            .oracle
            .consult(&self.request)
            .and_then(|reply| match first_line(&reply) {
                "" => Err(OracleError::Failed("empty reply".to_string())),
                line => Ok(line.to_string()),
            });

        if let Err(e) = &result {
            tracing::warn!(round = self.round, error = %e, "oracle call failed");
        }

        CallOutcome {
            round: self.round,
            persona: self.request.persona,
            result,
        }
    }
}

/// The oracle's answer (or failure) for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallOutcome {
    /// The round the call was placed in.
    pub round: u64,
    /// Who was called.
    pub persona: String,
    /// The single reply line, or why there is none.
    pub result: Result<String, OracleError>,
}

impl CallOutcome {
    /// The hint line to show the player.
    pub fn hint_text(&self) -> String {
        match &self.result {
            Ok(line) => format!("{}: {line}", self.persona),
            Err(e) => format!("Error: {e}"),
        }
    }
}

fn first_line(reply: &str) -> &str {
    reply.trim().lines().next().unwrap_or("").trim()
}
