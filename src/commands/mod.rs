pub mod account;
pub mod config;
pub mod encode;
pub mod split;

use serde::Serialize;

use crate::qr::{Sequence, SequencedPayload};

/// JSON view of one produced payload.
#[derive(Debug, Clone, Serialize)]
pub struct PayloadView {
    pub payload: String,
    pub accounts: usize,
    pub sequence: Sequence,
    pub bytes: usize,
}

impl PayloadView {
    pub fn new(payload: String, accounts: usize, sequence: Sequence) -> Self {
        let bytes = payload.len();
        Self {
            payload,
            accounts,
            sequence,
            bytes,
        }
    }
}

impl From<SequencedPayload> for PayloadView {
    fn from(part: SequencedPayload) -> Self {
        Self::new(part.payload, part.accounts, part.sequence)
    }
}
