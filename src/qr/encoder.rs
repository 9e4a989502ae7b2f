use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;
use tracing::debug;

use super::codes::{DEFAULT_SEQUENCE_POSITION, DEFAULT_SEQUENCE_TOTAL, FORMAT_VERSION};
use super::error::{EncodeError, EncodeResult};
use super::record::AccountRecord;
use super::wire::AccountBlock;

/// Where a payload sits in a run of QR codes. Both values are 1-based and are
/// written out as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sequence {
    pub position: u32,
    pub total: u32,
}

impl Sequence {
    pub const fn new(position: u32, total: u32) -> Self {
        Self { position, total }
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new(DEFAULT_SEQUENCE_POSITION, DEFAULT_SEQUENCE_TOTAL)
    }
}

/// The complete top-level array of one payload.
#[derive(Debug, Clone)]
pub struct Envelope<'a> {
    pub sequence: Sequence,
    pub accounts: Vec<AccountBlock<'a>>,
}

impl<'a> Envelope<'a> {
    pub fn new(accounts: &'a [AccountRecord], sequence: Sequence) -> Self {
        Self {
            sequence,
            accounts: accounts.iter().map(AccountBlock::from_record).collect(),
        }
    }

    /// Number of top-level elements: version, sequence pair, then two per account.
    pub fn element_count(&self) -> usize {
        2 + 2 * self.accounts.len()
    }
}

impl Serialize for Envelope<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.element_count()))?;
        seq.serialize_element(&FORMAT_VERSION)?;
        seq.serialize_element(&(self.sequence.position, self.sequence.total))?;
        for block in &self.accounts {
            seq.serialize_element(&block.incoming)?;
            seq.serialize_element(&block.outgoing)?;
        }
        seq.end()
    }
}

/// Encodes `accounts` as a single payload in a run of one code.
pub fn encode(accounts: &[AccountRecord]) -> EncodeResult<String> {
    encode_with_sequence(accounts, Sequence::default())
}

/// Encodes `accounts` as one payload of a multi-code run.
///
/// The resulting text is meant to go into the QR code as UTF-8 bytes. The
/// sequence is not checked against the number of accounts; callers that split
/// accounts across codes pick the split themselves (or use
/// [`encode_sequence`]).
pub fn encode_with_sequence(
    accounts: &[AccountRecord],
    sequence: Sequence,
) -> EncodeResult<String> {
    let envelope = Envelope::new(accounts, sequence);
    let payload = serde_json::to_string(&envelope)?;
    debug!(
        accounts = accounts.len(),
        position = sequence.position,
        total = sequence.total,
        bytes = payload.len(),
        "encoded account payload"
    );
    Ok(payload)
}

/// One payload of a split run, with what went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencedPayload {
    pub payload: String,
    pub sequence: Sequence,
    pub accounts: usize,
}

/// Splits `accounts` into runs of at most `per_code` records and encodes each
/// run with its place in the sequence.
pub fn encode_sequence(
    accounts: &[AccountRecord],
    per_code: usize,
) -> EncodeResult<Vec<SequencedPayload>> {
    if per_code == 0 {
        return Err(EncodeError::InvalidSplit(per_code));
    }

    if accounts.is_empty() {
        return Ok(vec![SequencedPayload {
            payload: encode(accounts)?,
            sequence: Sequence::default(),
            accounts: 0,
        }]);
    }

    let chunks: Vec<_> = accounts.chunks(per_code).collect();
    let total = u32::try_from(chunks.len())
        .map_err(|_| EncodeError::SequenceTooLong(chunks.len()))?;

    chunks
        .into_iter()
        .zip(1..)
        .map(|(chunk, position)| -> EncodeResult<SequencedPayload> {
            let sequence = Sequence::new(position, total);
            Ok(SequencedPayload {
                payload: encode_with_sequence(chunk, sequence)?,
                sequence,
                accounts: chunk.len(),
            })
        })
        .collect()
}
