//! Account-import QR payloads.
//!
//! Turns account records into the compact, position-based JSON text that
//! mail clients scan to import IMAP/POP3 and SMTP settings. Rendering the
//! text as an image is left to whatever QR generator the caller uses.

pub mod codes;
pub mod encoder;
pub mod error;
pub mod record;
pub mod wire;

pub use codes::{AuthenticationType, ConnectionSecurity, FORMAT_VERSION, IncomingProtocol};
pub use encoder::{
    Envelope, Sequence, SequencedPayload, encode, encode_sequence, encode_with_sequence,
};
pub use error::{EncodeError, EncodeResult};
pub use record::{AccountName, AccountRecord};
