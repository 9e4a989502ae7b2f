//! Positional arrays of the account payload.
//!
//! Every level of the payload is a JSON array whose slots are identified by
//! position only. Trailing optional slots may be dropped, but a slot can only
//! be present when every slot before it is present too.

use serde::ser::{SerializeSeq, SerializeTuple, Serializer};
use serde::Serialize;

use super::codes::{
    AuthenticationType, ConnectionSecurity, IncomingProtocol, OUTGOING_PROTOCOL_SMTP,
};
use super::record::AccountRecord;

/// Walks an ordered chain of optional slots. Once one slot is left out, every
/// later slot is left out as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cascade {
    Open,
    Closed,
}

impl Cascade {
    pub fn new() -> Self {
        Self::Open
    }

    /// Returns whether the next slot is emitted.
    pub fn admit(&mut self, wanted: bool) -> bool {
        match self {
            Self::Open if wanted => true,
            _ => {
                *self = Self::Closed;
                false
            }
        }
    }
}

impl Default for Cascade {
    fn default() -> Self {
        Self::new()
    }
}

/// Optional tail of the incoming server array. There is no variant holding a
/// password without an account name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomingTail<'a> {
    Empty,
    Name(Option<&'a str>),
    NameAndPassword(Option<&'a str>, &'a str),
}

impl<'a> IncomingTail<'a> {
    pub fn from_record(record: &'a AccountRecord) -> Self {
        let mut cascade = Cascade::new();
        let name = &record.incoming_account_name;

        if !cascade.admit(!name.is_absent()) {
            return Self::Empty;
        }

        let name = name.as_deref();
        let password = record.incoming_password();
        if let (true, Some(password)) = (cascade.admit(password.is_some()), password) {
            return Self::NameAndPassword(name, password);
        }

        Self::Name(name)
    }

    fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Name(_) => 1,
            Self::NameAndPassword(..) => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingServer<'a> {
    pub protocol: IncomingProtocol,
    pub hostname: &'a str,
    pub port: u16,
    pub security: ConnectionSecurity,
    pub authentication: AuthenticationType,
    pub username: &'a str,
    pub tail: IncomingTail<'a>,
}

impl<'a> IncomingServer<'a> {
    pub fn from_record(record: &'a AccountRecord) -> Self {
        Self {
            protocol: record.incoming_protocol,
            hostname: &record.incoming_hostname,
            port: record.incoming_port,
            security: record.incoming_connection_security,
            authentication: record.incoming_authentication_type,
            username: &record.incoming_username,
            tail: IncomingTail::from_record(record),
        }
    }
}

impl Serialize for IncomingServer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(6 + self.tail.len()))?;
        seq.serialize_element(&self.protocol)?;
        seq.serialize_element(self.hostname)?;
        seq.serialize_element(&self.port)?;
        seq.serialize_element(&self.security)?;
        seq.serialize_element(&self.authentication)?;
        seq.serialize_element(self.username)?;
        match &self.tail {
            IncomingTail::Empty => {}
            IncomingTail::Name(name) => seq.serialize_element(name)?,
            IncomingTail::NameAndPassword(name, password) => {
                seq.serialize_element(name)?;
                seq.serialize_element(password)?;
            }
        }
        seq.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingServer<'a> {
    pub hostname: &'a str,
    pub port: u16,
    pub security: ConnectionSecurity,
    pub authentication: AuthenticationType,
    pub username: &'a str,
    pub password: Option<&'a str>,
}

impl<'a> OutgoingServer<'a> {
    pub fn from_record(record: &'a AccountRecord) -> Self {
        Self {
            hostname: &record.outgoing_hostname,
            port: record.outgoing_port,
            security: record.outgoing_connection_security,
            authentication: record.outgoing_authentication_type,
            username: &record.outgoing_username,
            password: record.outgoing_password(),
        }
    }
}

impl Serialize for OutgoingServer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 6 + usize::from(self.password.is_some());
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&OUTGOING_PROTOCOL_SMTP)?;
        seq.serialize_element(self.hostname)?;
        seq.serialize_element(&self.port)?;
        seq.serialize_element(&self.security)?;
        seq.serialize_element(&self.authentication)?;
        seq.serialize_element(self.username)?;
        if let Some(password) = self.password {
            seq.serialize_element(password)?;
        }
        seq.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity<'a> {
    pub email_address: &'a str,
    pub display_name: &'a str,
}

impl Serialize for Identity<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(self.email_address)?;
        tuple.serialize_element(self.display_name)?;
        tuple.end()
    }
}

/// The outgoing server list of one account. The format reserves room for
/// several servers; exactly one is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingServerGroups<'a> {
    pub server: OutgoingServer<'a>,
    pub identity: Identity<'a>,
}

impl Serialize for OutgoingServerGroups<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut groups = serializer.serialize_seq(Some(1))?;
        groups.serialize_element(&(&self.server, &self.identity))?;
        groups.end()
    }
}

/// Both top-level elements contributed by a single account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountBlock<'a> {
    pub incoming: IncomingServer<'a>,
    pub outgoing: OutgoingServerGroups<'a>,
}

impl<'a> AccountBlock<'a> {
    pub fn from_record(record: &'a AccountRecord) -> Self {
        Self {
            incoming: IncomingServer::from_record(record),
            outgoing: OutgoingServerGroups {
                server: OutgoingServer::from_record(record),
                identity: Identity {
                    email_address: &record.identity_email_address,
                    display_name: &record.identity_display_name,
                },
            },
        }
    }
}
