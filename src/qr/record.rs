use serde::{Deserialize, Deserializer, Serialize};

use super::codes::{AuthenticationType, ConnectionSecurity, IncomingProtocol};

/// Account name of the incoming server.
///
/// Leaving the name out entirely also rules out sending a password. A null or
/// empty name tells the importing client to fall back to the email address
/// while still leaving room for a password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AccountName {
    #[default]
    Absent,
    Null,
    Value(String),
}

impl AccountName {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }
}

impl From<Option<String>> for AccountName {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(value) => Self::Value(value),
            None => Self::Null,
        }
    }
}

impl<'de> Deserialize<'de> for AccountName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // A missing key never reaches this point; `#[serde(default)]` maps it
        // to `Absent`.
        Option::<String>::deserialize(deserializer).map(Self::from)
    }
}

impl Serialize for AccountName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => serializer.serialize_str(value),
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

/// One email account as handed to the encoder.
///
/// Field names follow the camelCase keys used by account files, e.g.
/// `incomingHostname`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub incoming_protocol: IncomingProtocol,
    pub incoming_hostname: String,
    pub incoming_port: u16,
    pub incoming_connection_security: ConnectionSecurity,
    pub incoming_authentication_type: AuthenticationType,
    pub incoming_username: String,
    #[serde(default, skip_serializing_if = "AccountName::is_absent")]
    pub incoming_account_name: AccountName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incoming_password: Option<String>,
    pub outgoing_hostname: String,
    pub outgoing_port: u16,
    pub outgoing_connection_security: ConnectionSecurity,
    pub outgoing_authentication_type: AuthenticationType,
    pub outgoing_username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outgoing_password: Option<String>,
    pub identity_email_address: String,
    pub identity_display_name: String,
}

impl AccountRecord {
    pub fn incoming_password(&self) -> Option<&str> {
        non_empty(self.incoming_password.as_deref())
    }

    pub fn outgoing_password(&self) -> Option<&str> {
        non_empty(self.outgoing_password.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
