use std::fmt;

use clap::ValueEnum;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Version of the payload layout. Always the first envelope element.
pub const FORMAT_VERSION: u8 = 1;

/// Outgoing servers are always SMTP, so the protocol slot is a constant.
pub const OUTGOING_PROTOCOL_SMTP: u8 = 0;

pub const DEFAULT_SEQUENCE_POSITION: u32 = 1;
pub const DEFAULT_SEQUENCE_TOTAL: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum IncomingProtocol {
    Imap,
    Pop3,
}

impl IncomingProtocol {
    pub const ALL: [Self; 2] = [Self::Imap, Self::Pop3];

    pub const fn code(self) -> u8 {
        match self {
            Self::Imap => 0,
            Self::Pop3 => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|value| value.code() == code)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Imap => "IMAP",
            Self::Pop3 => "POP3",
        }
    }
}

/// Socket security of a server connection. Code 1 is reserved and never produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ConnectionSecurity {
    Plain,
    AlwaysStartTls,
    Tls,
}

impl ConnectionSecurity {
    pub const ALL: [Self; 3] = [Self::Plain, Self::AlwaysStartTls, Self::Tls];

    pub const fn code(self) -> u8 {
        match self {
            Self::Plain => 0,
            Self::AlwaysStartTls => 2,
            Self::Tls => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|value| value.code() == code)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "Plain",
            Self::AlwaysStartTls => "AlwaysStartTls",
            Self::Tls => "Tls",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum AuthenticationType {
    None,
    PasswordCleartext,
    PasswordEncrypted,
    Gssapi,
    Ntlm,
    TlsCertificate,
    #[value(name = "oauth2")]
    OAuth2,
}

impl AuthenticationType {
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::PasswordCleartext,
        Self::PasswordEncrypted,
        Self::Gssapi,
        Self::Ntlm,
        Self::TlsCertificate,
        Self::OAuth2,
    ];

    pub const fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::PasswordCleartext => 1,
            Self::PasswordEncrypted => 2,
            Self::Gssapi => 3,
            Self::Ntlm => 4,
            Self::TlsCertificate => 5,
            Self::OAuth2 => 6,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|value| value.code() == code)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::PasswordCleartext => "PasswordCleartext",
            Self::PasswordEncrypted => "PasswordEncrypted",
            Self::Gssapi => "Gssapi",
            Self::Ntlm => "Ntlm",
            Self::TlsCertificate => "TlsCertificate",
            Self::OAuth2 => "OAuth2",
        }
    }
}

/// Loose name comparison: `always-start-tls`, `always_start_tls` and
/// `AlwaysStartTls` all match.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

// Shared serde plumbing: codes go out as bare integers, and come in either as
// the integer code or as the variant name.
macro_rules! code_serde {
    ($ty:ty, $expecting:literal) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u8(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct CodeVisitor;

                impl Visitor<'_> for CodeVisitor {
                    type Value = $ty;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        f.write_str($expecting)
                    }

                    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                        u8::try_from(value)
                            .ok()
                            .and_then(<$ty>::from_code)
                            .ok_or_else(|| E::custom(format!("unknown code {value}")))
                    }

                    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                        u64::try_from(value)
                            .map_err(|_| E::custom(format!("unknown code {value}")))
                            .and_then(|value| self.visit_u64(value))
                    }

                    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                        let wanted = normalize(value);
                        <$ty>::ALL
                            .into_iter()
                            .find(|candidate| normalize(candidate.name()) == wanted)
                            .ok_or_else(|| E::custom(format!("unknown name `{value}`")))
                    }
                }

                deserializer.deserialize_any(CodeVisitor)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

code_serde!(IncomingProtocol, "an incoming protocol code or name");
code_serde!(ConnectionSecurity, "a connection security code or name");
code_serde!(AuthenticationType, "an authentication type code or name");
