use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::qr::{AuthenticationType, ConnectionSecurity, IncomingProtocol};

const DEFAULT_INCOMING_HOSTNAME: &str = "imap.example.com";
const DEFAULT_INCOMING_PORT: u16 = 993;
const DEFAULT_OUTGOING_HOSTNAME: &str = "smtp.example.com";
const DEFAULT_OUTGOING_PORT: u16 = 465;
const DEFAULT_DISPLAY_NAME: &str = "Example account config";

/// Per-profile defaults for `mailqr account`. Every field may be left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub incoming_protocol: Option<IncomingProtocol>,
    #[serde(default)]
    pub incoming_hostname: Option<String>,
    #[serde(default)]
    pub incoming_port: Option<u16>,
    #[serde(default)]
    pub incoming_security: Option<ConnectionSecurity>,
    #[serde(default)]
    pub incoming_authentication: Option<AuthenticationType>,
    #[serde(default)]
    pub outgoing_hostname: Option<String>,
    #[serde(default)]
    pub outgoing_port: Option<u16>,
    #[serde(default)]
    pub outgoing_security: Option<ConnectionSecurity>,
    #[serde(default)]
    pub outgoing_authentication: Option<AuthenticationType>,
}

impl Settings {
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(DEFAULT_DISPLAY_NAME)
    }

    pub fn incoming_protocol(&self) -> IncomingProtocol {
        self.incoming_protocol.unwrap_or(IncomingProtocol::Imap)
    }

    pub fn incoming_hostname(&self) -> &str {
        self.incoming_hostname
            .as_deref()
            .unwrap_or(DEFAULT_INCOMING_HOSTNAME)
    }

    pub fn incoming_port(&self) -> u16 {
        self.incoming_port.unwrap_or(DEFAULT_INCOMING_PORT)
    }

    pub fn incoming_security(&self) -> ConnectionSecurity {
        self.incoming_security.unwrap_or(ConnectionSecurity::Tls)
    }

    pub fn incoming_authentication(&self) -> AuthenticationType {
        self.incoming_authentication
            .unwrap_or(AuthenticationType::PasswordCleartext)
    }

    pub fn outgoing_hostname(&self) -> &str {
        self.outgoing_hostname
            .as_deref()
            .unwrap_or(DEFAULT_OUTGOING_HOSTNAME)
    }

    pub fn outgoing_port(&self) -> u16 {
        self.outgoing_port.unwrap_or(DEFAULT_OUTGOING_PORT)
    }

    pub fn outgoing_security(&self) -> ConnectionSecurity {
        self.outgoing_security.unwrap_or(ConnectionSecurity::Tls)
    }

    pub fn outgoing_authentication(&self) -> AuthenticationType {
        self.outgoing_authentication
            .unwrap_or(AuthenticationType::PasswordCleartext)
    }
}

pub fn load(path: PathBuf) -> AppResult<Settings> {
    if !path.exists() {
        debug!(path = %path.display(), "no profile settings, using defaults");
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(&path)?;
    serde_json::from_str(&raw)
        .map_err(|err| AppError::Config(format!("{}: {err}", path.display())))
}
