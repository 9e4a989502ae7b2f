use tracing::{info, warn};

use crate::cli::AccountArgs;
use crate::commands::PayloadView;
use crate::config::Settings;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::qr::{self, AccountName, AccountRecord, Sequence};

pub fn run(ctx: &AppContext, args: AccountArgs) -> AppResult<()> {
    let record = build_record(&ctx.settings, args)?;
    info!(
        profile = %ctx.profile,
        incoming = %record.incoming_hostname,
        outgoing = %record.outgoing_hostname,
        "built account from flags"
    );

    let accounts = [record];
    let payload = qr::encode(&accounts)?;
    let view = PayloadView::new(payload, accounts.len(), Sequence::default());
    ctx.output.emit(std::slice::from_ref(&view.payload), &view)
}

fn build_record(settings: &Settings, args: AccountArgs) -> AppResult<AccountRecord> {
    let email = args.email.trim().to_string();
    if email.is_empty() {
        return Err(AppError::InvalidInput("--email must not be empty".to_string()));
    }

    let incoming_account_name = match args.account_name {
        Some(name) => AccountName::Value(name),
        None => AccountName::Absent,
    };
    if incoming_account_name.is_absent() && args.password.is_some() {
        warn!("incoming password is left out of the payload without --account-name");
    }

    Ok(AccountRecord {
        incoming_protocol: args
            .incoming_protocol
            .unwrap_or_else(|| settings.incoming_protocol()),
        incoming_hostname: args
            .incoming_host
            .unwrap_or_else(|| settings.incoming_hostname().to_string()),
        incoming_port: args.incoming_port.unwrap_or_else(|| settings.incoming_port()),
        incoming_connection_security: args
            .incoming_security
            .unwrap_or_else(|| settings.incoming_security()),
        incoming_authentication_type: args
            .incoming_auth
            .unwrap_or_else(|| settings.incoming_authentication()),
        incoming_username: args.incoming_username.unwrap_or_else(|| email.clone()),
        incoming_account_name,
        incoming_password: args.password,
        outgoing_hostname: args
            .outgoing_host
            .unwrap_or_else(|| settings.outgoing_hostname().to_string()),
        outgoing_port: args.outgoing_port.unwrap_or_else(|| settings.outgoing_port()),
        outgoing_connection_security: args
            .outgoing_security
            .unwrap_or_else(|| settings.outgoing_security()),
        outgoing_authentication_type: args
            .outgoing_auth
            .unwrap_or_else(|| settings.outgoing_authentication()),
        outgoing_username: args.outgoing_username.unwrap_or_else(|| email.clone()),
        outgoing_password: args.outgoing_password,
        identity_display_name: args
            .display_name
            .unwrap_or_else(|| settings.display_name().to_string()),
        identity_email_address: email,
    })
}
