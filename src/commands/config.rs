use serde::Serialize;

use crate::cli::ConfigCommand;
use crate::config::Settings;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct SettingsView<'a> {
    profile: &'a str,
    path: String,
    settings: &'a Settings,
}

pub fn run(ctx: &AppContext, command: ConfigCommand) -> AppResult<()> {
    let path = ctx.paths.settings_file(&ctx.profile);

    match command {
        ConfigCommand::Path => {
            let path = path.display().to_string();
            ctx.output.emit(std::slice::from_ref(&path), &path)
        }
        ConfigCommand::Show => {
            let view = SettingsView {
                profile: &ctx.profile,
                path: path.display().to_string(),
                settings: &ctx.settings,
            };
            ctx.output.emit(&describe(&ctx.settings), &view)
        }
    }
}

fn describe(settings: &Settings) -> Vec<String> {
    vec![
        format!(
            "incoming: {} {}:{} security={} auth={}",
            settings.incoming_protocol(),
            settings.incoming_hostname(),
            settings.incoming_port(),
            settings.incoming_security(),
            settings.incoming_authentication(),
        ),
        format!(
            "outgoing: SMTP {}:{} security={} auth={}",
            settings.outgoing_hostname(),
            settings.outgoing_port(),
            settings.outgoing_security(),
            settings.outgoing_authentication(),
        ),
        format!("display name: {}", settings.display_name()),
    ]
}
