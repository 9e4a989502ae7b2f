use tracing::debug;

use crate::config::{self, AppPaths, Settings};
use crate::error::AppResult;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub profile: String,
    pub paths: AppPaths,
    pub settings: Settings,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(profile: String, json: bool) -> AppResult<Self> {
        let paths = AppPaths::discover()?;
        Self::with_paths(paths, profile, json)
    }

    pub fn with_paths(paths: AppPaths, profile: String, json: bool) -> AppResult<Self> {
        let profile = config::resolve_profile(&profile);
        let settings = config::load_settings(&paths, &profile)?;
        let output = Output::new(json);
        debug!(profile = %profile, "context ready");

        Ok(Self {
            profile,
            paths,
            settings,
            output,
        })
    }
}
