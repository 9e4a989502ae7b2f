use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::qr::AccountRecord;

const STDIN_MARKER: &str = "-";
const STDIN_SOURCE: &str = "<stdin>";

/// Loads records from every file in order. No files, or `-`, means stdin.
pub fn read_accounts(files: &[PathBuf]) -> AppResult<Vec<AccountRecord>> {
    read_accounts_from(files, io::stdin().lock())
}

/// Like [`read_accounts`], with `stdin` standing in for standard input.
pub fn read_accounts_from(
    files: &[PathBuf],
    mut stdin: impl Read,
) -> AppResult<Vec<AccountRecord>> {
    if files.is_empty() {
        return parse_accounts(&read_all(&mut stdin)?, STDIN_SOURCE);
    }

    let mut accounts = Vec::new();
    for path in files {
        let (raw, source) = if path == Path::new(STDIN_MARKER) {
            (read_all(&mut stdin)?, STDIN_SOURCE.to_string())
        } else {
            (fs::read_to_string(path)?, path.display().to_string())
        };
        accounts.extend(parse_accounts(&raw, &source)?);
    }

    info!(accounts = accounts.len(), files = files.len(), "loaded account records");
    Ok(accounts)
}

/// An account file holds either a single record or a list of them.
pub fn parse_accounts(raw: &str, source: &str) -> AppResult<Vec<AccountRecord>> {
    let parsed = if raw.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<AccountRecord>>(raw)
    } else {
        serde_json::from_str::<AccountRecord>(raw).map(|record| vec![record])
    };
    let records = parsed.map_err(|err| AppError::InvalidInput(format!("{source}: {err}")))?;
    debug!(source, records = records.len(), "parsed account file");
    Ok(records)
}

fn read_all(reader: &mut impl Read) -> AppResult<String> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    Ok(raw)
}
