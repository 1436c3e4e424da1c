//! Subcommand implementations.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use datatables_lib::config::TableConfig;
use datatables_lib::error::ConfigError;
use datatables_lib::error::SessionError;
use datatables_lib::host::RerunFlag;
use datatables_lib::model::Dataset;
use datatables_lib::payload::Payload;
use datatables_lib::session::InMemorySession;
use datatables_lib::session::ResetCoordinator;
use datatables_lib::session::ResetOptions;
use datatables_lib::session::SessionStore;
use datatables_lib::widget::build_columns;
use thiserror::Error;

use crate::file_session::FileSession;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("cannot encode output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Inputs shared by commands that render a table.
#[derive(Debug, Clone)]
pub struct TableArgs {
    pub data: PathBuf,
    pub config: Option<PathBuf>,
    pub key: Option<String>,
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn load(args: &TableArgs) -> Result<(Dataset, TableConfig), CliError> {
    let dataset = Dataset::from_json_records(&read(&args.data)?)?;
    let mut config = match &args.config {
        Some(path) => TableConfig::from_json(&read(path)?)?,
        None => TableConfig::default(),
    };
    if let Some(key) = &args.key {
        config.key = Some(key.clone());
    }
    Ok((dataset, config))
}

fn open_session(state: Option<&Path>) -> Result<Box<dyn SessionStore>, CliError> {
    let session: Box<dyn SessionStore> = match state {
        Some(path) => Box::new(FileSession::open(path)?),
        None => Box::new(InMemorySession::new()),
    };
    Ok(session)
}

fn encode(value: &impl serde::Serialize, pretty: bool) -> Result<String, CliError> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

/// Builds the widget payload for a dataset file.
pub fn payload(args: &TableArgs, state: Option<&Path>, pretty: bool) -> Result<String, CliError> {
    let (dataset, config) = load(args)?;
    let session = open_session(state)?;
    let nonce = match &config.key {
        Some(key) => Some(ResetCoordinator::new(session.as_ref()).nonce(key)?),
        None => None,
    };
    let payload = Payload::build(Some(&dataset), &config, nonce)?;
    log::info!("built payload: {} rows, nonce {:?}", payload.data.len(), payload.reset_nonce);
    encode(&payload, pretty)
}

/// Bumps the reset nonce of `key` in the session file.
pub fn reset(state: &Path, key: &str) -> Result<String, CliError> {
    let session = FileSession::open(state)?;
    let nonce = ResetCoordinator::new(&session).reset(key, &RerunFlag::new(), ResetOptions::no_rerun())?;
    Ok(nonce.to_string())
}

/// Lists the columns the widget would display.
pub fn columns(args: &TableArgs, pretty: bool) -> Result<String, CliError> {
    let (dataset, config) = load(args)?;
    let payload = Payload::build(Some(&dataset), &config, None)?;
    encode(&build_columns(&payload), pretty)
}
