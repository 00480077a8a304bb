#![deny(rust_2018_idioms)]

use anyhow::Result;
use ghx::{
    app::App,
    github::GhClient,
    storage::{self, JsonFileStorage},
};
use std::{env, path::PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use url::Url;

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cmd = cli::cmd();
    debug!(?cmd, "launched");

    // create app
    let base_url = match env::var("GHX_API_BASE") {
        Ok(x) => Some(x.parse::<Url>()?),
        Err(_) => None,
    };
    let data_dir: PathBuf = match env::var("GHX_DATA_DIR") {
        Ok(x) => x.into(),
        Err(_) => storage::default_data_dir()?,
    };
    let client = GhClient::new(base_url)?;
    let storage = JsonFileStorage::new(data_dir);
    let mut app = App::new(storage, client)?;

    // process command
    use cli::Command::*;
    match cmd.cmd {
        Search { query } => app.search(&query).await?,
        Ls {} => app.list(),
        Show { repo } => app.show(&repo)?,
    };

    debug!("exiting");
    Ok(())
}
