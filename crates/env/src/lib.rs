use std::{
    env::var,
    path::{Path, PathBuf},
    sync::Arc,
};

use dotenv::dotenv;
use eyre::{Context, Error};
use log::debug;
use url::Url;

const DEFAULT_SESSION_FILE: &str = ".enrollment-session.json";
const DEFAULT_EXPORT_DIR: &str = ".";

#[derive(Clone, Debug)]
pub struct Env(Arc<EnvInner>);

#[derive(Clone, Debug)]
pub struct EnvInner {
    api_url: Url,
    session_file: PathBuf,
    export_dir: PathBuf,
}

impl Env {
    /// Base url of the registration API, without a trailing slash.
    pub fn api_url(&self) -> &str {
        self.0.api_url.as_str().trim_end_matches('/')
    }

    pub fn session_file(&self) -> &Path {
        &self.0.session_file
    }

    pub fn export_dir(&self) -> &Path {
        &self.0.export_dir
    }

    pub fn load() -> Result<Env, Error> {
        if let Err(err) = dotenv() {
            debug!("No .env file loaded: {}", err);
        }

        let api_url = var("API_URL").context("API_URL is not set")?;
        Env::new(
            &api_url,
            var("SESSION_FILE").ok(),
            var("EXPORT_DIR").ok(),
        )
    }

    pub fn new(
        api_url: &str,
        session_file: Option<String>,
        export_dir: Option<String>,
    ) -> Result<Env, Error> {
        let api_url = Url::parse(api_url).context("API_URL is not a valid url")?;
        if api_url.cannot_be_a_base() {
            eyre::bail!("API_URL must be an http(s) base url");
        }
        Ok(Env(Arc::new(EnvInner {
            api_url,
            session_file: session_file
                .filter(|path| !path.is_empty())
                .unwrap_or_else(|| DEFAULT_SESSION_FILE.to_owned())
                .into(),
            export_dir: export_dir
                .filter(|path| !path.is_empty())
                .unwrap_or_else(|| DEFAULT_EXPORT_DIR.to_owned())
                .into(),
        })))
    }
}
