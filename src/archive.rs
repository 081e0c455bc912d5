//! Resolves configuration and opens the recording store for a command.

use anyhow::{Context, Result};
use nvr_calendar::Date;
use nvr_store::{InMemoryStore, generate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::cli::GlobalArgs;
use crate::config::NvrConfig;
use crate::convert;

/// Everything a subcommand needs: the store, "today", and the settings.
pub struct Archive {
    pub store: InMemoryStore,
    pub anchor: Date,
    pub config: NvrConfig,
    pub json: bool,
}

impl Archive {
    /// Loads the config file (if any) and opens the store it names, or
    /// generates a synthetic archive around the anchor date.
    ///
    /// CLI flags take precedence over config values.
    pub fn open(global: &GlobalArgs) -> Result<Self> {
        let config = match &global.config {
            Some(path) => NvrConfig::load(path)?,
            None => NvrConfig::default(),
        };
        let anchor = match global.anchor.or(config.anchor) {
            Some(date) => date,
            None => Date::from(chrono::Local::now().date_naive()),
        };

        let store = match &config.store.recordings {
            Some(path) => {
                info!(path = %path.display(), "reading recordings");
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read recordings: {}", path.display()))?;
                InMemoryStore::from_json(&json)
                    .with_context(|| format!("invalid recordings file: {}", path.display()))?
            }
            None => {
                let mock_cfg = convert::build_mock_config(&config.generator)?;
                let mut rng = match global.seed.or(config.seed) {
                    Some(s) => StdRng::seed_from_u64(s),
                    None => StdRng::from_os_rng(),
                };
                generate(anchor, &mock_cfg, &mut rng).context("failed to generate recordings")?
            }
        };
        info!(%anchor, n_recordings = store.len(), "archive ready");

        Ok(Self {
            store,
            anchor,
            config,
            json: global.json,
        })
    }
}
