use crate::events::AppEvent;
use async_channel::Sender;
use bloom::{ButtonStyle, DisplayScale, Item, ItemConfig, StyleConfig};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scale: DisplayScale,
    #[serde(default)]
    pub button: StyleConfig,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

impl Config {
    pub fn style(&self) -> ButtonStyle {
        self.button.resolve(&self.scale)
    }

    pub fn items(&self) -> Vec<Item> {
        self.items
            .iter()
            .map(|item| item.resolve(&self.scale))
            .collect()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "bloom", "bloom").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Reads `path` layered with environment overrides. Variables take the
/// form `BLOOM_<SECTION>__<KEY>`, e.g. `BLOOM_BUTTON__TEXT=Go`.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("BLOOM")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Config to apply after the watcher reports a change. A removed file falls
/// back to the bundled sample, as at startup, instead of an empty ring.
pub fn reload_config(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        load_config(path)
    } else {
        log::info!("{} was removed, using the bundled sample", path.display());
        default_config()
    }
}

pub fn default_config() -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// The file config when it exists and parses, otherwise the bundled sample.
pub fn load_or_default(path: &Path) -> Config {
    if path.exists() {
        match load_config(path) {
            Ok(c) => return c,
            Err(e) => log::error!("Failed to load {}: {}", path.display(), e),
        }
    } else {
        log::info!("No config at {}, using the bundled sample", path.display());
    }

    default_config().unwrap_or_else(|e| {
        log::error!("Bundled config is invalid: {}", e);
        Config::default()
    })
}

pub fn write_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(())
}

/// Whether a filesystem event touches the config file itself. Editors that
/// save through a rename show up as create or remove events on the path.
fn touches_config(event: &notify::Event, config_path: &Path) -> bool {
    let relevant = matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    );
    relevant && event.paths.iter().any(|p| p == config_path)
}

/// Watches the directory holding `config_path` and sends
/// [`AppEvent::ConfigReload`] whenever the file changes. Returns once the
/// receiving side hangs up or the watcher cannot be set up.
pub async fn run_async_watcher(config_path: PathBuf, tx: Sender<AppEvent>) {
    let Some(config_dir) = config_path.parent().map(Path::to_path_buf) else {
        log::warn!("{} has no parent directory, not watching", config_path.display());
        return;
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Cannot create {}: {}", config_dir.display(), e);
        return;
    }

    // notify calls back on its own thread; hop onto the async side here.
    let (events_tx, events_rx) = async_channel::unbounded();
    let watcher = RecommendedWatcher::new(
        move |res| {
            let _ = events_tx.send_blocking(res);
        },
        notify::Config::default(),
    )
    .and_then(|mut w| {
        w.watch(&config_dir, RecursiveMode::NonRecursive)?;
        Ok(w)
    });
    let _watcher = match watcher {
        Ok(w) => w,
        Err(e) => {
            log::error!("Config watcher disabled: {}", ConfigError::from(e));
            return;
        }
    };
    log::debug!("Watching {} for changes", config_dir.display());

    while let Ok(res) = events_rx.recv().await {
        let event = match res {
            Ok(event) => event,
            Err(e) => {
                log::warn!("Watch error: {}", e);
                continue;
            }
        };
        if !touches_config(&event, &config_path) {
            continue;
        }
        if tx.send(AppEvent::ConfigReload).await.is_err() {
            break;
        }
    }
}
