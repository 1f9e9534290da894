use crate::gui::slider::{AngleRange, HexColor};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const ENV_PREFIX: &str = "CIRCULAR_SLIDER";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContainerStyle {
    pub margin: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SliderConfig {
    pub segments: NonZeroUsize,
    pub stroke_width: f64,
    pub radius: f64,
    pub gradient_color_from: HexColor,
    pub gradient_color_to: HexColor,
    pub show_clock_face: bool,
    pub clock_face_color: HexColor,
    pub bg_circle_color: HexColor,
    pub start_icon: Option<PathBuf>,
    pub stop_icon: Option<PathBuf>,
    pub container_style: ContainerStyle,
    pub text: String,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            segments: NonZeroUsize::new(5).unwrap_or(NonZeroUsize::MIN),
            stroke_width: 40.0,
            radius: 145.0,
            gradient_color_from: HexColor::rgb(0xff, 0x98, 0x00),
            gradient_color_to: HexColor::rgb(0xff, 0xcf, 0x00),
            show_clock_face: false,
            clock_face_color: HexColor::rgb(0x9d, 0x9d, 0x9d),
            bg_circle_color: HexColor::rgb(0x17, 0x17, 0x17),
            start_icon: None,
            stop_icon: None,
            container_style: ContainerStyle::default(),
            text: String::new(),
        }
    }
}

impl SliderConfig {
    /// Side length of the square the widget requests from its parent.
    pub fn container_width(&self) -> f64 {
        self.stroke_width + self.radius * 2.0 + crate::gui::slider::CONTAINER_PADDING
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub slider: SliderConfig,
    pub initial: AngleRange,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slider: SliderConfig::default(),
            initial: AngleRange::new(PI * 10.0 / 6.0, PI * 7.0 / 6.0),
        }
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

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("dev", "circular-slider", "circular-slider")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Loads the config, falling back to the defaults when it is missing or broken.
pub fn load_or_default(path: &Path) -> Config {
    match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config from {}: {}", path.display(), e);
            Config::default()
        }
    }
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

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(config_path: PathBuf, tx: Sender<AppEvent>) {
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", ConfigError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}
