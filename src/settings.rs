pub use crate::settings_types::*;
use crate::storage_dir;
use anyhow::Context;
use bevy::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

const SETTINGS_FILE: &str = "settings.toml";

impl Settings {
    pub fn path() -> PathBuf {
        storage_dir().join(SETTINGS_FILE)
    }

    pub fn load() -> Self {
        Self::load_or_default(&Self::path())
    }

    /// Reads `path`, creating it with defaults when absent. Unreadable or
    /// malformed files are logged and replaced by defaults in memory only.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("Creating default settings at {:?}", path);
            let settings = Settings::default();
            settings.save_or_log(path);
            return settings;
        }

        match Self::load_from(path) {
            Ok(settings) => {
                info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                error!("Failed to load settings: {:#}", e);
                Settings::default()
            }
        }
    }

    pub fn save(&self) {
        self.save_or_log(&Self::path());
    }

    fn save_or_log(&self, path: &Path) {
        match self.save_to(path) {
            Ok(()) => info!("Saved settings to {:?}", path),
            Err(e) => error!("Failed to save settings: {:#}", e),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self).context("serializing settings")?;
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))
    }
}

/// Where [`SettingsPlugin`] reads and writes settings. Defaults to [`Settings::path`].
#[derive(Resource, Debug, Clone)]
pub struct SettingsFile(pub PathBuf);

pub struct SettingsPlugin;

#[derive(Resource)]
struct SettingsSaveTimer(Timer);

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<SettingsFile>() {
            app.insert_resource(SettingsFile(Settings::path()));
        }
        if !app.world().contains_resource::<Settings>() {
            let settings = Settings::load_or_default(&app.world().resource::<SettingsFile>().0);
            app.insert_resource(settings);
        }

        // starts finished so nothing is written until settings change
        let mut timer = Timer::from_seconds(1.0, TimerMode::Once);
        timer.tick(timer.duration());
        app.insert_resource(SettingsSaveTimer(timer));
        app.add_systems(Update, save_settings_on_change);
    }
}

fn save_settings_on_change(
    settings: Res<Settings>,
    file: Res<SettingsFile>,
    mut timer: ResMut<SettingsSaveTimer>,
    time: Res<Time>,
) {
    if settings.is_changed() && !settings.is_added() {
        timer.0.reset();
    }

    timer.0.tick(time.delta());

    if timer.0.just_finished() {
        settings.save_or_log(&file.0);
    }
}
