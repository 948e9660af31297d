//! Persistence for the settings document.
//!
//! Loading degrades gracefully: a missing or damaged file yields a
//! fully-defaulted instance plus a status describing what happened, and a
//! key that fails to convert keeps its default. Saving writes every schema
//! key in descriptor order and replaces the file atomically.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value as JsonValue};

use crate::errors::SettingsError;
use crate::model::{Settings, ShrinkQuality};
use crate::schema::{self, SHRINK_FAST_KEY, SHRINK_PRECISE_KEY, ScriptKind};
use crate::value::SettingValue;

/// Status describing how settings were loaded from disk.
#[derive(Debug, Clone)]
pub enum SettingsLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading settings from disk.
#[derive(Debug, Clone)]
pub struct SettingsLoad {
    settings: Settings,
    status: SettingsLoadStatus,
}

impl SettingsLoad {
    /// Build a settings load result from explicit parts.
    pub fn new(settings: Settings, status: SettingsLoadStatus) -> Self {
        Self { settings, status }
    }

    /// Consume the value and return both payload and status.
    pub fn into_parts(self) -> (Settings, SettingsLoadStatus) {
        (self.settings, self.status)
    }
}

/// Load settings from the default path.
///
/// Never fails: every degradation is folded into the returned status so
/// the application always starts with a usable instance.
pub fn load_settings() -> SettingsLoad {
    load_settings_from_path(&default_settings_path())
}

/// Save settings to the default path.
pub fn save_settings(settings: &Settings) -> Result<(), SettingsError> {
    save_settings_to_path(&default_settings_path(), settings)
}

pub fn load_settings_from_path(path: &Path) -> SettingsLoad {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::warn!(
                "settings file {} not found, using defaults",
                path.display()
            );
            return SettingsLoad::new(
                Settings::default(),
                SettingsLoadStatus::Missing,
            );
        },
        Err(err) => {
            log::warn!("settings file {} unreadable: {err}", path.display());
            return SettingsLoad::new(
                Settings::default(),
                SettingsLoadStatus::Invalid(format!("{err}")),
            );
        },
    };

    let parsed = match serde_json::from_str::<JsonValue>(&data) {
        Ok(value) if value.is_object() => value,
        Ok(_) => {
            log::warn!(
                "settings file {} is not a JSON object, using defaults",
                path.display()
            );
            return SettingsLoad::new(
                Settings::default(),
                SettingsLoadStatus::Invalid(String::from(
                    "document root is not an object",
                )),
            );
        },
        Err(err) => {
            log::warn!("settings file {} is damaged: {err}", path.display());
            return SettingsLoad::new(
                Settings::default(),
                SettingsLoadStatus::Invalid(format!("{err}")),
            );
        },
    };

    SettingsLoad::new(settings_from_json(&parsed), SettingsLoadStatus::Loaded)
}

pub fn save_settings_to_path(
    path: &Path,
    settings: &Settings,
) -> Result<(), SettingsError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let payload = settings_to_string(settings)?;
    write_atomic(path, payload.as_bytes())?;

    Ok(())
}

/// Build an instance from a parsed document.
///
/// Defaults first, then the legacy shrink pair, then a per-key overlay.
/// A non-object document yields plain defaults.
pub fn settings_from_json(document: &JsonValue) -> Settings {
    let mut settings = Settings::default();
    let Some(object) = document.as_object() else {
        log::warn!("settings document is not an object, using defaults");
        return settings;
    };

    let precise = object.get(SHRINK_PRECISE_KEY);
    let fast = object.get(SHRINK_FAST_KEY);
    settings.slicing.shrink_quality = if resolve_shrink(precise, fast) {
        ShrinkQuality::Precise
    } else {
        ShrinkQuality::Fast
    };
    overlay_document(&mut settings, object);

    settings
}

/// Build the persisted document: every schema key in descriptor order,
/// then the legacy shrink pair, then the script slots.
pub fn settings_to_json(settings: &Settings) -> JsonValue {
    let mut document = Map::new();

    for descriptor in schema::descriptors() {
        document.insert(
            String::from(descriptor.key),
            settings.value(descriptor.id).to_json(),
        );
    }

    let precise = settings.slicing.shrink_quality == ShrinkQuality::Precise;
    document.insert(String::from(SHRINK_PRECISE_KEY), JsonValue::Bool(precise));
    document.insert(String::from(SHRINK_FAST_KEY), JsonValue::Bool(!precise));

    for kind in ScriptKind::ALL {
        document.insert(
            String::from(kind.key()),
            JsonValue::String(String::from(settings.script(kind))),
        );
    }

    JsonValue::Object(document)
}

/// Render the persisted document as a pretty JSON string.
pub fn settings_to_string(
    settings: &Settings,
) -> Result<String, SettingsError> {
    Ok(serde_json::to_string_pretty(&settings_to_json(settings))?)
}

/// Parse a JSON string into an instance, with the same per-key tolerance
/// as loading from disk. Only the parse itself can fail.
pub fn settings_from_str(data: &str) -> Result<Settings, SettingsError> {
    let parsed = serde_json::from_str::<JsonValue>(data)?;
    Ok(settings_from_json(&parsed))
}

/// Overlay a parsed document onto a defaulted instance.
///
/// Keys that are unknown or carry an unconvertible value are skipped with
/// a warning; the field keeps its default.
fn overlay_document(settings: &mut Settings, document: &Map<String, JsonValue>) {
    for (key, raw) in document {
        if key == SHRINK_PRECISE_KEY || key == SHRINK_FAST_KEY {
            continue;
        }
        if let Some(descriptor) = schema::descriptor_for_key(key) {
            match SettingValue::from_json(descriptor.kind(), raw) {
                Some(value) => settings.set_value(descriptor.id, value),
                None => {
                    log::warn!(
                        "settings key {key} holds {raw}, expected {:?}, keeping default",
                        descriptor.kind()
                    );
                },
            }
            continue;
        }

        if let Some(kind) =
            ScriptKind::ALL.iter().find(|kind| kind.key() == key)
        {
            match raw.as_str() {
                Some(text) => settings.set_script(*kind, String::from(text)),
                None => {
                    log::warn!(
                        "settings key {key} holds {raw}, expected a string, keeping default"
                    );
                },
            }
            continue;
        }

        log::warn!("ignoring unknown settings key {key}");
    }
}

/// Resolve the legacy shrink pair to a single mode.
///
/// `ShrinkLogick` wins when both keys are present; an absent or
/// non-boolean pair keeps the fast default.
fn resolve_shrink(
    precise: Option<&JsonValue>,
    fast: Option<&JsonValue>,
) -> bool {
    if let Some(flag) = precise.and_then(JsonValue::as_bool) {
        return flag;
    }
    if let Some(flag) = fast.and_then(JsonValue::as_bool) {
        return !flag;
    }
    false
}

/// Default location of the settings document.
pub fn default_settings_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("repsnapper")
            .join("settings.json");
    }

    std::env::temp_dir().join("repsnapper").join("settings.json")
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}
