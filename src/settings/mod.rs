//! User display preferences: font size scale and colour scheme.
//!
//! Preferences are held in an explicit [`Preferences`] context rather
//! than globals. Views subscribe to changes and are unsubscribed when
//! they drop their receiver.
use std::fmt;
use std::str::FromStr;

use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio_rusqlite::Connection;

use crate::core::kv::{kv_get, kv_set};

pub const FONT_SIZE_STORAGE_KEY: &str = "fontSize";
pub const COLOR_SCHEME_STORAGE_KEY: &str = "colorScheme";

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("font scale {0} is outside {min}..={max}", min = FontScale::MIN, max = FontScale::MAX)]
    FontScaleOutOfRange(f64),
    #[error("unknown color scheme: {0}")]
    UnknownColorScheme(String),
}

/// Multiplier applied to every base text size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct FontScale(f64);

impl FontScale {
    pub const MIN: f64 = 0.8;
    pub const MAX: f64 = 1.2;
    pub const STEP: f64 = 0.1;

    pub fn new(value: f64) -> Result<Self, SettingsError> {
        if value.is_finite() && (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SettingsError::FontScaleOutOfRange(value))
        }
    }

    /// Read a stored value. Unparseable text gives the default and
    /// out of range numbers are clamped.
    pub fn from_stored(value: &str) -> Self {
        match value.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Self(v.clamp(Self::MIN, Self::MAX)),
            _ => Self::default(),
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Scale a base size in points, rounded to a tenth.
    pub fn apply(&self, base: f64) -> f64 {
        (base * self.0 * 10.0).round() / 10.0
    }
}

impl Default for FontScale {
    fn default() -> Self {
        Self(1.0)
    }
}

impl TryFrom<f64> for FontScale {
    type Error = SettingsError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FontScale> for f64 {
    fn from(scale: FontScale) -> f64 {
        scale.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
    #[default]
    System,
}

impl ColorScheme {
    /// The appearance to render with given the device setting.
    pub fn resolve(&self, device: Appearance) -> Appearance {
        match self {
            ColorScheme::Light => Appearance::Light,
            ColorScheme::Dark => Appearance::Dark,
            ColorScheme::System => device,
        }
    }
}

impl FromStr for ColorScheme {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            "system" => Ok(ColorScheme::System),
            other => Err(SettingsError::UnknownColorScheme(other.to_string())),
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
            ColorScheme::System => "system",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceState {
    pub font_scale: FontScale,
    pub color_scheme: ColorScheme,
}

pub async fn load_font_scale(db: &Connection) -> FontScale {
    match kv_get(db, FONT_SIZE_STORAGE_KEY).await {
        Ok(Some(value)) => FontScale::from_stored(&value),
        Ok(None) => FontScale::default(),
        Err(e) => {
            tracing::error!("Error loading font size from storage: {}", e);
            FontScale::default()
        }
    }
}

pub async fn load_color_scheme(db: &Connection) -> ColorScheme {
    match kv_get(db, COLOR_SCHEME_STORAGE_KEY).await {
        Ok(Some(value)) => value.parse().unwrap_or_default(),
        Ok(None) => ColorScheme::default(),
        Err(e) => {
            tracing::error!("Error loading color scheme from storage: {}", e);
            ColorScheme::default()
        }
    }
}

pub async fn load_preferences(db: &Connection) -> PreferenceState {
    PreferenceState {
        font_scale: load_font_scale(db).await,
        color_scheme: load_color_scheme(db).await,
    }
}

/// Shared preference context.
#[derive(Clone)]
pub struct Preferences {
    db: Connection,
    tx: watch::Sender<PreferenceState>,
}

impl Preferences {
    pub async fn load(db: Connection) -> Self {
        let state = load_preferences(&db).await;
        let (tx, _) = watch::channel(state);
        Self { db, tx }
    }

    pub fn current(&self) -> PreferenceState {
        *self.tx.borrow()
    }

    /// Receive every later change. Drop the receiver to unsubscribe.
    pub fn subscribe(&self) -> watch::Receiver<PreferenceState> {
        self.tx.subscribe()
    }

    pub async fn set_font_scale(&self, scale: FontScale) -> Result<(), Error> {
        kv_set(&self.db, FONT_SIZE_STORAGE_KEY, &scale.value().to_string()).await?;
        self.tx.send_modify(|state| state.font_scale = scale);
        Ok(())
    }

    pub async fn set_color_scheme(&self, scheme: ColorScheme) -> Result<(), Error> {
        kv_set(&self.db, COLOR_SCHEME_STORAGE_KEY, &scheme.to_string()).await?;
        self.tx.send_modify(|state| state.color_scheme = scheme);
        Ok(())
    }

    /// Re-read storage, e.g. when the app comes back to the
    /// foreground. Subscribers are only notified when something
    /// changed.
    pub async fn reload(&self) -> PreferenceState {
        let state = load_preferences(&self.db).await;
        self.tx.send_if_modified(|current| {
            if *current == state {
                false
            } else {
                *current = state;
                true
            }
        });
        state
    }
}
