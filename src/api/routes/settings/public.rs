//! Public types for the settings API
use serde::Deserialize;

/// Partial update. Missing fields are left unchanged.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub font_scale: Option<f64>,
    pub color_scheme: Option<String>,
}
