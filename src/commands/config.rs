//! Configuration Commands
//!
//! Fetches the catalog document once at startup.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::{js_error, window};
use crate::config::parse_config;
use crate::error::ConfigError;
use crate::models::Catalog;

pub async fn load_catalog(path: &str) -> Result<Catalog, ConfigError> {
    let fetch_error = |reason: String| ConfigError::Fetch { path: path.to_string(), reason };

    let window = window().map_err(fetch_error)?;
    let response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| fetch_error(js_error(e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| fetch_error(js_error(e)))?;

    if !response.ok() {
        return Err(ConfigError::Status { path: path.to_string(), status: response.status() });
    }

    let body = response.text().map_err(|e| fetch_error(js_error(e)))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| fetch_error(js_error(e)))?
        .as_string()
        .ok_or_else(|| ConfigError::Parse("response body is not text".to_string()))?;

    parse_config(&text)
}
