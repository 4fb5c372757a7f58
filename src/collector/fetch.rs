use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::{ComboError, Result};

/// Nutrition grid for the Taco Bell menu, sorted by calories.
pub const DEFAULT_MENU_URL: &str =
    "https://www.nutritionix.com/taco-bell/menu/premium?ajax=inmGrid&sort=calories";

/// Fetch a page with a single blocking GET. No retries.
pub fn fetch_html(url: &str) -> Result<String> {
    info!("Fetching {}", url);

    let response = ureq::get(url).call().map_err(|e| ComboError::Http {
        url: url.to_string(),
        message: e.to_string(),
    })?;
    let body = response.into_string()?;

    debug!("Received {} bytes", body.len());
    Ok(body)
}

/// Read a previously saved copy of the page.
pub fn read_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    info!("Reading {}", path.display());
    Ok(fs::read_to_string(path)?)
}
