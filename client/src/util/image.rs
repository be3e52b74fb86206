//! Profile/product image URL normalization.
//!
//! The backend stores upload paths relative to its origin. Those are served
//! to the browser through the asset relay at `/api/uploads`, while absolute
//! remote URLs are left alone.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

pub const ASSET_RELAY_PREFIX: &str = "/api/uploads/";

const LOCAL_BACKEND_ORIGINS: [&str; 2] = ["http://localhost:3000/", "http://127.0.0.1:3000/"];

/// Browser-facing URL for a stored image path, or `None` when there is no image.
#[must_use]
pub fn image_url(path: Option<&str>) -> Option<String> {
    let path = path.map(str::trim).filter(|p| !p.is_empty())?;

    if path.starts_with(ASSET_RELAY_PREFIX) {
        return Some(path.to_owned());
    }
    if let Some(rest) = LOCAL_BACKEND_ORIGINS
        .iter()
        .find_map(|origin| path.strip_prefix(origin))
    {
        let rest = rest.split(['?', '#']).next().unwrap_or_default();
        return Some(format!("{ASSET_RELAY_PREFIX}{rest}"));
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_owned());
    }
    Some(format!("{ASSET_RELAY_PREFIX}{}", path.trim_start_matches('/')))
}
