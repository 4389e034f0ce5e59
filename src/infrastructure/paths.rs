//! Sandbox path helpers.
//!
//! User-facing paths are written with `~`. The sandbox sees the same files under
//! `/host`, so paths are expanded on the way in and folded back for display.

use std::path::PathBuf;

/// Sandbox root that stands in for the user's home directory.
const HOST_ROOT: &str = "/host";

/// Directory holding the default catalog and the trace file.
///
/// # Examples
///
/// ```
/// use spellbook::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/spellbook"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij/spellbook")
}

/// Catalog location used when `catalog_path` is not configured.
#[must_use]
pub fn default_catalog_path() -> String {
    get_data_dir().join("spells.json").display().to_string()
}

/// Maps `~` and `~/…` onto the sandbox home.
///
/// # Examples
///
/// ```
/// use spellbook::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/spells.json"), "/host/spells.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/srv/spells.json"), "/srv/spells.json");
/// assert_eq!(expand_tilde("~bob/spells.json"), "~bob/spells.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}

/// Inverse of [`expand_tilde`], for status text.
///
/// # Examples
///
/// ```
/// use spellbook::infrastructure::display_path;
///
/// assert_eq!(display_path("/host/.local/share/spells.json"), "~/.local/share/spells.json");
/// assert_eq!(display_path("/hostile/x"), "/hostile/x");
/// ```
#[must_use]
pub fn display_path(path: &str) -> String {
    match path.strip_prefix(HOST_ROOT) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_lives_in_data_dir() {
        assert_eq!(
            default_catalog_path(),
            "/host/.local/share/zellij/spellbook/spells.json"
        );
    }

    #[test]
    fn expand_and_display_are_inverse() {
        for path in ["~", "~/a/b.json", "/etc/spells.json"] {
            assert_eq!(display_path(&expand_tilde(path)), path);
        }
    }
}
