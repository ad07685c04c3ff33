//! Sandbox path helpers.

use std::path::PathBuf;

/// Plugin-private data directory, where the trace file lives.
///
/// ```
/// use charbrowser::infrastructure::data_dir;
///
/// assert_eq!(data_dir().to_str(), Some("/data"));
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from("/data")
}

/// Expands a leading `~` to `/host`, the sandbox mount of the host's home.
///
/// ```
/// use charbrowser::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// assert_eq!(expand_tilde("~other/theme.toml"), "~other/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path == "~" {
        "/host".to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("/host/{rest}")
    } else {
        path.to_string()
    }
}
