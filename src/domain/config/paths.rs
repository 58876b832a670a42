use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "hymns.toml";

/// `<root>/hymns.toml`
pub fn config(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Sibling that a download streams into before it is moved over `target`.
pub fn partial_download(target: &Path) -> PathBuf {
    let mut name = target.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".part");
    target.with_file_name(name)
}
