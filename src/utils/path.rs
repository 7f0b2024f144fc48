use std::path::PathBuf;

/// Environment variable that relocates the config directory
pub const CONFIG_DIR_ENV: &str = "THYNE_CONFIG_DIR";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory (`~/.config/thyne` unless `THYNE_CONFIG_DIR` is set)
pub fn get_config_dir() -> PathBuf {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => get_home_dir().join(".config").join("thyne"),
    }
}

/// Get the config file path
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory the rolling log file is written to
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| get_home_dir().join(".cache"))
        .join("thyne")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_is_inside_config_dir() {
        let path = get_config_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("config.toml"));
        assert_eq!(path.parent(), Some(get_config_dir().as_path()));
    }

    #[test]
    fn test_log_dir_ends_with_app_name() {
        assert!(get_log_dir().ends_with("thyne"));
    }
}
