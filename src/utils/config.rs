use dotenv::dotenv;
use rustyline::EditMode;
use std::env;
use std::path::PathBuf;

pub struct Config {
    pub name: String,
    pub config_dir: PathBuf,
    pub theme: String,
    pub editor_mode: String,
    pub logger_level: String,
    pub logger_dir: PathBuf,
    pub log_to_stderr: bool,
}

impl Config {
    fn get_config_dir() -> PathBuf {
        match env::var("HOME") {
            Ok(home) if !home.is_empty() => PathBuf::from(home).join(".config/techsh"),
            _ => env::temp_dir().join("techsh"),
        }
    }

    fn default() -> Self {
        let config_dir = Self::get_config_dir();
        Config {
            name: String::from(env!("CARGO_PKG_NAME")),
            logger_dir: config_dir.join("logs"),
            config_dir,
            theme: String::from("plain"),
            editor_mode: String::from("emacs"),
            logger_level: String::from("info"),
            log_to_stderr: false,
        }
    }

    pub fn new() -> Self {
        // 优先加载 .env 文件
        if cfg!(debug_assertions) {
            dotenv::from_filename(".env.development").ok();
        } else {
            dotenv().ok();
        }

        let mut config = Config::default();
        config.apply_env(|key| env::var(key).ok());
        config
    }

    // 从环境变量覆盖默认配置
    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(theme) = lookup("TECHSH_THEME") {
            self.theme = theme;
        }

        if let Some(editor) = lookup("TECHSH_EDITOR") {
            self.editor_mode = editor;
        }

        if let Some(level) = lookup("TECHSH_LOG_LEVEL") {
            self.logger_level = level;
        }

        if let Some(dir) = lookup("TECHSH_LOG_DIR") {
            self.logger_dir = PathBuf::from(dir);
        }

        if let Some(flag) = lookup("TECHSH_LOG_STDERR") {
            self.log_to_stderr = parse_flag(&flag);
        }
    }

    pub fn get_edit_mode(&self) -> EditMode {
        match self.editor_mode.to_lowercase().as_str() {
            "vi" => EditMode::Vi,
            _ => EditMode::Emacs,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut config = Config::default();
        config.apply_env(|key| vars.get(key).cloned());
        config
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.name, "techsh");
        assert_eq!(config.theme, "plain");
        assert_eq!(config.logger_level, "info");
        assert!(!config.log_to_stderr);
        assert!(config.logger_dir.ends_with("logs"));
        assert_eq!(config.get_edit_mode(), EditMode::Emacs);
    }

    #[test]
    fn test_env_overrides() {
        let config = config_from(&[
            ("TECHSH_THEME", "color"),
            ("TECHSH_EDITOR", "VI"),
            ("TECHSH_LOG_LEVEL", "debug"),
            ("TECHSH_LOG_DIR", "/var/tmp/techsh"),
            ("TECHSH_LOG_STDERR", "yes"),
        ]);
        assert_eq!(config.theme, "color");
        assert_eq!(config.get_edit_mode(), EditMode::Vi);
        assert_eq!(config.logger_level, "debug");
        assert_eq!(config.logger_dir, PathBuf::from("/var/tmp/techsh"));
        assert!(config.log_to_stderr);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" TRUE "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("nope"));
    }
}
