use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// ライトテーマ (初回起動時の既定)
    Light,
    /// ダークテーマ
    Dark,
}

impl ThemeMode {
    /// 反対側のテーマを返す。トグルボタンはこれを設定して保存するだけ。
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: ThemeMode,
}

fn default_theme() -> ThemeMode {
    ThemeMode::Light
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

const SETTINGS_FILE: &str = "settings.toml";

pub fn load_or_create_config() -> Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    load_or_create_config_at(Path::new(SETTINGS_FILE))
}

pub fn save_config(cfg: &Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    save_config_to(cfg, Path::new(SETTINGS_FILE))
}

pub fn load_or_create_config_at(
    path: &Path,
) -> Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    if path.exists() {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let cfg = toml::from_str(&contents)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config_to(&cfg, path)?;
        Ok(cfg)
    }
}

pub fn save_config_to(
    cfg: &Config,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let toml_str = toml::to_string_pretty(cfg)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(toml_str.as_bytes())?;
    Ok(())
}
