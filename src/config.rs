use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = "geovita.conf";

// --- GUI Config ---
#[derive(Serialize, Deserialize, Clone)]
pub struct GuiConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub font_scale: Option<f32>,
    /// Path to the hero portrait image, if any.
    pub portrait: Option<String>,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            width: Some(1100),
            height: Some(780),
            font_scale: Some(1.0),
            portrait: None,
        }
    }
}

#[derive(Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub gui: GuiConfig,
}

fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("No config dir found")?;
    fs::create_dir_all(&config_dir)?;
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

pub fn load() -> Result<Config> {
    let path = config_path()?;

    if path.exists() {
        let content = fs::read_to_string(&path)?;
        let cfg: Config = toml::from_str(&content)
            .context("Failed to parse config. Format might have changed.")?;

        // Write back defaults if the gui section is missing
        let raw: toml::Value = toml::from_str(&content).unwrap_or(toml::Value::Integer(0));
        if raw.get("gui").is_none() {
            fs::write(&path, toml::to_string_pretty(&cfg)?)?;
        }
        Ok(cfg)
    } else {
        let cfg = Config::default();
        fs::write(&path, toml::to_string_pretty(&cfg)?)?;
        eprintln!("Created default config at {:?}", path);
        Ok(cfg)
    }
}

/// Save updated gui config (e.g., window size) back to the config file
pub fn save_gui(gui_config: &GuiConfig) -> Result<()> {
    let path = config_path()?;

    if path.exists() {
        let content = fs::read_to_string(&path)?;
        let mut cfg: Config = toml::from_str(&content)?;
        cfg.gui = gui_config.clone();
        fs::write(&path, toml::to_string_pretty(&cfg)?)?;
    } else {
        let cfg = Config { gui: gui_config.clone() };
        fs::write(&path, toml::to_string_pretty(&cfg)?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.gui.width, Some(1100));
        assert_eq!(cfg.gui.height, Some(780));
        assert_eq!(cfg.gui.font_scale, Some(1.0));
        assert!(cfg.gui.portrait.is_none());
    }

    #[test]
    fn test_missing_section_gets_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.gui.width, Some(1100));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut cfg = Config::default();
        cfg.gui.width = Some(1600);
        cfg.gui.portrait = Some("/tmp/me.png".to_string());

        let s = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&s).unwrap();
        assert_eq!(back.gui.width, Some(1600));
        assert_eq!(back.gui.portrait.as_deref(), Some("/tmp/me.png"));
    }
}
