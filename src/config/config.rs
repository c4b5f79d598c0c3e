use anyhow::Result;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Title shown on the input field's border
    pub title: String,

    /// Text shown in the panel when no candidate matches the query
    pub placeholder: String,

    /// Marker prefixed to the highlighted row
    pub indicator: String,

    /// Maximum number of candidate rows the panel may occupy
    pub max_panel_rows: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Foreground color for the highlighted row: "white", "yellow", "cyan", ...
    pub highlight_foreground: String,

    /// Whether to change the highlighted row's background
    pub use_background: bool,

    /// Background color if use_background is true
    pub highlight_background: String,

    /// Whether to bold the highlighted row
    pub bold: bool,

    /// Border color for the input and the panel
    pub border_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Select Name".to_string(),
            placeholder: "No results".to_string(),
            indicator: "►".to_string(),
            max_panel_rows: 8,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            highlight_foreground: "white".to_string(),
            use_background: true,
            highlight_background: "darkgray".to_string(),
            bold: true,
            border_color: "white".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Style applied to the highlighted panel row
    pub fn highlight_style(&self) -> Style {
        let mut style = Style::default().fg(parse_color(&self.highlight_foreground));
        if self.use_background {
            style = style.bg(parse_color(&self.highlight_background));
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    /// Style for the input and panel borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(parse_color(&self.border_color))
    }
}

/// Map a color name from the config file to a terminal color.
/// Unknown names fall back to the terminal default.
pub fn parse_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

impl Config {
    /// Load config from the default location, creating the default file on
    /// first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save config to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("combo-select").join("config.toml"))
    }
}
