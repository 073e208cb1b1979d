use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Card content and palette. Every field has a default reproducing the
/// stock card, so the binary runs with no config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub header: HeaderConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
    #[serde(default = "default_links")]
    pub links: Vec<LinkConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_greeting")]
    pub greeting: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_intro")]
    pub intro: String,
    #[serde(default = "default_farewell")]
    pub farewell: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Exactly four labels, one per quadrant: top-left, top-right,
    /// bottom-left, bottom-right. Arity is checked where the header is
    /// built, not here.
    #[serde(default = "default_pillars")]
    pub pillars: Vec<String>,
    /// One `#RRGGBB` color per pillar.
    #[serde(default = "default_pillar_colors")]
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteConfig {
    #[serde(default = "default_gradient_start")]
    pub gradient_start: String,
    #[serde(default = "default_gradient_end")]
    pub gradient_end: String,
    #[serde(default = "default_gradient_start")]
    pub accent: String,
    #[serde(default = "default_gradient_end")]
    pub secondary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    pub icon: String,
    pub label: String,
    pub hint: String,
    pub url: String,
    pub color: String,
}

fn default_greeting() -> String {
    "Howdy 🖖🏻, this is".to_string()
}

fn default_name() -> String {
    "Nagasai Vegur".to_string()
}

fn default_role() -> String {
    "AI & ML Engineer".to_string()
}

fn default_intro() -> String {
    "experimenting intelligent systems that merge analytical rigor with \
     creative design. An innovative individual with zeal for learning \
     something new who enjoys trying out new technologies while listening \
     to 13 exclamations!"
        .to_string()
}

fn default_farewell() -> String {
    "Nope. Bye.".to_string()
}

fn default_title() -> String {
    "AI Engineer".to_string()
}

fn default_pillars() -> Vec<String> {
    vec![
        "Deep Learning".to_string(),
        "Computer Vision".to_string(),
        "LLM Systems".to_string(),
        "Probabilistic Modeling".to_string(),
    ]
}

fn default_pillar_colors() -> Vec<String> {
    vec![
        "#EF4444".to_string(),
        "#58d77e".to_string(),
        "#cc9494".to_string(),
        "#fbbf24".to_string(),
    ]
}

fn default_gradient_start() -> String {
    "#EF4444".to_string()
}

fn default_gradient_end() -> String {
    "#cc9494".to_string()
}

fn default_links() -> Vec<LinkConfig> {
    vec![
        LinkConfig {
            icon: "💻".to_string(),
            label: "What am I cooking?".to_string(),
            hint: "GitHub".to_string(),
            url: "https://github.com/NSVEGUR".to_string(),
            color: "#58d77e".to_string(),
        },
        LinkConfig {
            icon: "🐦".to_string(),
            label: "More Me?".to_string(),
            hint: "Portfolio Site".to_string(),
            url: "https://nsvegur.me/".to_string(),
            color: "#cc9494".to_string(),
        },
    ]
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            name: default_name(),
            role: default_role(),
            intro: default_intro(),
            farewell: default_farewell(),
        }
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            pillars: default_pillars(),
            colors: default_pillar_colors(),
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            gradient_start: default_gradient_start(),
            gradient_end: default_gradient_end(),
            accent: default_gradient_start(),
            secondary: default_gradient_end(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: ProfileConfig::default(),
            header: HeaderConfig::default(),
            palette: PaletteConfig::default(),
            links: default_links(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading config");
            let content =
                std::fs::read_to_string(&path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vegur")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_stock_card() {
        let config = Config::default();
        assert_eq!(config.profile.name, "Nagasai Vegur");
        assert_eq!(config.header.pillars.len(), 4);
        assert_eq!(config.header.colors.len(), 4);
        assert_eq!(config.links.len(), 2);
        assert!(config.links[0].url.contains("github.com"));
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.profile.role, "AI & ML Engineer");
        assert_eq!(config.header.title, "AI Engineer");
        assert_eq!(config.palette.gradient_start, "#EF4444");
    }

    #[test]
    fn partial_toml_overlays_defaults() {
        let config: Config = toml::from_str(
            r#"
            [profile]
            name = "Ada Lovelace"

            [header]
            title = "Analyst"
            "#,
        )
        .unwrap();
        assert_eq!(config.profile.name, "Ada Lovelace");
        assert_eq!(config.header.title, "Analyst");
        // Untouched sections keep their defaults.
        assert_eq!(config.profile.greeting, "Howdy 🖖🏻, this is");
        assert_eq!(config.header.pillars.len(), 4);
    }

    #[test]
    fn round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.profile.name, config.profile.name);
        assert_eq!(parsed.header.pillars, config.header.pillars);
        assert_eq!(parsed.links.len(), config.links.len());
    }
}
