use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::GALACTIC_MARKET_COPYRIGHT;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    pub name: String,
    #[serde(alias = "github")]
    pub profile_url: String,
    // none of the built-in contributors have one, the img is rendered without a src
    #[serde(default, alias = "image", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Contributor {
    pub fn new(name: impl Into<String>, profile_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profile_url: profile_url.into(),
            avatar_url: None,
        }
    }

    pub fn with_avatar(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }
}

/// Everything the page footer shows. Contributors are rendered in the order they appear here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FooterConfig {
    #[serde(default = "default_copyright")]
    pub copyright: String,
    #[serde(default)]
    pub contributors: Vec<Contributor>,
}

fn default_copyright() -> String {
    GALACTIC_MARKET_COPYRIGHT.to_owned()
}

impl FooterConfig {
    pub fn galactic_market() -> Self {
        Self {
            copyright: default_copyright(),
            contributors: vec![
                Contributor::new("Jamie Toman", "https://github.com/Jamie897"),
                Contributor::new("Mariah Seggebruch", "https://github.com/MariahSeggebruch"),
                Contributor::new("Kaylene Kilbourn", "https://github.com/KayKilb"),
            ],
        }
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("Failed to parse footer configuration")?;
        log::debug!(
            "loaded footer configuration with {} contributors",
            config.contributors.len()
        );
        Ok(config)
    }

    pub fn missing_avatars(&self) -> impl Iterator<Item = &Contributor> {
        self.contributors
            .iter()
            .filter(|c| c.avatar_url.is_none())
    }
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self::galactic_market()
    }
}
