//! `[home]` section configuration: homepage hero text.

use serde::{Deserialize, Serialize};

use crate::home::{HERO, SUB_HERO};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    /// Headline shown at the top of the homepage.
    pub hero: String,
    /// Paragraph under the headline.
    pub sub_hero: String,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            hero: HERO.into(),
            sub_hero: SUB_HERO.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_placeholder_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.home.hero, HERO);
        assert_eq!(config.home.sub_hero, SUB_HERO);
    }

    #[test]
    fn test_override_hero_only() {
        let config = test_parse_config("[home]\nhero = \"Notes\"");
        assert_eq!(config.home.hero, "Notes");
        assert_eq!(config.home.sub_hero, SUB_HERO);
    }
}
