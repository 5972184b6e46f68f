//! Registered site integrations.
//!
//! Supported integrations:
//! - `tailwind`: Tailwind CSS
//!
//! Integrations are described, not executed: the tool resolves each one's
//! command line so `info` and `check` can report it.

mod tailwind;

use crate::config::SiteConfig;

/// A resolved integration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integration {
    /// Integration name as used in config.
    pub name: &'static str,
    /// Full command line of the integration's tool.
    pub command: Vec<String>,
    /// Extra options passed through to the integration.
    pub options: Vec<(&'static str, String)>,
}

impl Integration {
    /// Command line joined for display.
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }
}

/// Integrations registered in config, in a stable order.
pub fn registered(config: &SiteConfig) -> Vec<Integration> {
    let mut integrations = Vec::new();
    if config.integrations.tailwind.enable {
        integrations.push(tailwind::integration(&config.integrations.tailwind));
    }
    integrations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registers_tailwind() {
        let config = SiteConfig::default();
        let integrations = registered(&config);
        assert_eq!(integrations.len(), 1);
        assert_eq!(integrations[0].name, "tailwind");
        assert_eq!(integrations[0].command_line(), "tailwindcss");
    }

    #[test]
    fn test_disabled_tailwind_not_registered() {
        let mut config = SiteConfig::default();
        config.integrations.tailwind.enable = false;
        assert!(registered(&config).is_empty());
    }
}
