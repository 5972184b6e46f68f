//! Tailwind CSS integration.
//!
//! Tailwind CLI arguments: `command [-c config]`

use super::Integration;
use crate::config::section::TailwindConfig;

/// Build the Tailwind integration from its config section.
pub fn integration(tailwind: &TailwindConfig) -> Integration {
    let mut command = tailwind.command.clone();
    if let Some(config) = &tailwind.config {
        command.extend(["-c".into(), config.display().to_string()]);
    }

    Integration {
        name: "tailwind",
        command,
        options: vec![(
            "apply_base_styles",
            tailwind.apply_base_styles.to_string(),
        )],
    }
}
