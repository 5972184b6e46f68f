//! Info command: print the resolved site settings.

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};

use crate::config::SiteConfig;
use crate::integration;
use crate::pipeline::TransformPipeline;

pub fn show_info(config: &SiteConfig) -> Result<()> {
    print!("{}", render_info(config));
    Ok(())
}

fn render_info(config: &SiteConfig) -> String {
    let site = &config.site;
    let mut out = String::new();

    let mut line = |label: &str, value: &str| {
        let label = label.if_supports_color(Stream::Stdout, |l| l.bold());
        out.push_str(&format!("{label:<14} {value}\n"));
    };

    line("title", &site.title);
    line("description", &site.description);
    line("author", &site.author);
    line("url", site.url.as_deref().unwrap_or("-"));
    line("base", &site.resolved_base());
    line("content", &config.root_relative(&config.build.content).display().to_string());

    let pipeline = TransformPipeline::from_config(&config.markdown);
    line("transforms", &pipeline.names().join(", "));
    line("layout", &config.markdown.default_layout);

    for integration in integration::registered(config) {
        let options = integration
            .options
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(" ");
        line(
            "integration",
            &format!("{} ({}) {}", integration.name, integration.command_line(), options),
        );
    }

    line("hero", &config.home.hero);
    line("sub_hero", &config.home.sub_hero);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_info_defaults() {
        owo_colors::set_override(false);
        let mut config = SiteConfig::default();
        config.site.url = Some("https://example.github.io/blog".into());

        let text = render_info(&config);
        assert!(text.contains("base           /blog/"));
        assert!(text.contains("transforms     layout"));
        assert!(text.contains("integration    tailwind (tailwindcss) apply_base_styles=true"));
        assert!(text.contains(crate::home::HERO));
    }
}
