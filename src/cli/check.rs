//! Check command: validate config and run the frontmatter pass.
//!
//! Config validation already ran while loading; this reports what the
//! pass would hand to the templates and fails if any document is unreadable.

use anyhow::{Result, bail};

use crate::config::SiteConfig;
use crate::content::{collect_content_files, process_files};
use crate::integration;
use crate::{debug, debug_do, log};
use crate::page::FrontmatterError;
use crate::pipeline::TransformPipeline;
use crate::utils::plural_count;

pub fn check_site(config: &SiteConfig) -> Result<()> {
    log!("check"; "config {}", config.config_path.display());

    for integration in integration::registered(config) {
        log!("check"; "integration {}: {}", integration.name, integration.command_line());
    }

    let pipeline = TransformPipeline::from_config(&config.markdown);
    if pipeline.is_empty() {
        log!("warning"; "no transforms registered, documents pass through unchanged");
    } else {
        log!("check"; "transforms: [{}]", pipeline.names().join(", "));
    }

    let files = collect_content_files(&[], &config.build.content)?;
    let pass = process_files(&files, &pipeline);

    log!(
        "check";
        "{} processed, {} received the default layout",
        plural_count(pass.documents.len(), "document"),
        pass.defaulted_count()
    );

    debug_do! {
        for processed in &pass.documents {
            debug!("layout"; "{} ({}) -> {}",
                config.root_relative(&processed.doc.path).display(),
                processed.doc.title().unwrap_or("untitled"),
                processed.doc.layout().unwrap_or("-"));
        }
    }

    for failure in &pass.failures {
        log!("error"; "{}", error_chain(failure));
    }

    if !pass.failures.is_empty() {
        bail!("{} could not be read", plural_count(pass.failures.len(), "document"));
    }

    Ok(())
}

/// Render a failure with its source chain on one line.
fn error_chain(failure: &FrontmatterError) -> String {
    use std::error::Error;

    let mut message = failure.to_string();
    let mut source = failure.source();
    while let Some(err) = source {
        message.push_str(": ");
        message.push_str(&err.to_string());
        source = err.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};
    use std::path::PathBuf;

    #[test]
    fn test_error_chain_includes_source() {
        let failure = FrontmatterError::Io(
            PathBuf::from("posts/a.md"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(error_chain(&failure), "IO error when reading `posts/a.md`: denied");
    }

    #[test]
    fn test_check_site_reports_unreadable_documents() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ok.md"), "---\ntitle: Ok\n---\n").unwrap();
        std::fs::write(dir.path().join("bad.md"), "+++\ntitle = \n+++\n").unwrap();

        let mut config = SiteConfig::default();
        config.build.content = dir.path().to_path_buf();
        assert!(check_site(&config).is_err());

        std::fs::remove_file(dir.path().join("bad.md")).unwrap();
        assert!(check_site(&config).is_ok());
    }
}
