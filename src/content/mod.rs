//! Content discovery and the per-document frontmatter pass.
//!
//! ```text
//! content dir ──jwalk──> markdown files ──rayon──> Document::load ──> TransformPipeline::run
//! ```
//!
//! Each document owns its frontmatter, so documents are processed in
//! parallel without any shared mutable state.

mod kind;

pub use kind::ContentKind;

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use jwalk::WalkDir;
use rayon::prelude::*;

use crate::debug;
use crate::page::{Document, FrontmatterError, truthy_field};
use crate::pipeline::{LAYOUT_KEY, TransformPipeline};
use crate::utils::path::resolve_path;

/// Files never treated as content.
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// A document after the transform pipeline ran.
#[derive(Debug, Clone)]
pub struct ProcessedDocument {
    pub doc: Document,
    /// `layout` was unset or falsy before the pass and is set now.
    pub layout_defaulted: bool,
}

/// Outcome of running the pipeline over a set of files.
#[derive(Debug, Default)]
pub struct ContentPass {
    /// Successfully processed documents, in path order.
    pub documents: Vec<ProcessedDocument>,
    /// Documents that could not be read or parsed.
    pub failures: Vec<FrontmatterError>,
}

impl ContentPass {
    /// Number of documents that received the default layout.
    pub fn defaulted_count(&self) -> usize {
        self.documents.iter().filter(|d| d.layout_defaulted).count()
    }
}

/// Collect all files from a directory recursively, sorted by path.
pub fn collect_all_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.path())
        .collect();
    files.sort();
    files
}

/// Resolve the content files named on the command line.
///
/// No paths means every content file under `content_dir`. Directories are
/// walked; plain files must have a content extension.
pub fn collect_content_files(paths: &[PathBuf], content_dir: &Path) -> Result<Vec<PathBuf>> {
    if paths.is_empty() {
        return Ok(filter_content_files(collect_all_files(content_dir)));
    }

    let mut all_files = Vec::new();
    for path in paths {
        let resolved = resolve_path(path, content_dir);

        if resolved.is_file() {
            if !ContentKind::is_content_file(&resolved) {
                bail!("Not a supported content file: {}", path.display());
            }
            all_files.push(resolved);
        } else if resolved.is_dir() {
            all_files.extend(filter_content_files(collect_all_files(&resolved)));
        } else {
            bail!(
                "Path not found: {}\n  Tried:\n    - {}\n    - {}",
                path.display(),
                path.display(),
                content_dir.join(path).display()
            );
        }
    }

    all_files.sort();
    all_files.dedup();
    Ok(all_files)
}

fn filter_content_files(files: Vec<PathBuf>) -> Vec<PathBuf> {
    files
        .into_iter()
        .filter(|p| ContentKind::is_content_file(p))
        .collect()
}

/// Run `pipeline` over one parsed document.
pub fn process_document(mut doc: Document, pipeline: &TransformPipeline) -> ProcessedDocument {
    let had_layout = truthy_field(&doc.frontmatter, LAYOUT_KEY).is_some();
    pipeline.run(&mut doc);
    let layout_defaulted = !had_layout && truthy_field(&doc.frontmatter, LAYOUT_KEY).is_some();

    if layout_defaulted {
        debug!("layout"; "defaulted {}", doc.path.display());
    }

    ProcessedDocument {
        doc,
        layout_defaulted,
    }
}

/// Load every file and run `pipeline` over each document.
pub fn process_files(files: &[PathBuf], pipeline: &TransformPipeline) -> ContentPass {
    let results: Vec<_> = files
        .par_iter()
        .map(|path| Document::load(path).map(|doc| process_document(doc, pipeline)))
        .collect();

    let mut pass = ContentPass::default();
    for result in results {
        match result {
            Ok(processed) => pass.documents.push(processed),
            Err(err) => pass.failures.push(err),
        }
    }
    pass
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{DEFAULT_LAYOUT, LayoutDefault};
    use std::fs;

    fn site_with_posts() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let posts = dir.path().join("posts");
        fs::create_dir_all(posts.join("2024")).unwrap();
        fs::write(posts.join("plain.md"), "# No frontmatter\n").unwrap();
        fs::write(
            posts.join("custom.md"),
            "---\ntitle: Custom\nlayout: ../../layouts/CustomLayout.astro\n---\nBody\n",
        )
        .unwrap();
        fs::write(posts.join("2024/empty.mdx"), "---\nlayout: \"\"\n---\n").unwrap();
        fs::write(
            posts.join("2024/nested.md"),
            "---\ntitle: Nested\nseo:\n  layout: og-card\ntags:\n  - rust\n---\n",
        )
        .unwrap();
        fs::write(posts.join("notes.txt"), "not content").unwrap();
        fs::write(posts.join(".DS_Store"), "").unwrap();
        dir
    }

    #[test]
    fn test_collect_all_content() {
        let dir = site_with_posts();
        let content = dir.path().join("posts");
        let files = collect_content_files(&[], &content).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(&content).unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["2024/empty.mdx", "2024/nested.md", "custom.md", "plain.md"]);
    }

    #[test]
    fn test_collect_rejects_non_content_file() {
        let dir = site_with_posts();
        let content = dir.path().join("posts");
        let err = collect_content_files(&[content.join("notes.txt")], &content).unwrap_err();
        assert!(err.to_string().contains("Not a supported content file"));
    }

    #[test]
    fn test_collect_missing_path() {
        let dir = site_with_posts();
        let content = dir.path().join("posts");
        let result = collect_content_files(&[PathBuf::from("nope.md")], &content);
        assert!(result.is_err());
    }

    #[test]
    fn test_process_files_defaults_layout() {
        let dir = site_with_posts();
        let content = dir.path().join("posts");
        let files = collect_content_files(&[], &content).unwrap();
        let pass = process_files(&files, &TransformPipeline::new().pipe(LayoutDefault::default()));

        assert!(pass.failures.is_empty());
        assert_eq!(pass.documents.len(), 4);
        assert_eq!(pass.defaulted_count(), 3);

        for processed in &pass.documents {
            let layout = processed.doc.layout().unwrap();
            if processed.doc.title() == Some("Custom") {
                assert_eq!(layout, "../../layouts/CustomLayout.astro");
                assert!(!processed.layout_defaulted);
            } else {
                assert_eq!(layout, DEFAULT_LAYOUT);
                assert!(processed.layout_defaulted);
            }
        }
    }

    #[test]
    fn test_process_files_collects_failures() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.md");
        let bad = dir.path().join("bad.md");
        fs::write(&good, "---\ntitle: Good\n---\n").unwrap();
        fs::write(&bad, "+++\ntitle = \n+++\n").unwrap();

        let pass = process_files(&[bad.clone(), good], &TransformPipeline::new());
        assert_eq!(pass.documents.len(), 1);
        assert_eq!(pass.failures.len(), 1);
        assert!(matches!(&pass.failures[0], FrontmatterError::Toml(p, _) if *p == bad));
    }
}
