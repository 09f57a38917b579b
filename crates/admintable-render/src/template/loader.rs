//! Template discovery on disk.
//!
//! [`walk_template_dir`] collects template files below a root directory and
//! names each one by its path relative to the root, with `/` separators.
//! Files ending in `.jinja` or `.j2` drop that suffix from their name, so
//! `partials/pagination_table.html.jinja` registers as
//! `partials/pagination_table.html`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RenderError;

/// Recognized template file extensions.
pub const TEMPLATE_EXTENSIONS: &[&str] = &["html", "jinja", "j2"];

/// Extensions stripped from the registered template name.
const STRIPPED_EXTENSIONS: &[&str] = &["jinja", "j2"];

/// A template file found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Name the template is registered under.
    pub name: String,
    /// Absolute or root-joined path to the file.
    pub path: PathBuf,
}

impl TemplateFile {
    /// Reads the template source from disk.
    pub fn read(&self) -> Result<String, RenderError> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

/// Recursively collects template files under `root`, sorted by name.
pub fn walk_template_dir(root: impl AsRef<Path>) -> Result<Vec<TemplateFile>, RenderError> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(RenderError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("template directory not found: {}", root.display()),
        )));
    }

    let mut files = Vec::new();
    walk(root, root, &mut files)?;
    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

fn walk(root: &Path, dir: &Path, files: &mut Vec<TemplateFile>) -> Result<(), RenderError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk(root, &path, files)?;
            continue;
        }

        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !TEMPLATE_EXTENSIONS.contains(&ext) {
            continue;
        }

        if let Some(name) = template_name(root, &path, ext) {
            files.push(TemplateFile { name, path });
        }
    }
    Ok(())
}

fn template_name(root: &Path, path: &Path, ext: &str) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut name = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    if STRIPPED_EXTENSIONS.contains(&ext) {
        name.truncate(name.len() - ext.len() - 1);
    }
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_file(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn walk_collects_nested_templates() {
        let tmp = TempDir::new().unwrap();
        create_file(tmp.path(), "partials/pagination_table.html", "pages");
        create_file(tmp.path(), "admintable/row.html.jinja", "row");
        create_file(tmp.path(), "notes.txt", "ignored");

        let files = walk_template_dir(tmp.path()).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();

        assert_eq!(
            names,
            vec!["admintable/row.html", "partials/pagination_table.html"]
        );
        assert_eq!(files[1].read().unwrap(), "pages");
    }

    #[test]
    fn walk_strips_j2_suffix() {
        let tmp = TempDir::new().unwrap();
        create_file(tmp.path(), "custom.j2", "x");

        let files = walk_template_dir(tmp.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "custom");
    }

    #[test]
    fn walk_missing_dir_is_error() {
        let result = walk_template_dir("/definitely/not/a/template/dir");
        assert!(matches!(result, Err(RenderError::Io(_))));
    }
}
