//! Resolves formatter inputs to files. Literal paths are taken as given
//! (directories are walked); anything with glob syntax is matched against a
//! walk of the base directory.

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub base_path: PathBuf,
    pub respect_gitignore: bool,
    pub include_node_modules: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            respect_gitignore: true,
            include_node_modules: false,
        }
    }
}

pub fn resolve_inputs(inputs: &[String], ignore: &[String]) -> Result<Vec<PathBuf>, ScanError> {
    resolve_inputs_with_options(inputs, ignore, &ScanOptions::default())
}

/// Files named by `inputs`, sorted and without duplicates. Paths matching
/// an `ignore` glob are dropped.
pub fn resolve_inputs_with_options(
    inputs: &[String],
    ignore: &[String],
    options: &ScanOptions,
) -> Result<Vec<PathBuf>, ScanError> {
    if inputs.is_empty() {
        return Err(ScanError {
            message: "at least one path or glob pattern is required".to_string(),
        });
    }

    let ignore_set = build_globset(ignore)?;
    let (patterns, literals): (Vec<&String>, Vec<&String>) =
        inputs.iter().partition(|input| is_glob(input));
    let mut files = BTreeSet::new();

    for literal in literals {
        let path = options.base_path.join(literal);
        if path.is_dir() {
            for file in walk(&path, options) {
                if !is_ignored(&ignore_set, &file, &options.base_path) {
                    files.insert(file);
                }
            }
        } else if path.is_file() {
            if !is_ignored(&ignore_set, &path, &options.base_path) {
                files.insert(path);
            }
        } else {
            return Err(ScanError {
                message: format!("path not found: {}", path.display()),
            });
        }
    }

    if !patterns.is_empty() {
        let globset = build_globset(&patterns)?;
        for file in walk(&options.base_path, options) {
            let relative = file.strip_prefix(&options.base_path).unwrap_or(&file);
            if !globset.is_match(relative) && !globset.is_match(&file) {
                continue;
            }
            if is_ignored(&ignore_set, &file, &options.base_path) {
                continue;
            }
            files.insert(file);
        }
    }

    tracing::debug!(count = files.len(), "resolved input files");
    Ok(files.into_iter().collect())
}

fn walk(root: &Path, options: &ScanOptions) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(false)
        .git_ignore(options.respect_gitignore)
        .git_global(options.respect_gitignore)
        .git_exclude(options.respect_gitignore);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
            continue;
        }
        if should_skip_file(entry.path(), options) {
            continue;
        }
        files.push(entry.path().to_path_buf());
    }
    files
}

fn is_ignored(ignore_set: &GlobSet, path: &Path, base: &Path) -> bool {
    let relative = path.strip_prefix(base).unwrap_or(path);
    ignore_set.is_match(relative) || ignore_set.is_match(path)
}

fn is_glob(input: &str) -> bool {
    input.contains(['*', '?', '[', '{'])
}

fn should_skip_file(path: &Path, options: &ScanOptions) -> bool {
    if !options.include_node_modules
        && path
            .components()
            .any(|component| component.as_os_str() == "node_modules")
    {
        return true;
    }

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("");
    if is_common_lock_file(file_name) {
        return true;
    }

    path.extension()
        .and_then(|value| value.to_str())
        .map(|value| is_binary_extension(&value.to_ascii_lowercase()))
        .unwrap_or(false)
}

fn is_binary_extension(ext: &str) -> bool {
    matches!(
        ext,
        "png"
            | "jpg"
            | "jpeg"
            | "gif"
            | "webp"
            | "ico"
            | "avif"
            | "mp4"
            | "webm"
            | "mp3"
            | "zip"
            | "gz"
            | "pdf"
            | "woff"
            | "woff2"
            | "ttf"
            | "otf"
    )
}

fn is_common_lock_file(file_name: &str) -> bool {
    matches!(
        file_name,
        "package-lock.json" | "pnpm-lock.yaml" | "yarn.lock" | "bun.lock" | "Cargo.lock"
    )
}

fn build_globset<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet, ScanError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let glob = Glob::new(pattern).map_err(|err| ScanError {
            message: format!("invalid glob pattern '{}': {}", pattern, err),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|err| ScanError {
        message: format!("failed to build glob set: {}", err),
    })
}

#[cfg(test)]
mod tests {
    use super::{ScanOptions, resolve_inputs_with_options};
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn resolves_literal_paths_and_globs() {
        let base = temp_dir("scanner_inputs");
        let _ = fs::create_dir_all(base.join("pages/nested"));
        let _ = fs::write(base.join("index.html"), "<div></div>");
        let _ = fs::write(base.join("pages/about.html"), "<div></div>");
        let _ = fs::write(base.join("pages/nested/deep.html"), "<div></div>");
        let _ = fs::write(base.join("pages/notes.txt"), "notes");

        let options = ScanOptions {
            base_path: base.clone(),
            ..ScanOptions::default()
        };
        let files = resolve_inputs_with_options(
            &["index.html".to_string(), "pages/**/*.html".to_string()],
            &[],
            &options,
        )
        .expect("inputs should resolve");

        assert_eq!(
            files,
            vec![
                base.join("index.html"),
                base.join("pages/about.html"),
                base.join("pages/nested/deep.html"),
            ]
        );
        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn walks_directories_and_applies_ignore_globs() {
        let base = temp_dir("scanner_ignore");
        let _ = fs::create_dir_all(base.join("site/drafts"));
        let _ = fs::create_dir_all(base.join("site/node_modules/pkg"));
        let _ = fs::write(base.join("site/a.html"), "a");
        let _ = fs::write(base.join("site/drafts/b.html"), "b");
        let _ = fs::write(base.join("site/logo.png"), "png");
        let _ = fs::write(base.join("site/node_modules/pkg/c.html"), "c");

        let options = ScanOptions {
            base_path: base.clone(),
            ..ScanOptions::default()
        };
        let files = resolve_inputs_with_options(
            &["site".to_string()],
            &["site/drafts/**".to_string()],
            &options,
        )
        .expect("directory should resolve");

        assert_eq!(files, vec![base.join("site/a.html")]);
        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn reports_missing_paths_and_bad_globs() {
        let base = temp_dir("scanner_errors");
        let _ = fs::create_dir_all(&base);
        let options = ScanOptions {
            base_path: base.clone(),
            ..ScanOptions::default()
        };

        let err = resolve_inputs_with_options(&["missing.html".to_string()], &[], &options)
            .expect_err("missing path should fail");
        assert!(err.message.starts_with("path not found"));

        let err = resolve_inputs_with_options(&["src/[".to_string()], &[], &options)
            .expect_err("bad glob should fail");
        assert!(err.message.starts_with("invalid glob pattern"));

        let err = resolve_inputs_with_options(&[], &[], &options).expect_err("no inputs");
        assert!(err.message.contains("at least one"));
        let _ = fs::remove_dir_all(&base);
    }

    fn temp_dir(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!("{}_{}", prefix, nanos))
    }
}
