//! Script loading and parameter-space extraction
//!
//! A script is data *and* code: its leading documentation block carries the
//! parameter-space declaration as YAML, and its `renderer:` key names the
//! rendering entry point (defaulting to the script's file stem). Parsing
//! treats the file strictly as text — the script is never executed to
//! discover its declaration.
//!
//! ## Extraction pipeline
//!
//! 1. Collect the leading documentation block: the contiguous run of
//!    comment lines (`#`, `//!`, `///`, `//`) at the top of the file,
//!    prefixes stripped. A shebang line is skipped.
//! 2. Within that block, a fenced code block (```` ```yaml ````,
//!    ```` ```yml ```` or bare ```` ``` ````) wins; otherwise the raw
//!    region starting at `parameters:` (or `renderer:`) is used.
//! 3. Parse as YAML, then validate the space.

use genart_core::{Error, ParameterSpace, ParameterSpec, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Fenced code block, optionally tagged `yaml`/`yml`.
static FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:ya?ml)?[ \t]*\n(.*?)```").expect("valid fence regex"));

/// Top-level shape of the embedded declaration.
#[derive(Debug, Deserialize)]
struct SpaceDoc {
    /// Entry-point name; defaults to the script's file stem
    renderer: Option<String>,
    parameters: Vec<ParameterSpec>,
}

/// A loaded script: identity, parameter space, and entry-point name.
///
/// Loaded once per invocation, read-only afterward. The entry point itself
/// is resolved against a [`crate::render::RoutineRegistry`] at invocation
/// time.
#[derive(Debug, Clone)]
pub struct Script {
    path: PathBuf,
    name: String,
    space: ParameterSpace,
    renderer: String,
}

impl Script {
    /// Read a script file and parse its embedded declaration.
    pub fn load(path: impl AsRef<Path>) -> Result<Script> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        Script::from_source(path, &source)
    }

    /// Parse a script from in-memory source text.
    pub fn from_source(path: impl AsRef<Path>, source: &str) -> Result<Script> {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "script".to_string());

        let doc = leading_doc_block(source).ok_or_else(|| Error::MissingSpec {
            path: path.clone(),
            reason: "no leading documentation block".to_string(),
        })?;
        let yaml = extract_config_block(&doc).ok_or_else(|| Error::MissingSpec {
            path: path.clone(),
            reason: "no structured configuration block in documentation".to_string(),
        })?;

        let parsed: SpaceDoc = serde_yaml::from_str(&yaml)
            .map_err(|e| Error::MalformedSpec(e.to_string()))?;
        let space = ParameterSpace::new(parsed.parameters)?;
        let renderer = parsed.renderer.unwrap_or_else(|| name.clone());

        Ok(Script {
            path,
            name,
            space,
            renderer,
        })
    }

    /// Script identity: the file path it was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Derived name: the file stem. Used in output filenames.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared parameter space.
    pub fn space(&self) -> &ParameterSpace {
        &self.space
    }

    /// Name of the rendering entry point.
    pub fn renderer(&self) -> &str {
        &self.renderer
    }
}

/// Collect the leading documentation block, comment prefixes stripped.
///
/// Returns `None` when the file does not start with a comment block.
/// Blank lines inside the block are kept as blank content lines; the block
/// ends at the first non-blank, non-comment line.
fn leading_doc_block(source: &str) -> Option<String> {
    let mut lines = Vec::new();
    let mut saw_comment = false;

    for (i, line) in source.lines().enumerate() {
        let trimmed = line.trim_start();
        if i == 0 && trimmed.starts_with("#!") {
            continue; // shebang
        }
        if let Some(stripped) = strip_comment_prefix(trimmed) {
            saw_comment = true;
            lines.push(stripped.to_string());
        } else if trimmed.is_empty() {
            if saw_comment {
                lines.push(String::new());
            }
            // leading blank lines before the block are skipped
        } else {
            break;
        }
    }

    if saw_comment {
        Some(lines.join("\n"))
    } else {
        None
    }
}

/// Strip one comment prefix and a single following space, if present.
fn strip_comment_prefix(line: &str) -> Option<&str> {
    // Longest prefixes first so `//!` is not eaten by `//`.
    for prefix in ["//!", "///", "//", "#"] {
        if let Some(rest) = line.strip_prefix(prefix) {
            return Some(rest.strip_prefix(' ').unwrap_or(rest));
        }
    }
    None
}

/// Extract the structured-configuration sub-block from a documentation
/// block: fenced code block first, raw `parameters:` region as fallback.
fn extract_config_block(doc: &str) -> Option<String> {
    if let Some(captures) = FENCE.captures(doc) {
        return Some(captures[1].trim().to_string());
    }
    extract_raw_region(doc)
}

/// Fallback: the region starting at the first top-level `parameters:` or
/// `renderer:` line, continuing through indented lines, list items, blank
/// lines, and the other top-level key. Anything else ends the region.
fn extract_raw_region(doc: &str) -> Option<String> {
    let mut collected: Vec<&str> = Vec::new();
    let mut in_region = false;

    for line in doc.lines() {
        let is_top_key = line.starts_with("parameters:") || line.starts_with("renderer:");
        if !in_region {
            if is_top_key {
                in_region = true;
                collected.push(line);
            }
            continue;
        }
        let continues = line.trim().is_empty()
            || line.starts_with(' ')
            || line.starts_with('\t')
            || line.starts_with('-')
            || is_top_key;
        if continues {
            collected.push(line);
        } else {
            break;
        }
    }

    if collected.is_empty() {
        None
    } else {
        Some(collected.join("\n").trim().to_string())
    }
}
