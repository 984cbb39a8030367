// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Path resolution for recursive-delete targets and protected paths.
//!
//! Resolution is purely lexical: `~` expands against the configured home
//! directory, relative paths join onto the working directory, and `.`/`..`
//! fold without touching the filesystem.

use std::path::{Component, Path, PathBuf};

/// Root-level system directories whose exact-match recursive deletion is catastrophic.
pub const CRITICAL_DIRECTORIES: &[&str] = &[
    "/bin",
    "/boot",
    "/dev",
    "/etc",
    "/home",
    "/lib",
    "/lib64",
    "/opt",
    "/proc",
    "/root",
    "/run",
    "/sbin",
    "/srv",
    "/sys",
    "/tmp",
    "/usr",
    "/var",
    // macOS
    "/Applications",
    "/Library",
    "/System",
    "/Users",
    "/Volumes",
];

/// Expand a leading `~` against `home`.
pub fn expand_home(path: &str, home: &Path) -> PathBuf {
    if path == "~" {
        return home.to_path_buf();
    }
    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// Fold `.` and `..` components without consulting the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if !out.pop() && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Resolves paths against a home and working directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathResolver {
    home: PathBuf,
    cwd: PathBuf,
}

impl PathResolver {
    pub fn new(home: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            cwd: cwd.into(),
        }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Resolve `path` to an absolute, normalized path.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let expanded = expand_home(path.trim(), &self.home);
        let absolute = if expanded.is_absolute() {
            expanded
        } else {
            self.cwd.join(expanded)
        };
        normalize(&absolute)
    }

    /// Render `path` with the home directory replaced by `~`, if it lives under home.
    pub fn home_alias(&self, path: &Path) -> Option<String> {
        let rest = path.strip_prefix(&self.home).ok()?;
        if rest.as_os_str().is_empty() {
            Some("~".to_string())
        } else {
            Some(format!("~/{}", rest.display()))
        }
    }

    /// Detect a recursive force delete of `/`, a critical system directory, or home.
    ///
    /// Each command segment (split on `;`, `&`, `|` and newlines) is checked
    /// for an `rm` invocation carrying both recursive and force flags. A
    /// leading `sudo` is stripped once per segment and reported as a `sudo: `
    /// prefix. Relative targets are skipped, and so is anything deeper than
    /// a top-level directory. Returns a description of the first hit.
    pub fn find_critical_delete(&self, command: &str) -> Option<String> {
        command
            .split([';', '&', '|', '\n'])
            .find_map(|segment| self.check_segment(segment))
    }

    fn check_segment(&self, segment: &str) -> Option<String> {
        let segment = segment.trim_start();
        match strip_sudo(segment) {
            Some(rest) => self
                .check_rm_invocation(rest)
                .map(|hit| format!("sudo: {hit}")),
            None => self.check_rm_invocation(segment),
        }
    }

    fn check_rm_invocation(&self, segment: &str) -> Option<String> {
        let mut tokens = segment.split_whitespace();
        let program = tokens.next()?;
        if program != "rm" && !program.ends_with("/rm") {
            return None;
        }

        let mut recursive = false;
        let mut force = false;
        let mut targets = Vec::new();
        let mut flags_done = false;

        for token in tokens {
            if !flags_done && token == "--" {
                flags_done = true;
            } else if !flags_done && token.starts_with("--") {
                recursive |= token == "--recursive";
                force |= token == "--force";
            } else if !flags_done && token.starts_with('-') && token.len() > 1 {
                recursive |= token.contains(['r', 'R']);
                force |= token.contains('f');
            } else {
                targets.push(token);
            }
        }

        if !(recursive && force) {
            return None;
        }

        targets
            .into_iter()
            .filter_map(|target| self.resolve_delete_target(target))
            .find_map(|path| self.describe_critical(&path))
    }

    /// Resolve an `rm` target; relative targets yield `None`.
    fn resolve_delete_target(&self, token: &str) -> Option<PathBuf> {
        let token = token.trim_matches(|c| c == '"' || c == '\'');
        if token == "/*" {
            return Some(PathBuf::from("/"));
        }
        let expanded = if token == "~" || token.starts_with("~/") {
            expand_home(token, &self.home)
        } else if token.starts_with('/') {
            PathBuf::from(token)
        } else {
            return None;
        };
        Some(trim_trailing_separators(&expanded))
    }

    fn describe_critical(&self, path: &Path) -> Option<String> {
        if path == Path::new("/") {
            Some("recursive force delete of the root directory /".to_string())
        } else if path == self.home.as_path() {
            Some(format!(
                "recursive force delete of the home directory {}",
                path.display()
            ))
        } else if CRITICAL_DIRECTORIES
            .iter()
            .any(|dir| path == Path::new(dir))
        {
            Some(format!(
                "recursive force delete of critical system directory {}",
                path.display()
            ))
        } else {
            None
        }
    }
}

fn strip_sudo(segment: &str) -> Option<&str> {
    segment
        .strip_prefix("sudo")
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .map(str::trim_start)
}

fn trim_trailing_separators(path: &Path) -> PathBuf {
    let text = path.to_string_lossy();
    let trimmed = text.trim_end_matches('/');
    if trimmed.is_empty() {
        PathBuf::from("/")
    } else {
        PathBuf::from(trimmed)
    }
}

/// A protected location, resolved once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtectedPath {
    path: PathBuf,
    absolute: String,
    home_alias: Option<String>,
}

impl ProtectedPath {
    pub fn resolve(entry: &str, resolver: &PathResolver) -> Self {
        let path = resolver.resolve(entry);
        let absolute = path.to_string_lossy().into_owned();
        let home_alias = resolver.home_alias(&path);
        Self {
            path,
            absolute,
            home_alias,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether `target` is this path or a descendant of it.
    ///
    /// Descendancy is component-bounded: `~/.ssh` covers `~/.ssh/id_rsa`
    /// but not `~/.sshrc`.
    pub fn covers(&self, target: &Path) -> bool {
        target.starts_with(&self.path)
    }

    /// Whether the command text mentions this path in absolute or `~` form.
    pub fn appears_in(&self, command: &str) -> bool {
        command.contains(&self.absolute)
            || self
                .home_alias
                .as_deref()
                .is_some_and(|alias| command.contains(alias))
    }
}

/// The configured protected-path list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProtectedPaths {
    entries: Vec<ProtectedPath>,
}

impl ProtectedPaths {
    pub fn resolve<S: AsRef<str>>(entries: &[S], resolver: &PathResolver) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|entry| entry.as_ref().trim())
                .filter(|entry| !entry.is_empty())
                .map(|entry| ProtectedPath::resolve(entry, resolver))
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProtectedPath> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry covering the already-resolved `target`.
    pub fn find_covering(&self, target: &Path) -> Option<&ProtectedPath> {
        self.entries.iter().find(|entry| entry.covers(target))
    }

    /// First entry mentioned in `command`.
    pub fn find_in_command(&self, command: &str) -> Option<&ProtectedPath> {
        self.entries.iter().find(|entry| entry.appears_in(command))
    }
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
