use std::path::{Path, PathBuf};

use crate::diagnostic::Diagnostic;

pub const MANIFEST_NAME: &str = "mindcode.toml";

/// Minimal project configuration from mindcode.toml.
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub name: String,
    pub version: String,
    /// Source file to compile, resolved against `root_dir`.
    pub entry: PathBuf,
    /// Where `mindcode build` writes the Logic listing.
    pub output: PathBuf,
    pub root_dir: PathBuf,
}

impl Project {
    /// Load project from a mindcode.toml file.
    pub fn load(toml_path: &Path) -> Result<Project, Diagnostic> {
        let content = std::fs::read_to_string(toml_path).map_err(|e| {
            Diagnostic::unlocated(format!("cannot read '{}': {}", toml_path.display(), e))
        })?;
        let root_dir = toml_path.parent().unwrap_or(Path::new(".")).to_path_buf();
        Self::parse(&content, root_dir)
    }

    /// Parse manifest text; relative paths resolve against `root_dir`.
    pub fn parse(content: &str, root_dir: PathBuf) -> Result<Project, Diagnostic> {
        // Section-aware minimal TOML parsing
        let mut name = String::new();
        let mut version = String::new();
        let mut entry = String::new();
        let mut output = String::new();
        let mut current_section = String::new();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.starts_with('#') || trimmed.is_empty() {
                continue;
            }
            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                current_section = trimmed[1..trimmed.len() - 1].trim().to_string();
                continue;
            }
            if current_section != "project" {
                continue;
            }
            if let Some((key, value)) = trimmed.split_once('=') {
                let key = key.trim().trim_matches('"');
                let value = value.trim().trim_matches('"');
                match key {
                    "name" => name = value.to_string(),
                    "version" => version = value.to_string(),
                    "entry" => entry = value.to_string(),
                    "output" => output = value.to_string(),
                    _ => {}
                }
            }
        }

        if name.is_empty() {
            return Err(
                Diagnostic::unlocated(format!("missing 'name' in {}", MANIFEST_NAME))
                    .with_help("add `name = \"...\"` under the [project] section".to_string()),
            );
        }
        if entry.is_empty() {
            entry = "main.mnd".to_string();
        }
        if output.is_empty() {
            output = format!("{}.mlog", name);
        }

        Ok(Project {
            name,
            version,
            entry: root_dir.join(entry),
            output: root_dir.join(output),
            root_dir,
        })
    }

    /// Try to find a mindcode.toml in the given directory or its ancestors.
    pub fn find(start_dir: &Path) -> Option<PathBuf> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(MANIFEST_NAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_project() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join(MANIFEST_NAME);
        fs::write(
            &toml_path,
            r#"[project]
name = "miner"
version = "0.1.0"
entry = "src/miner.mnd"
output = "out/miner.mlog"
"#,
        )
        .unwrap();

        let project = Project::load(&toml_path).unwrap();
        assert_eq!(project.name, "miner");
        assert_eq!(project.version, "0.1.0");
        assert_eq!(project.entry, dir.path().join("src/miner.mnd"));
        assert_eq!(project.output, dir.path().join("out/miner.mlog"));
        assert_eq!(project.root_dir, dir.path());
    }

    #[test]
    fn test_defaults() {
        let project =
            Project::parse("[project]\nname = \"sorter\"\n", PathBuf::from("/p")).unwrap();
        assert_eq!(project.entry, PathBuf::from("/p/main.mnd"));
        assert_eq!(project.output, PathBuf::from("/p/sorter.mlog"));
        assert!(project.version.is_empty());
    }

    #[test]
    fn test_keys_outside_project_section_ignored() {
        let content = "name = \"stray\"\n\n[project]\n# comment\nname = \"real\"\n\n[other]\nentry = \"nope.mnd\"\n";
        let project = Project::parse(content, PathBuf::from(".")).unwrap();
        assert_eq!(project.name, "real");
        assert!(project.entry.ends_with("main.mnd"));
    }

    #[test]
    fn test_missing_name() {
        let err = Project::parse("[project]\nversion = \"1.0\"\n", PathBuf::from(".")).unwrap_err();
        assert!(err.message.contains("missing 'name'"));
        assert!(err.help.is_some());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Project::load(&dir.path().join(MANIFEST_NAME)).unwrap_err();
        assert!(err.message.contains("cannot read"));
    }

    #[test]
    fn test_find_walks_ancestors() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_NAME), "[project]\nname = \"x\"\n").unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = Project::find(&nested).unwrap();
        assert_eq!(found, dir.path().join(MANIFEST_NAME));
    }
}
