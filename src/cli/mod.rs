pub mod build;
pub mod check;

use std::path::{Path, PathBuf};
use std::process;

use mindcode::project::{Project, MANIFEST_NAME};

/// Resolved input: entry file and optional project.
pub struct ResolvedInput {
    pub entry: PathBuf,
    pub project: Option<Project>,
}

fn load_project(toml_path: &Path) -> Project {
    match Project::load(toml_path) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {}", e.message);
            process::exit(1);
        }
    }
}

/// Resolve an input path (file or project directory) to an entry file and
/// optional project.
pub fn resolve_input(input: &Path) -> ResolvedInput {
    if input.is_dir() {
        let toml_path = input.join(MANIFEST_NAME);
        if !toml_path.exists() {
            eprintln!("error: no {} found in '{}'", MANIFEST_NAME, input.display());
            process::exit(1);
        }
        let project = load_project(&toml_path);
        return ResolvedInput {
            entry: project.entry.clone(),
            project: Some(project),
        };
    }

    if !input.extension().is_some_and(|e| e == "mnd") {
        eprintln!("error: input must be a .mnd file or project directory");
        process::exit(1);
    }

    // A file that is its project's entry picks up the project's output path.
    let project = input
        .parent()
        .and_then(Project::find)
        .map(|toml_path| load_project(&toml_path))
        .filter(|p| same_file(&p.entry, input));
    ResolvedInput {
        entry: input.to_path_buf(),
        project,
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Read the entry source, exiting on failure.
pub fn read_source(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", path.display(), e);
            process::exit(1);
        }
    }
}
