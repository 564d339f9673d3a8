use std::path::PathBuf;
use std::process;

use clap::Args;

use super::{read_source, resolve_input};

#[derive(Args)]
pub struct BuildArgs {
    /// Input .mnd file or directory with mindcode.toml
    pub input: PathBuf,
    /// Output .mlog file (default: <input>.mlog, or the project's output)
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,
    /// Print the listing to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
    /// Leave out the trailing `end`
    #[arg(long)]
    pub no_end: bool,
}

pub fn cmd_build(args: BuildArgs) {
    let BuildArgs {
        input,
        output,
        stdout,
        no_end,
    } = args;
    let ri = resolve_input(&input);

    let options = mindcode::CompileOptions { emit_end: !no_end };
    let source = read_source(&ri.entry);
    let filename = ri.entry.display().to_string();
    let listing = match mindcode::compile_with_options(&source, &filename, &options) {
        Ok(l) => l,
        Err(_) => process::exit(1),
    };

    if stdout {
        print!("{}", listing);
        return;
    }

    let default_output = match ri.project {
        Some(ref proj) => proj.output.clone(),
        None => input.with_extension("mlog"),
    };
    let out_path = output.unwrap_or(default_output);
    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("error: cannot create '{}': {}", parent.display(), e);
            process::exit(1);
        }
    }
    if let Err(e) = std::fs::write(&out_path, &listing) {
        eprintln!("error: cannot write '{}': {}", out_path.display(), e);
        process::exit(1);
    }
    eprintln!("Compiled -> {}", out_path.display());
}
