use std::path::PathBuf;
use std::process;

use clap::Args;

use super::{read_source, resolve_input};

#[derive(Args)]
pub struct CheckArgs {
    /// Input .mnd file or directory with mindcode.toml
    pub input: PathBuf,
    /// Print the parsed syntax tree
    #[arg(long)]
    pub ast: bool,
}

pub fn cmd_check(args: CheckArgs) {
    let CheckArgs { input, ast } = args;
    let ri = resolve_input(&input);

    let source = read_source(&ri.entry);
    let filename = ri.entry.display().to_string();

    if ast {
        match mindcode::parse(&source, &filename) {
            Ok(tree) => println!("{}", tree),
            Err(_) => process::exit(1),
        }
    }

    match mindcode::check(&source, &filename) {
        Ok(()) => eprintln!("OK: {}", input.display()),
        Err(_) => process::exit(1),
    }
}
