mod cli;

use clap::{Parser, Subcommand};

use cli::build::BuildArgs;
use cli::check::CheckArgs;

#[derive(Parser)]
#[command(
    name = "mindcode",
    version,
    about = "Mindcode compiler: high-level scripts to Mindustry Logic"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a .mnd file (or project) to Mindustry Logic
    Build(BuildArgs),
    /// Parse and generate without writing output
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Build(args) => cli::build::cmd_build(args),
        Command::Check(args) => cli::check::cmd_check(args),
    }
}
