use clap::Parser;
use cplan_shell::{Cli, Shell};

fn main() -> anyhow::Result<()> {
    Shell::from_cli(Cli::parse())?.run()
}
