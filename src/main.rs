use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Context;
use blockvfs::shell::{Shell, DEMO_SCRIPT};
use blockvfs::{FileSys, FsConfig};
use clap::Parser;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "vfs-shell",
    about = "Interactive shell over an in-memory block-backed file system",
    version
)]
struct Cli {
    /// TOML file with `num_blocks`, `block_size` and `snapshot_block`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of blocks on the simulated disk
    #[arg(long)]
    blocks: Option<usize>,

    /// Capacity of each block in bytes
    #[arg(long)]
    block_size: Option<usize>,

    /// Print the namespace as JSON after every command
    #[arg(long)]
    tree: bool,

    /// Run the commands in this file instead of reading stdin
    #[arg(long, conflicts_with = "demo")]
    script: Option<PathBuf>,

    /// Run the built-in sample session
    #[arg(long)]
    demo: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_config(cli: &Cli) -> anyhow::Result<FsConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            FsConfig::from_toml(&text)?
        }
        None => FsConfig::default(),
    };
    if let Some(blocks) = cli.blocks {
        config.num_blocks = blocks;
    }
    if let Some(size) = cli.block_size {
        config.block_size = size;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let fs = FileSys::mount(load_config(&cli)?)?;
    let stdin = io::stdin();
    let mut shell = Shell::new(fs, stdin.lock(), io::stdout()).show_tree(cli.tree);

    if cli.demo {
        shell.run_script(DEMO_SCRIPT.iter().copied())?;
    } else if let Some(path) = &cli.script {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        shell.run_script(text.lines())?;
    } else {
        shell.run(io::stdin().is_terminal())?;
    }
    Ok(())
}
