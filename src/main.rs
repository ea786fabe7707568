use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser};
use gutshred::{Shredder, DEFAULT_CHUNK_SIZE};
use log::warn;

/// overwrites files with Peter Gutmann's 35-pass sequence
#[derive(Parser)]
#[command(name = "gutshred")]
#[command(version)]
#[command(about = "Overwrites files with Peter Gutmann's 35-pass sequence")]
#[command(long_about = "Overwrites the contents of each file in place with 4 random passes, \
27 patterned passes and 4 more random passes, syncing to disk after every pass. \
Journal copies, snapshots and flash wear-leveling remnants are not covered.")]
struct Cli {
    /// files to overwrite
    #[arg(required = true, help = "Files to overwrite")]
    paths: Vec<PathBuf>,

    /// remove each file after it has been wiped
    #[arg(short = 'u', long,
          help = "Remove each file after a successful wipe",
          long_help = "Unlink each file once all 35 passes have completed. Files whose wipe failed are left in place.")]
    remove: bool,

    /// force operation without confirmation
    #[arg(short, long,
          help = "Force operation without confirmation",
          long_help = "Skip the confirmation prompt. Use with caution!")]
    force: bool,

    /// scratch buffer size
    #[arg(short = 's', long, default_value_t = DEFAULT_CHUNK_SIZE,
          help = "Bytes written per write call (512 to 16777216)")]
    chunk_size: usize,

    /// log verbosity
    #[arg(short, long, action = ArgAction::Count,
          help = "Increase log verbosity (-v debug, -vv trace)")]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn confirm_operation(paths: &[PathBuf], remove: bool, force: bool) -> bool {
    if force {
        return true;
    }

    for path in paths {
        println!("🔥 Preparing to overwrite: {}", path.display());
    }
    if remove {
        println!("The files will be removed afterwards.");
    }
    println!("⚠️  WARNING: This operation is irreversible!");
    println!("Type 'yes' to confirm:");

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return false;
    }

    input.trim() == "yes"
}

fn process_path(shredder: &mut Shredder, path: &Path, remove: bool) -> gutshred::Result<()> {
    if remove {
        shredder.shred_path(path)
    } else {
        shredder.wipe_path(path)
    }
}

fn main() {
    // parse command line arguments
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !confirm_operation(&cli.paths, cli.remove, cli.force) {
        println!("Operation cancelled. Your files live another day.");
        process::exit(0);
    }

    let mut shredder = Shredder::new().with_chunk_size(cli.chunk_size);
    if shredder.chunk_size() != cli.chunk_size {
        warn!(
            "Chunk size {} out of range, using {}",
            cli.chunk_size,
            shredder.chunk_size()
        );
    }

    let mut failures = 0;
    for path in &cli.paths {
        match process_path(&mut shredder, path, cli.remove) {
            Ok(()) => println!("✨ {} has been overwritten", path.display()),
            Err(e) => {
                failures += 1;
                eprintln!("Error wiping {}: {}", path.display(), e);
                eprintln!("⚠️  WARNING: {} may not have been completely overwritten!", path.display());
            }
        }
    }

    if failures > 0 {
        process::exit(1);
    }
}
