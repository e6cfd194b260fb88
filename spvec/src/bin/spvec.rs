use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spvec::SparseVector;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "spvec - Inspect and combine sparse vectors stored as text")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show length, stored entries and density
    Info {
        /// Vector file, sparse `<i v ... n>` or dense `[v ...]`
        path: PathBuf,
    },
    /// Print the dense form
    Dense { path: PathBuf },
    /// Print the sparse form
    Sparse { path: PathBuf },
    /// Drop stored zeros and print the sparse form
    Compact { path: PathBuf },
    /// Inner product of two vectors
    Dot { left: PathBuf, right: PathBuf },
    /// Element-wise sum of two vectors
    Add { left: PathBuf, right: PathBuf },
    /// Element-wise difference of two vectors
    Sub { left: PathBuf, right: PathBuf },
}

fn load(path: &Path) -> Result<SparseVector<f64>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let vector = text
        .parse::<SparseVector<f64>>()
        .with_context(|| format!("failed to parse {}", path.display()))?;
    info!(path = %path.display(), "loaded vector");
    Ok(vector)
}

fn load_pair(left: &Path, right: &Path) -> Result<(SparseVector<f64>, SparseVector<f64>)> {
    Ok((load(left)?, load(right)?))
}

fn handle_info(path: &Path) -> Result<()> {
    let vector = load(path)?;
    let density = if vector.is_empty() {
        0.0
    } else {
        vector.nvalues() as f64 / vector.length() as f64
    };

    println!("File: {}", path.display());
    println!("  Length: {}", vector.length());
    println!("  Stored entries: {}", vector.nvalues());
    println!("  Density: {:.4}%", density * 100.0);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        tracing_subscriber::EnvFilter::new("spvec=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info { path } => handle_info(path)?,
        Commands::Dense { path } => println!("{}", load(path)?.dense()),
        Commands::Sparse { path } => println!("{}", load(path)?),
        Commands::Compact { path } => {
            let mut vector = load(path)?;
            let removed = vector.compact();
            info!(removed, "compacted vector");
            println!("{vector}");
        }
        Commands::Dot { left, right } => {
            let (a, b) = load_pair(left, right)?;
            println!("{}", a.dot(&b)?);
        }
        Commands::Add { left, right } => {
            let (a, b) = load_pair(left, right)?;
            println!("{}", a.try_add(&b)?);
        }
        Commands::Sub { left, right } => {
            let (a, b) = load_pair(left, right)?;
            println!("{}", a.try_sub(&b)?);
        }
    }

    Ok(())
}
