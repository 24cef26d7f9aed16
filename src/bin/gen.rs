//! geodat-gen: CLI tool for compiling domain list files into a geosite
//! binary artifact.

use clap::{Parser, Subcommand};
use geodat::Compiler;
use sha2::{Digest, Sha256};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "geodat-gen")]
#[command(version = "0.1.0")]
#[command(about = "Compile plaintext domain lists into a geosite binary artifact", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile list files into a binary artifact
    Compile {
        /// Directory containing <tag>.txt list files
        #[arg(short, long, default_value = "lists")]
        input_dir: PathBuf,

        /// Output artifact path
        #[arg(short, long, default_value = "geosite.dat")]
        output: PathBuf,

        /// Compile only these tags (default: every .txt file in the input directory)
        #[arg(short, long)]
        tag: Vec<String>,

        /// Also write a <output>.sha256 checksum sidecar
        #[arg(long)]
        checksum: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            input_dir,
            output,
            tag,
            checksum,
        } => {
            if let Err(e) = compile(&input_dir, &output, &tag, checksum) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn compile(
    input_dir: &Path,
    output: &Path,
    tags: &[String],
    checksum: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let compiler = Compiler::new(input_dir);

    let tags = if tags.is_empty() {
        compiler.discover_tags()?
    } else {
        tags.to_vec()
    };

    let result = compiler.compile(&tags)?;
    for stat in &result.stats {
        log::info!("[{}] {} domains", stat.tag, stat.entries);
    }

    fs::write(output, &result.data)?;
    if checksum {
        let sidecar = sidecar_path(output);
        fs::write(&sidecar, checksum_line(&result.data, output))?;
        log::info!("checksum written to {}", sidecar.display());
    }

    println!("done: {} ({} bytes)", output.display(), result.data.len());
    Ok(())
}

fn sidecar_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_os_string();
    name.push(".sha256");
    PathBuf::from(name)
}

/// One line in `sha256sum` format: hex digest, two spaces, file name.
fn checksum_line(data: &[u8], output: &Path) -> String {
    let digest = Sha256::digest(data);
    let mut hex = String::with_capacity(64);
    for byte in digest {
        let _ = write!(hex, "{:02x}", byte);
    }
    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| output.display().to_string());
    format!("{}  {}\n", hex, name)
}
