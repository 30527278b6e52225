use std::env;

use anyhow::{anyhow, Context, Result};
use littlelemon::app::{config_file_path, ensure_workspace_structure, load_or_default, save};
use littlelemon::storage::{FileStore, KeyValueStore, PROFILE_KEY};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let paths = ensure_workspace_structure()?;
    let args = CliArgs::parse()?;
    let config_path = config_file_path()?;
    let mut config = load_or_default()?;
    let mut changed = !config_path.exists();

    if let Some(delay) = args.splash_delay_ms {
        changed |= config.splash.ready_delay_ms != delay;
        config.splash.ready_delay_ms = delay;
    }
    if let Some(file_name) = args.storage_file {
        changed |= config.storage.file_name != file_name;
        config.storage.file_name = file_name;
    }
    if let Some(quality) = args.picker_quality {
        if !(0.0..=1.0).contains(&quality) {
            return Err(anyhow!("--picker-quality must be between 0.0 and 1.0"));
        }
        changed |= config.picker.quality != quality;
        config.picker.quality = quality;
    }

    if changed {
        save(&config)?;
        println!("Settings recorded at {}", config_path.display());
    } else {
        println!("Settings already configured.");
    }

    let store_path = paths.storage_file(&config.storage);
    let store = FileStore::open(&store_path)
        .with_context(|| format!("Failed to open key-value store {:?}", store_path))?;
    let has_profile = store.get(PROFILE_KEY)?.is_some();
    info!(path = %store_path.display(), has_profile, "key-value store ready");
    println!(
        "Key-value store: {} ({})",
        store_path.display(),
        if has_profile {
            "profile saved"
        } else {
            "no profile yet"
        }
    );

    Ok(())
}

struct CliArgs {
    splash_delay_ms: Option<u64>,
    storage_file: Option<String>,
    picker_quality: Option<f32>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut splash_delay_ms = None;
        let mut storage_file = None;
        let mut picker_quality = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--splash-delay-ms" => {
                    let value = args
                        .next()
                        .context("Expected milliseconds after --splash-delay-ms")?;
                    splash_delay_ms = Some(
                        value
                            .parse()
                            .with_context(|| format!("Invalid delay '{value}'"))?,
                    );
                }
                "--storage-file" => {
                    let value = args
                        .next()
                        .context("Expected a file name after --storage-file")?;
                    storage_file = Some(value);
                }
                "--picker-quality" => {
                    let value = args
                        .next()
                        .context("Expected a number after --picker-quality")?;
                    picker_quality = Some(
                        value
                            .parse()
                            .with_context(|| format!("Invalid quality '{value}'"))?,
                    );
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        Ok(Self {
            splash_delay_ms,
            storage_file,
            picker_quality,
        })
    }
}

fn print_usage() {
    println!("Little Lemon setup");
    println!("Ensures the workspace exists and settings are recorded in config.toml.");
    println!("Usage: cargo run --bin setup -- [options]");
    println!("Options:");
    println!("  --splash-delay-ms <ms>     Splash screen delay (default: 1500)");
    println!("  --storage-file <name>      Key-value store file name (default: storage.json)");
    println!("  --picker-quality <0..1>    Avatar picker quality (default: 1.0)");
}
