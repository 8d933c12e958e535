//! Build script for Statify.
//!
//! Copies the configuration template to the user's local data directory so a
//! fresh install has a ready-to-edit example next to where the service looks
//! for its `.env` file.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root to `<data_local_dir>/statify/`.
///
/// The template is looked up in the crate root (where `Cargo.toml` resides)
/// and copied to the platform-specific local data directory:
/// - Linux: `~/.local/share/statify/.env.example`
/// - macOS: `~/Library/Application Support/statify/.env.example`
/// - Windows: `%LOCALAPPDATA%/statify/.env.example`
///
/// A missing template only produces a cargo warning. Failing to create the
/// directory or write the file fails the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("statify");
    fs::create_dir_all(&out_dir)?;

    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
