//! Build script for the Spotify playlist exporter.
//!
//! Copies the `.env.example` template from the crate root into the user's
//! local data directory, next to where the exporter looks for its
//! `.env` file (see `config::load_env`):
//!
//! - Linux: `~/.local/share/spexport/.env.example`
//! - macOS: `~/Library/Application Support/spexport/.env.example`
//! - Windows: `%LOCALAPPDATA%/spexport/.env.example`
//!
//! A missing template only produces a cargo warning.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::{env, fs, path::PathBuf};

    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spexport");
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
