//! Line Tool: Szenario-Runner.
//!
//! Spielt eine Szenario-Datei (TOML) durch den Controller und gibt alle
//! Platzierungen als JSON aus: `line-tool <scenario.toml>`.

use anyhow::Context;
use line_tool::{LineToolOptions, Scenario};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Line Tool v{} startet...", env!("CARGO_PKG_VERSION"));

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("Aufruf: line-tool <scenario.toml>")?;

    let mut scenario = Scenario::load(&path)?;
    if scenario.options.is_none() {
        scenario.options = Some(LineToolOptions::load_from_file(
            &LineToolOptions::config_path(),
        ));
    }

    let report = scenario.run();
    let json = serde_json::to_string_pretty(&report).context("JSON-Ausgabe fehlgeschlagen")?;
    println!("{}", json);
    Ok(())
}
