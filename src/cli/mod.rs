use serde_json::Value;
use std::{
    io::{self, Write},
    path::Path,
};

use crate::MainError;
use json_helpers::{config::Config, load_json_async, serde_write};

/// Load a file and pretty-print it. Keys keep the order they had in the file.
pub async fn print(path: &Path, config: &Config) -> Result<(), MainError> {
    let value: Value = load_json_async(path).await?;

    let stdout = io::stdout();
    let mut lock = stdout.lock();
    serde_write(&mut lock, &value);
    if config.trailing_newline {
        writeln!(lock)?;
    }

    Ok(())
}

/// Make sure a file loads as JSON without printing it.
pub async fn check(path: &Path) -> Result<(), MainError> {
    let _: Value = load_json_async(path).await?;
    println!("ok {}", path.display());
    Ok(())
}
