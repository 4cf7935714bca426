use anyhow::{Context, Result};
use std::{env, fmt::Display, fs::OpenOptions, io::Write, path::Path};

const OUTPUT_FILE_VAR: &str = "GITHUB_OUTPUT";

pub fn set_output(name: &str, value: impl Display) -> Result<()> {
    let value = value.to_string();
    log::debug!("Setting output {}={}", name, value);

    match env::var_os(OUTPUT_FILE_VAR) {
        Some(path) if !path.is_empty() => append_output(Path::new(&path), name, &value),
        _ => {
            println!("::set-output name={}::{}", name, value);
            Ok(())
        }
    }
}

fn append_output(path: &Path, name: &str, value: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Cannot open output file {}", path.display()))?;

    writeln!(file, "{}={}", name, value).context("Cannot write to output file")?;

    Ok(())
}
