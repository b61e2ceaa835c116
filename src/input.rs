use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::info;

pub fn read_domains(input: &str) -> Result<Vec<String>> {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "domain_input",
        source = input,
        "Reading domain list"
    );

    let content = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read domains from stdin")?;
        buffer
    } else {
        let path = Path::new(input);
        if !path.exists() {
            anyhow::bail!("Input file not found: {:?}", path);
        }
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?
    };

    let domains: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect();

    let read_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "domain_input",
        domain_count = domains.len(),
        duration_ms = read_time.as_millis(),
        "Domain list read"
    );
    Ok(domains)
}
