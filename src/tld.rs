use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

// Include the registrable-TLD snapshot at compile time
const DEFAULT_TLDS: &str = include_str!("../default_tlds.txt");

pub fn load_tld_set(tld_file_path: Option<&Path>) -> Result<HashSet<String>> {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "tld_set",
        "Starting TLD reference set loading"
    );

    let entry_format =
        Regex::new(r"^[a-z]{2,63}$").context("Failed to compile TLD entry format")?;
    let mut tlds = HashSet::new();

    if let Some(path) = tld_file_path {
        info!(action = "load", component = "tld_file", file_path = ?path, "Loading TLD set from specified file");
        if !path.exists() {
            anyhow::bail!("TLD file not found: {:?}", path);
        }

        let content = fs::read_to_string(path)?;
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if !line.is_empty() && !line.starts_with('#') {
                let entry = line.to_lowercase();
                if !entry_format.is_match(&entry) {
                    anyhow::bail!("Invalid TLD entry at line {}: {:?}", line_num + 1, line);
                }
                tlds.insert(entry);
            }
        }
        info!(action = "loaded", component = "tld_file", tld_count = tlds.len(), file_path = ?path, "Loaded TLD set from file");
    } else {
        info!(
            action = "load",
            component = "embedded_tlds",
            "Using embedded TLD snapshot"
        );
        for (line_num, line) in DEFAULT_TLDS.lines().enumerate() {
            let line = line.trim();
            if !line.is_empty() && !line.starts_with('#') {
                let entry = line.to_lowercase();
                if !entry_format.is_match(&entry) {
                    warn!(action = "parse", component = "embedded_tlds", line_number = line_num + 1, entry = ?line, "Invalid TLD entry");
                    continue;
                }
                tlds.insert(entry);
            }
        }
    }

    if tlds.is_empty() {
        anyhow::bail!("TLD reference set is empty");
    }

    let load_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "tld_set",
        tld_count = tlds.len(),
        duration_ms = load_time.as_millis(),
        "TLD reference set loaded"
    );
    Ok(tlds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_snapshot_contents() {
        let tlds = load_tld_set(None).unwrap();

        for tld in ["com", "net", "org", "fi", "cm", "gi", "fk", "fm", "uk"] {
            assert!(tlds.contains(tld), "snapshot should contain {tld:?}");
        }
        for tld in ["fa", "fh", "fy", "con", "invalid"] {
            assert!(!tlds.contains(tld), "snapshot should not contain {tld:?}");
        }
    }

    #[test]
    fn test_embedded_snapshot_entries_are_well_formed() {
        let tlds = load_tld_set(None).unwrap();
        for tld in &tlds {
            assert!(tld.len() >= 2);
            assert!(tld.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_load_from_file_with_comments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# custom set").unwrap();
        writeln!(file, "com").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  DEV  ").unwrap();
        file.flush().unwrap();

        let tlds = load_tld_set(Some(file.path())).unwrap();
        assert_eq!(tlds.len(), 2);
        assert!(tlds.contains("com"));
        assert!(tlds.contains("dev"));
    }

    #[test]
    fn test_load_from_file_rejects_bad_entry() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "com").unwrap();
        writeln!(file, "not a tld").unwrap();
        file.flush().unwrap();

        let err = load_tld_set(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = load_tld_set(Some(Path::new("/nonexistent/tlds.txt"))).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
