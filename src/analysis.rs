use anyhow::Result;
use serde::Serialize;
use std::collections::HashSet;
use std::time::Instant;
use tracing::{info, warn};

use crate::{bitflip, domain, input, report, stats::RunSummary, structured, tld, Args};

#[derive(Debug, Clone, Serialize)]
pub struct DomainReport {
    pub domain: String,
    pub base: String,
    pub tld: String,
    pub valid_tlds: Vec<String>,
    pub invalid_tlds: Vec<String>,
    pub name_variants: Vec<String>,
}

/// Analyzes one domain: TLD bit-flip variants classified against the
/// reference set, plus base-label variants unless disabled. Returns None
/// (with a warning) for input without a usable TLD.
pub fn analyze_domain(
    domain: &str,
    tld_set: &HashSet<String>,
    check_domain_name: bool,
) -> Option<DomainReport> {
    let parsed = match domain::parse_domain(domain) {
        Some(parsed) => parsed,
        None => {
            warn!(
                action = "skip",
                component = "analysis",
                domain = domain,
                "Skipping invalid domain"
            );
            return None;
        }
    };

    let mut tld_variants = bitflip::tld_variants(&parsed.tld);
    // A case-only flip regenerates the original; it is not a finding.
    tld_variants.remove(&parsed.tld.to_lowercase());

    // BTreeSet iteration is sorted and partition preserves it, so both
    // lists come out in lexicographic order.
    let (valid_tlds, invalid_tlds): (Vec<String>, Vec<String>) = tld_variants
        .into_iter()
        .partition(|variant| tld_set.contains(variant));

    let name_variants = if check_domain_name {
        let mut variants = bitflip::name_variants(&parsed.base);
        variants.remove(&parsed.base.to_lowercase());
        variants.into_iter().collect()
    } else {
        Vec::new()
    };

    Some(DomainReport {
        domain: domain.to_string(),
        base: parsed.base,
        tld: parsed.tld,
        valid_tlds,
        invalid_tlds,
        name_variants,
    })
}

pub fn run_analysis(args: &Args) -> Result<()> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "analysis", "Starting bit-flip analysis");

    let tld_set = tld::load_tld_set(args.tlds.as_deref())?;
    let domains = input::read_domains(&args.input)?;
    if domains.is_empty() {
        anyhow::bail!("No domains provided");
    }

    let check_domain_name = !args.tld_only;
    let mut summary = RunSummary::default();

    if args.json {
        let mut reports = Vec::new();
        for domain in &domains {
            if let Some(report) = analyze_domain(domain, &tld_set, check_domain_name) {
                summary.record(&report);
                reports.push(report);
            }
        }
        structured::emit_json(reports, summary)?;
    } else {
        // The text report streams domain by domain; only the summary block
        // waits for the end of the batch.
        report::print_banner();
        for domain in &domains {
            if let Some(report) = analyze_domain(domain, &tld_set, check_domain_name) {
                report::print_domain_report(&report, args.show_invalid, check_domain_name);
                summary.record(&report);
            }
        }
        report::print_summary(&summary, check_domain_name);
    }

    let total_time = total_start_time.elapsed();
    info!(
        action = "complete",
        component = "analysis",
        domain_count = domains.len(),
        valid_tld_variants = summary.valid_tld_variants,
        total_tld_variants = summary.total_tld_variants,
        name_variants = summary.name_variants,
        duration_ms = total_time.as_millis(),
        "Analysis completed"
    );
    Ok(())
}
