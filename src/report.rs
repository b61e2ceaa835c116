use crate::analysis::DomainReport;
use crate::stats::RunSummary;

// Invalid TLD variants shown before the list is truncated.
pub const INVALID_PREVIEW_CAP: usize = 10;

const RULE_WIDTH: usize = 70;

pub fn print_banner() {
    println!("Bit-Flip Domain Analysis");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!();
}

pub fn print_domain_report(report: &DomainReport, show_invalid: bool, check_domain_name: bool) {
    println!("\n{}", report.domain);
    println!("{}", "=".repeat(RULE_WIDTH));

    println!("\n[1] TLD Bit-Flips (Original TLD: .{})", report.tld);
    println!("{}", "-".repeat(RULE_WIDTH));

    if !report.valid_tlds.is_empty() {
        println!(
            "\n  ✓ VALID/REGISTRABLE bit-flipped TLDs ({}):",
            report.valid_tlds.len()
        );
        for tld in &report.valid_tlds {
            println!("    → {}.{}", report.base, tld);
        }
    } else {
        println!("\n  No valid bit-flipped TLDs found");
    }

    if show_invalid && !report.invalid_tlds.is_empty() {
        println!("\n  ✗ Invalid TLDs ({}):", report.invalid_tlds.len());
        for tld in report.invalid_tlds.iter().take(INVALID_PREVIEW_CAP) {
            println!("    → .{}", tld);
        }
        if report.invalid_tlds.len() > INVALID_PREVIEW_CAP {
            println!(
                "    ... and {} more",
                report.invalid_tlds.len() - INVALID_PREVIEW_CAP
            );
        }
    }

    if check_domain_name {
        println!("\n[2] Domain Name Bit-Flips (Original: {})", report.base);
        println!("{}", "-".repeat(RULE_WIDTH));

        if !report.name_variants.is_empty() {
            println!(
                "\n  Bit-flipped domain names ({}):",
                report.name_variants.len()
            );
            for variant in &report.name_variants {
                println!("    → {}.{}", variant, report.tld);
            }
        } else {
            println!("\n  No bit-flipped domain name variants generated");
        }
    }
}

pub fn print_summary(summary: &RunSummary, check_domain_name: bool) {
    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("Summary:");
    println!(
        "  - {} valid TLDs found from {} TLD variants",
        summary.valid_tld_variants, summary.total_tld_variants
    );
    if check_domain_name {
        println!(
            "  - {} domain name variants generated",
            summary.name_variants
        );
    }
}
