use serde::Serialize;

use crate::analysis::DomainReport;

#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct RunSummary {
    pub valid_tld_variants: u32,
    pub total_tld_variants: u32,
    pub name_variants: u32,
}

impl RunSummary {
    pub fn record(&mut self, report: &DomainReport) {
        self.valid_tld_variants += report.valid_tlds.len() as u32;
        self.total_tld_variants += (report.valid_tlds.len() + report.invalid_tlds.len()) as u32;
        self.name_variants += report.name_variants.len() as u32;
    }
}
