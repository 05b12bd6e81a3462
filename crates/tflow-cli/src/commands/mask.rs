use anyhow::Result;
use std::path::Path;
use tflow_config::Config;
use tflow_security::{MaskingProfile, Redactor};

use super::read_input;
use crate::cli::ProfileArg;

pub fn handle(file: Option<&Path>, profile: Option<ProfileArg>, config: &Config) -> Result<()> {
    let input = read_input(file)?;
    let profile = profile.map(MaskingProfile::from).unwrap_or(config.masking);

    let redactor = Redactor::for_profile(profile);
    let (masked, detections) = redactor.redact(&input);

    print!("{}", masked);

    if config.report.show_detections && !detections.is_empty() {
        eprintln!("\nMasked {} secret(s):", detections.len());
        for d in &detections {
            eprintln!("  line {} [{}] {}: {}", d.line, d.severity, d.kind, d.masked);
        }
    }

    Ok(())
}
