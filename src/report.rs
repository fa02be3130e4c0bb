use std::collections::HashMap;
use std::fmt::Write;

use crate::models::{ConditionalLabel, Office, OfficeMetrics, Tier};
use crate::month::YearMonth;
use crate::scoring;

fn office_names(offices: &[Office]) -> HashMap<&str, &str> {
    offices
        .iter()
        .map(|office| (office.office_id.as_str(), office.name.as_str()))
        .collect()
}

/// Active offices in scoring rank order, best first.
pub fn ranked_active(metrics: &[OfficeMetrics]) -> Vec<&OfficeMetrics> {
    let mut active: Vec<&OfficeMetrics> = metrics.iter().filter(|m| m.is_active()).collect();
    active.sort_by(|a, b| scoring::compare_by_score(a, b));
    active
}

pub fn build_report(now: YearMonth, offices: &[Office], metrics: &[OfficeMetrics]) -> String {
    let names = office_names(offices);
    let name_of = |id: &str| names.get(id).copied().unwrap_or("(unnamed office)").to_string();
    let summary = scoring::summarize_tiers(metrics);

    let mut output = String::new();
    let _ = writeln!(output, "# Referral Office Tier Report");
    let _ = writeln!(
        output,
        "Scored {} offices as of {} (L12 = trailing 12 months, R3 = trailing 3 months)",
        metrics.len(),
        now
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Tier Mix");
    for tier in Tier::ALL {
        let _ = writeln!(output, "- {}: {} offices", tier, summary.count(tier));
    }
    let _ = writeln!(
        output,
        "- flagged: {} At-Risk, {} Emerging",
        summary.at_risk, summary.emerging
    );

    let active = ranked_active(metrics);
    let _ = writeln!(output);
    let _ = writeln!(output, "## Active Offices");
    if active.is_empty() {
        let _ = writeln!(output, "No offices referred within the active window.");
    } else {
        for office in &active {
            let _ = writeln!(
                output,
                "- {} ({}) {} score {:.1}, L12 {}, R3 {}, percentile {}",
                name_of(&office.office_id),
                office.office_id,
                office.tier,
                office.score.unwrap_or_default(),
                office.l12,
                office.r3,
                office.percentile.unwrap_or_default()
            );
        }
    }

    for (label, heading, empty) in [
        (
            ConditionalLabel::AtRisk,
            "## At-Risk Offices",
            "No strong offices have gone quiet.",
        ),
        (
            ConditionalLabel::Emerging,
            "## Emerging Offices",
            "No smaller offices are trending up.",
        ),
    ] {
        let flagged: Vec<&&OfficeMetrics> = active
            .iter()
            .filter(|m| m.conditional_label == Some(label))
            .collect();
        let _ = writeln!(output);
        let _ = writeln!(output, "{heading}");
        if flagged.is_empty() {
            let _ = writeln!(output, "{empty}");
        }
        for office in flagged {
            let _ = writeln!(
                output,
                "- {} ({}): L12 {}, R3 {}",
                name_of(&office.office_id),
                office.office_id,
                office.l12,
                office.r3
            );
        }
    }

    let mut dormant: Vec<&OfficeMetrics> =
        metrics.iter().filter(|m| m.tier == Tier::Dormant).collect();
    dormant.sort_by(|a, b| {
        b.total_referrals
            .cmp(&a.total_referrals)
            .then_with(|| a.office_id.cmp(&b.office_id))
    });
    let _ = writeln!(output);
    let _ = writeln!(output, "## Dormant Offices");
    if dormant.is_empty() {
        let _ = writeln!(output, "No dormant offices.");
    }
    for office in dormant {
        let _ = writeln!(
            output,
            "- {} ({}): {} months since last referral, {} referrals all-time",
            name_of(&office.office_id),
            office.office_id,
            office.mslr,
            office.total_referrals
        );
    }

    let never: Vec<&OfficeMetrics> = metrics
        .iter()
        .filter(|m| m.total_referrals == 0)
        .collect();
    let _ = writeln!(output);
    let _ = writeln!(output, "## No Referral History");
    if never.is_empty() {
        let _ = writeln!(output, "Every office has referred at least once.");
    }
    for office in never {
        let _ = writeln!(output, "- {} ({})", name_of(&office.office_id), office.office_id);
    }

    output
}

pub fn write_json<W: std::io::Write>(writer: W, metrics: &[OfficeMetrics]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(writer, metrics)?;
    Ok(())
}

pub fn write_csv<W: std::io::Write>(
    writer: W,
    offices: &[Office],
    metrics: &[OfficeMetrics],
) -> anyhow::Result<()> {
    #[derive(serde::Serialize)]
    struct CsvRow<'a> {
        office_id: &'a str,
        office_name: &'a str,
        total_referrals: u64,
        l12: u64,
        r3: u64,
        mslr: u32,
        score: Option<String>,
        tier: &'static str,
        percentile: Option<u8>,
        conditional_label: Option<&'static str>,
    }

    let names = office_names(offices);
    let mut csv_writer = csv::Writer::from_writer(writer);
    for office in metrics {
        csv_writer.serialize(CsvRow {
            office_id: &office.office_id,
            office_name: names.get(office.office_id.as_str()).copied().unwrap_or(""),
            total_referrals: office.total_referrals,
            l12: office.l12,
            r3: office.r3,
            mslr: office.mslr,
            score: office.score.map(|score| format!("{score:.2}")),
            tier: office.tier.as_str(),
            percentile: office.percentile,
            conditional_label: office.conditional_label.map(|label| label.as_str()),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
