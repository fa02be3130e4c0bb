//! Office tiering: rolling referral windows, weighted score, quartile tiers.
//!
//! Pure and deterministic. `now` is always supplied by the caller.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::error::ScoringError;
use crate::models::{ConditionalLabel, MonthlyReferral, Office, OfficeMetrics, Tier, TierSummary};
use crate::month::YearMonth;

/// MSLR reported for offices that never sent a referral.
pub const NEVER_REFERRED: u32 = 999;

/// Scores are fixed to this many parts per unit so that equal blends compare equal.
const SCORE_SCALE: f64 = 1_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPolicy {
    pub l12_weight: f64,
    pub r3_weight: f64,
    pub long_window_months: u32,
    pub short_window_months: u32,
    /// Offices whose MSLR reaches this are Dormant.
    pub dormant_after_months: u32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            l12_weight: 0.6,
            r3_weight: 0.4,
            long_window_months: 12,
            short_window_months: 3,
            dormant_after_months: 6,
        }
    }
}

impl ScoringPolicy {
    pub fn score(&self, l12: u64, r3: u64) -> f64 {
        let raw = self.l12_weight * l12 as f64 + self.r3_weight * r3 as f64;
        score_key(raw) as f64 / SCORE_SCALE
    }

    fn validate(&self) -> Result<(), ScoringError> {
        if self.short_window_months == 0 || self.short_window_months > self.long_window_months {
            return Err(ScoringError::malformed(format!(
                "short window of {} months must be between 1 and the long window of {} months",
                self.short_window_months, self.long_window_months
            )));
        }
        if !self.l12_weight.is_finite() || !self.r3_weight.is_finite() {
            return Err(ScoringError::malformed("score weights must be finite"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Aggregate {
    total: u64,
    l12: u64,
    r3: u64,
    last_referral: Option<YearMonth>,
}

pub fn compute_office_metrics(
    referrals: &[MonthlyReferral],
    catalog: &[Office],
    now: YearMonth,
) -> Result<Vec<OfficeMetrics>, ScoringError> {
    compute_office_metrics_with_policy(referrals, catalog, now, &ScoringPolicy::default())
}

/// Produces one record per catalog office, in catalog order.
pub fn compute_office_metrics_with_policy(
    referrals: &[MonthlyReferral],
    catalog: &[Office],
    now: YearMonth,
    policy: &ScoringPolicy,
) -> Result<Vec<OfficeMetrics>, ScoringError> {
    policy.validate()?;
    let aggregates = aggregate(referrals, catalog, now, policy)?;

    let mut metrics: Vec<OfficeMetrics> = catalog
        .iter()
        .zip(aggregates)
        .map(|(office, aggregate)| {
            let mslr = months_since_last_referral(aggregate.last_referral, now);
            let tier = if aggregate.total > 0 && mslr >= policy.dormant_after_months {
                Tier::Dormant
            } else {
                Tier::Cold
            };
            OfficeMetrics {
                office_id: office.office_id.clone(),
                total_referrals: aggregate.total,
                l12: aggregate.l12,
                r3: aggregate.r3,
                mslr,
                score: None,
                tier,
                percentile: None,
                conditional_label: None,
            }
        })
        .collect();

    let active: Vec<usize> = metrics
        .iter()
        .enumerate()
        .filter(|(_, m)| m.total_referrals > 0 && m.mslr < policy.dormant_after_months)
        .map(|(position, _)| position)
        .collect();

    for &position in &active {
        let office = &mut metrics[position];
        office.score = Some(policy.score(office.l12, office.r3));
    }

    assign_tiers(&mut metrics, &active);
    assign_conditional_labels(&mut metrics, &active);

    tracing::debug!(
        offices = metrics.len(),
        active = active.len(),
        now = %now,
        "computed office metrics"
    );

    Ok(metrics)
}

fn aggregate(
    referrals: &[MonthlyReferral],
    catalog: &[Office],
    now: YearMonth,
    policy: &ScoringPolicy,
) -> Result<Vec<Aggregate>, ScoringError> {
    let mut positions: HashMap<&str, usize> = HashMap::with_capacity(catalog.len());
    for (position, office) in catalog.iter().enumerate() {
        if positions.insert(office.office_id.as_str(), position).is_some() {
            return Err(ScoringError::malformed(format!(
                "office {} appears more than once in the catalog",
                office.office_id
            )));
        }
    }

    let long_window = i64::from(policy.long_window_months);
    let short_window = i64::from(policy.short_window_months);
    let mut aggregates = vec![Aggregate::default(); catalog.len()];
    let mut seen: HashSet<(&str, YearMonth)> = HashSet::with_capacity(referrals.len());

    for referral in referrals {
        let month = parse_month(&referral.year_month)?;
        let count = validate_count(&referral.office_id, &referral.year_month, referral.patient_count)?;

        let position = *positions.get(referral.office_id.as_str()).ok_or_else(|| {
            ScoringError::malformed(format!(
                "referral for {} names office {} which is not in the catalog",
                referral.year_month, referral.office_id
            ))
        })?;

        if !seen.insert((referral.office_id.as_str(), month)) {
            return Err(ScoringError::malformed(format!(
                "duplicate referral row for office {} in {}",
                referral.office_id, month
            )));
        }

        let entry = &mut aggregates[position];
        let offset = now.months_since(month);
        entry.total += count;
        if (0..long_window).contains(&offset) {
            entry.l12 += count;
        }
        if (0..short_window).contains(&offset) {
            entry.r3 += count;
        }
        if count > 0 && entry.last_referral.map_or(true, |last| month > last) {
            entry.last_referral = Some(month);
        }
    }

    Ok(aggregates)
}

/// Parses a stored month value, rejecting anything that is not `YYYY-MM`.
pub fn parse_month(raw: &str) -> Result<YearMonth, ScoringError> {
    raw.parse()
}

/// Referral counts must be non-negative.
pub fn validate_count(office_id: &str, year_month: &str, count: i64) -> Result<u64, ScoringError> {
    u64::try_from(count).map_err(|_| ScoringError::InvalidReferralCount {
        office_id: office_id.to_string(),
        year_month: year_month.to_string(),
        count,
    })
}

// Whole months between the end of the last referral month and the start of
// `now`'s month. A referral this month or last month gives 0.
fn months_since_last_referral(last_referral: Option<YearMonth>, now: YearMonth) -> u32 {
    match last_referral {
        None => NEVER_REFERRED,
        Some(last) => {
            let gap = (now.months_since(last) - 1).max(0);
            u32::try_from(gap).map_or(NEVER_REFERRED, |gap| gap.min(NEVER_REFERRED))
        }
    }
}

fn score_key(score: f64) -> i64 {
    (score * SCORE_SCALE).round() as i64
}

fn rank_cmp<K: Ord>(
    left: &OfficeMetrics,
    right: &OfficeMetrics,
    key: impl Fn(&OfficeMetrics) -> K,
) -> Ordering {
    key(right)
        .cmp(&key(left))
        .then_with(|| left.mslr.cmp(&right.mslr))
        .then_with(|| left.office_id.cmp(&right.office_id))
}

/// Ranking order for active offices: score descending, then MSLR ascending,
/// then office id.
pub fn compare_by_score(left: &OfficeMetrics, right: &OfficeMetrics) -> Ordering {
    rank_cmp(left, right, |m| m.score.map_or(0, score_key))
}

/// Active offices ordered best first by `compare`.
fn rank_order(
    metrics: &[OfficeMetrics],
    active: &[usize],
    compare: impl Fn(&OfficeMetrics, &OfficeMetrics) -> Ordering,
) -> Vec<usize> {
    let mut order = active.to_vec();
    order.sort_by(|&a, &b| compare(&metrics[a], &metrics[b]));
    order
}

fn ceil_share(count: usize, numerator: usize, denominator: usize) -> usize {
    (count * numerator).div_ceil(denominator)
}

fn assign_tiers(metrics: &mut [OfficeMetrics], active: &[usize]) {
    let total = active.len();
    if total == 0 {
        return;
    }

    let order = rank_order(metrics, active, compare_by_score);
    let vip_cut = ceil_share(total, 1, 4);
    let warm_cut = ceil_share(total, 1, 2);

    for (rank, position) in order.into_iter().enumerate() {
        let office = &mut metrics[position];
        office.tier = if rank < vip_cut {
            Tier::Vip
        } else if rank < warm_cut {
            Tier::Warm
        } else {
            Tier::Cold
        };
        let share = (total - rank) as f64 / total as f64;
        office.percentile = Some((share * 100.0).round() as u8);
    }
}

fn assign_conditional_labels(metrics: &mut [OfficeMetrics], active: &[usize]) {
    let total = active.len();
    if total == 0 {
        return;
    }

    let order = rank_order(metrics, active, |a, b| rank_cmp(a, b, |m| m.l12));
    let top_half = ceil_share(total, 1, 2);

    for (rank, position) in order.into_iter().enumerate() {
        let office = &mut metrics[position];
        office.conditional_label = if rank < top_half {
            (office.l12 > 0 && office.r3 == 0).then_some(ConditionalLabel::AtRisk)
        } else {
            (office.r3 > 0 && office.r3 * 4 > office.l12).then_some(ConditionalLabel::Emerging)
        };
    }
}

pub fn summarize_tiers(metrics: &[OfficeMetrics]) -> TierSummary {
    let mut summary = TierSummary::default();
    for office in metrics {
        match office.tier {
            Tier::Vip => summary.vip += 1,
            Tier::Warm => summary.warm += 1,
            Tier::Cold => summary.cold += 1,
            Tier::Dormant => summary.dormant += 1,
        }
        match office.conditional_label {
            Some(ConditionalLabel::AtRisk) => summary.at_risk += 1,
            Some(ConditionalLabel::Emerging) => summary.emerging += 1,
            None => {}
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn office(id: &str) -> Office {
        Office {
            office_id: id.to_string(),
            name: format!("{id} Dental"),
        }
    }

    fn referral(id: &str, year_month: &str, count: i64) -> MonthlyReferral {
        MonthlyReferral {
            office_id: id.to_string(),
            year_month: year_month.to_string(),
            patient_count: count,
        }
    }

    fn june_2024() -> YearMonth {
        "2024-06".parse().unwrap()
    }

    fn find<'a>(metrics: &'a [OfficeMetrics], id: &str) -> &'a OfficeMetrics {
        metrics.iter().find(|m| m.office_id == id).unwrap()
    }

    fn mixed_fixture() -> (Vec<Office>, Vec<MonthlyReferral>) {
        let catalog = vec![
            office("northside"),
            office("harbor"),
            office("elm"),
            office("quiet"),
            office("lapsed"),
            office("newcomer"),
        ];
        let referrals = vec![
            referral("northside", "2024-06", 12),
            referral("northside", "2024-04", 9),
            referral("northside", "2023-12", 14),
            referral("northside", "2022-05", 30),
            referral("harbor", "2024-05", 4),
            referral("harbor", "2023-09", 8),
            referral("elm", "2024-02", 20),
            referral("lapsed", "2023-08", 40),
            referral("newcomer", "2024-06", 3),
            referral("quiet", "2024-03", 0),
        ];
        (catalog, referrals)
    }

    #[test]
    fn office_without_history_is_cold_and_unranked() {
        let metrics = compute_office_metrics(&[], &[office("solo")], june_2024()).unwrap();
        assert_eq!(
            metrics,
            vec![OfficeMetrics {
                office_id: "solo".to_string(),
                total_referrals: 0,
                l12: 0,
                r3: 0,
                mslr: NEVER_REFERRED,
                score: None,
                tier: Tier::Cold,
                percentile: None,
                conditional_label: None,
            }]
        );
    }

    #[test]
    fn last_month_referral_counts_in_both_windows() {
        let metrics = compute_office_metrics(
            &[referral("bay", "2024-05", 10)],
            &[office("bay")],
            june_2024(),
        )
        .unwrap();
        let bay = &metrics[0];
        assert_eq!(bay.l12, 10);
        assert_eq!(bay.r3, 10);
        assert_eq!(bay.mslr, 0);
        assert!(bay.is_active());
        assert_eq!(bay.tier, Tier::Vip);
        assert_eq!(bay.percentile, Some(100));
    }

    #[test]
    fn office_quiet_for_eight_months_is_dormant() {
        let metrics = compute_office_metrics(
            &[
                referral("old", "2023-10", 50),
                referral("old", "2022-01", 200),
                referral("fresh", "2024-06", 1),
            ],
            &[office("old"), office("fresh")],
            june_2024(),
        )
        .unwrap();
        let old = find(&metrics, "old");
        assert_eq!(old.mslr, 7);
        assert_eq!(old.tier, Tier::Dormant);
        assert_eq!(old.percentile, None);
        assert_eq!(old.score, None);
        assert_eq!(old.total_referrals, 250);
        assert_eq!(old.l12, 50);
        assert_eq!(old.r3, 0);
    }

    #[test]
    fn dormancy_starts_at_six_whole_months() {
        let metrics = compute_office_metrics(
            &[referral("edge", "2023-11", 5), referral("inside", "2023-12", 5)],
            &[office("edge"), office("inside")],
            june_2024(),
        )
        .unwrap();
        assert_eq!(find(&metrics, "edge").mslr, 6);
        assert_eq!(find(&metrics, "edge").tier, Tier::Dormant);
        assert_eq!(find(&metrics, "inside").mslr, 5);
        assert!(find(&metrics, "inside").is_active());
    }

    #[test]
    fn score_ties_go_to_the_more_recent_office() {
        let policy = ScoringPolicy {
            l12_weight: 1.0,
            r3_weight: 0.0,
            ..ScoringPolicy::default()
        };
        // "alpha" would win an id tie-break, so MSLR must decide.
        let metrics = compute_office_metrics_with_policy(
            &[referral("zeta", "2024-04", 100), referral("alpha", "2024-02", 100)],
            &[office("alpha"), office("zeta")],
            june_2024(),
            &policy,
        )
        .unwrap();
        let zeta = find(&metrics, "zeta");
        let alpha = find(&metrics, "alpha");
        assert_eq!(zeta.score, Some(100.0));
        assert_eq!(alpha.score, Some(100.0));
        assert_eq!(zeta.mslr, 1);
        assert_eq!(alpha.mslr, 3);
        assert_eq!(zeta.tier, Tier::Vip);
        assert_eq!(zeta.percentile, Some(100));
        assert_eq!(alpha.tier, Tier::Cold);
        assert_eq!(alpha.percentile, Some(50));
    }

    #[test]
    fn equal_blended_scores_tie_break_on_recency_under_default_weights() {
        // 0.6 * 14 and 0.6 * 12 + 0.4 * 3 differ in the last bit as raw floats.
        let metrics = compute_office_metrics(
            &[
                referral("far", "2024-02", 14),
                referral("near", "2024-06", 3),
                referral("near", "2024-01", 9),
            ],
            &[office("far"), office("near")],
            june_2024(),
        )
        .unwrap();
        let far = find(&metrics, "far");
        let near = find(&metrics, "near");
        assert_eq!((near.l12, near.r3, near.mslr), (12, 3, 0));
        assert_eq!((far.l12, far.r3, far.mslr), (14, 0, 3));
        assert_eq!(near.score, far.score);
        assert_eq!(near.score, Some(8.4));
        assert_eq!(near.tier, Tier::Vip);
        assert_eq!(near.percentile, Some(100));
        assert_eq!(far.tier, Tier::Cold);
        assert_eq!(far.percentile, Some(50));
    }

    #[test]
    fn four_active_offices_split_one_vip_one_warm_two_cold() {
        let catalog = vec![office("a"), office("b"), office("c"), office("d")];
        let referrals = vec![
            referral("c", "2024-06", 20),
            referral("a", "2024-06", 40),
            referral("d", "2024-06", 10),
            referral("b", "2024-06", 30),
        ];
        let metrics = compute_office_metrics(&referrals, &catalog, june_2024()).unwrap();
        let tiers: Vec<Tier> = metrics.iter().map(|m| m.tier).collect();
        assert_eq!(tiers, vec![Tier::Vip, Tier::Warm, Tier::Cold, Tier::Cold]);
        let percentiles: Vec<Option<u8>> = metrics.iter().map(|m| m.percentile).collect();
        assert_eq!(percentiles, vec![Some(100), Some(75), Some(50), Some(25)]);
    }

    #[test]
    fn quartile_boundaries_hold_for_small_and_larger_sets() {
        let expected = [(1, 1, 0), (2, 1, 0), (3, 1, 1), (4, 1, 1), (5, 2, 1), (8, 2, 2), (9, 3, 2)];
        for (size, vip, warm) in expected {
            let catalog: Vec<Office> = (0..size).map(|i| office(&format!("o{i}"))).collect();
            let referrals: Vec<MonthlyReferral> = (0..size)
                .map(|i| referral(&format!("o{i}"), "2024-06", (i + 1) as i64))
                .collect();
            let metrics = compute_office_metrics(&referrals, &catalog, june_2024()).unwrap();
            let summary = summarize_tiers(&metrics);
            assert_eq!(summary.vip, vip, "VIP count for N={size}");
            assert_eq!(summary.warm, warm, "Warm count for N={size}");
            assert_eq!(summary.cold, size - vip - warm, "Cold count for N={size}");
        }
    }

    #[test]
    fn strong_office_gone_quiet_is_at_risk_and_small_riser_is_emerging() {
        let metrics = compute_office_metrics(
            &[referral("steady", "2024-02", 20), referral("small", "2024-06", 2)],
            &[office("steady"), office("small")],
            june_2024(),
        )
        .unwrap();
        let steady = find(&metrics, "steady");
        assert_eq!(steady.l12, 20);
        assert_eq!(steady.r3, 0);
        assert_eq!(steady.conditional_label, Some(ConditionalLabel::AtRisk));
        assert_eq!(find(&metrics, "small").conditional_label, Some(ConditionalLabel::Emerging));
    }

    #[test]
    fn bottom_half_needs_disproportionate_uptick_to_emerge() {
        let metrics = compute_office_metrics(
            &[
                referral("big", "2024-06", 30),
                referral("big", "2024-01", 70),
                referral("flat", "2024-06", 10),
                referral("flat", "2023-12", 30),
            ],
            &[office("big"), office("flat")],
            june_2024(),
        )
        .unwrap();
        let flat = find(&metrics, "flat");
        assert_eq!((flat.l12, flat.r3), (40, 10));
        assert_eq!(flat.conditional_label, None);
        assert_eq!(find(&metrics, "big").conditional_label, None);
    }

    #[test]
    fn zero_count_rows_do_not_make_history() {
        let metrics = compute_office_metrics(
            &[referral("empty", "2024-05", 0), referral("empty", "2024-04", 0)],
            &[office("empty")],
            june_2024(),
        )
        .unwrap();
        assert_eq!(metrics[0].mslr, NEVER_REFERRED);
        assert_eq!(metrics[0].tier, Tier::Cold);
        assert_eq!(metrics[0].score, None);
    }

    #[test]
    fn months_after_now_only_count_towards_total() {
        let metrics = compute_office_metrics(
            &[referral("ahead", "2024-08", 6), referral("ahead", "2024-06", 2)],
            &[office("ahead")],
            june_2024(),
        )
        .unwrap();
        let ahead = &metrics[0];
        assert_eq!(ahead.total_referrals, 8);
        assert_eq!(ahead.l12, 2);
        assert_eq!(ahead.r3, 2);
        assert_eq!(ahead.mslr, 0);
    }

    #[test]
    fn windows_cross_year_boundaries() {
        let now: YearMonth = "2024-02".parse().unwrap();
        let metrics = compute_office_metrics(
            &[
                referral("x", "2023-12", 5),
                referral("x", "2023-03", 7),
                referral("x", "2023-02", 11),
            ],
            &[office("x")],
            now,
        )
        .unwrap();
        assert_eq!(metrics[0].r3, 5);
        assert_eq!(metrics[0].l12, 12);
        assert_eq!(metrics[0].total_referrals, 23);
        assert_eq!(metrics[0].mslr, 1);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let (catalog, referrals) = mixed_fixture();
        let first = compute_office_metrics(&referrals, &catalog, june_2024()).unwrap();
        let second = compute_office_metrics(&referrals, &catalog, june_2024()).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn input_order_does_not_change_results() {
        let (catalog, mut referrals) = mixed_fixture();
        let forward = compute_office_metrics(&referrals, &catalog, june_2024()).unwrap();
        referrals.reverse();
        let reversed = compute_office_metrics(&referrals, &catalog, june_2024()).unwrap();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn every_office_gets_exactly_one_record_in_catalog_order() {
        let (catalog, referrals) = mixed_fixture();
        let metrics = compute_office_metrics(&referrals, &catalog, june_2024()).unwrap();
        let ids: Vec<&str> = metrics.iter().map(|m| m.office_id.as_str()).collect();
        let expected: Vec<&str> = catalog.iter().map(|o| o.office_id.as_str()).collect();
        assert_eq!(ids, expected);
        assert_eq!(summarize_tiers(&metrics).total(), catalog.len());
    }

    #[test]
    fn windows_nest_and_optional_fields_track_activity() {
        let (catalog, referrals) = mixed_fixture();
        let metrics = compute_office_metrics(&referrals, &catalog, june_2024()).unwrap();
        for office in &metrics {
            assert!(office.r3 <= office.l12, "{}", office.office_id);
            assert!(office.l12 <= office.total_referrals, "{}", office.office_id);
            assert_eq!(office.score.is_some(), office.percentile.is_some());
            if !office.is_active() {
                assert_eq!(office.conditional_label, None);
                assert!(matches!(office.tier, Tier::Cold | Tier::Dormant));
            }
        }
        assert_eq!(find(&metrics, "lapsed").tier, Tier::Dormant);
        assert_eq!(find(&metrics, "quiet").tier, Tier::Cold);
        assert!(!find(&metrics, "quiet").is_active());
    }

    #[test]
    fn higher_score_never_has_lower_percentile() {
        let (catalog, referrals) = mixed_fixture();
        let metrics = compute_office_metrics(&referrals, &catalog, june_2024()).unwrap();
        let active: Vec<&OfficeMetrics> = metrics.iter().filter(|m| m.is_active()).collect();
        assert_eq!(active.len(), 4);
        for a in &active {
            for b in &active {
                if a.score > b.score {
                    assert!(a.percentile >= b.percentile, "{} vs {}", a.office_id, b.office_id);
                }
            }
        }
    }

    #[test]
    fn malformed_month_is_rejected() {
        let err = compute_office_metrics(
            &[referral("a", "2024-6", 1)],
            &[office("a")],
            june_2024(),
        )
        .unwrap_err();
        assert!(matches!(err, ScoringError::MalformedInput(_)));
    }

    #[test]
    fn negative_count_is_rejected() {
        let err = compute_office_metrics(
            &[referral("a", "2024-05", -3)],
            &[office("a")],
            june_2024(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ScoringError::InvalidReferralCount {
                office_id: "a".to_string(),
                year_month: "2024-05".to_string(),
                count: -3,
            }
        );
    }

    #[test]
    fn duplicate_office_month_is_rejected() {
        let err = compute_office_metrics(
            &[referral("a", "2024-05", 1), referral("a", "2024-05", 2)],
            &[office("a")],
            june_2024(),
        )
        .unwrap_err();
        assert!(matches!(err, ScoringError::MalformedInput(message) if message.contains("duplicate")));
    }

    #[test]
    fn unknown_and_repeated_offices_are_rejected() {
        let unknown = compute_office_metrics(
            &[referral("ghost", "2024-05", 1)],
            &[office("a")],
            june_2024(),
        )
        .unwrap_err();
        assert!(matches!(unknown, ScoringError::MalformedInput(_)));

        let repeated =
            compute_office_metrics(&[], &[office("a"), office("a")], june_2024()).unwrap_err();
        assert!(matches!(repeated, ScoringError::MalformedInput(_)));
    }

    #[test]
    fn inverted_windows_are_rejected() {
        let policy = ScoringPolicy {
            short_window_months: 13,
            ..ScoringPolicy::default()
        };
        let err = compute_office_metrics_with_policy(&[], &[office("a")], june_2024(), &policy)
            .unwrap_err();
        assert!(matches!(err, ScoringError::MalformedInput(_)));
    }

    #[test]
    fn empty_catalog_yields_nothing() {
        let metrics = compute_office_metrics(&[], &[], june_2024()).unwrap();
        assert!(metrics.is_empty());
    }
}
