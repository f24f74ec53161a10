/*!
 * Tests for workload aggregation
 */

use anyhow::Result;
use chrono::Duration;
use padshift::pad_parser::parse_str;
use padshift::report::WorkloadReport;

fn pad_with_mixed_casing() -> &'static str {
    "#1
[de] 11:00 +01:00, Adams
First Talk
alice
→ en: Waffle, ironic

#2
[de] 12:00 +00:30, Borg
Second Talk
bob
→ fr: waffle
"
}

/// Test that grouping folds spellings of the same handle together
#[test]
fn test_workloadReport_fromTalks_shouldGroupCaseInsensitive() -> Result<()> {
    let talks = parse_str(pad_with_mixed_casing())?;
    let report = WorkloadReport::from_talks(&talks);

    assert_eq!(report.translator_count(), 2);

    let waffle = report
        .workloads
        .iter()
        .find(|workload| workload.name == "waffle")
        .expect("waffle should be aggregated");
    assert_eq!(waffle.total, Duration::minutes(90));
    assert_eq!(waffle.shifts, 2);

    Ok(())
}

/// Test that workloads come out busiest first
#[test]
fn test_workloadReport_fromTalks_shouldSortBusiestFirst() -> Result<()> {
    let talks = parse_str(pad_with_mixed_casing())?;
    let report = WorkloadReport::from_talks(&talks);

    let names: Vec<&str> = report
        .workloads
        .iter()
        .map(|workload| workload.name.as_str())
        .collect();
    assert_eq!(names, vec!["waffle", "ironic"]);

    Ok(())
}

/// Test per-language shift counts
#[test]
fn test_workloadReport_fromTalks_shouldCountShiftsPerLanguage() -> Result<()> {
    let talks = parse_str(pad_with_mixed_casing())?;
    let report = WorkloadReport::from_talks(&talks);

    assert_eq!(
        report.shifts_by_language,
        vec![("en".to_string(), 2), ("fr".to_string(), 1)]
    );

    Ok(())
}

/// Test the median over an odd translator count
#[test]
fn test_median_withOddCount_shouldTakeTheMiddle() -> Result<()> {
    let talks = parse_str(
        "#1
[de] 11:00 +01:00, Adams
First Talk
alice
→ en: aa

#2
[de] 12:00 +00:30, Borg
Second Talk
bob
→ en: bb

#3
[de] 13:00 +00:15, Clarke
Third Talk
carol
→ en: cc
",
    )?;
    let report = WorkloadReport::from_talks(&talks);

    assert_eq!(report.median_total(), Some(Duration::minutes(30)));

    Ok(())
}

/// Test the median over an even translator count
#[test]
fn test_median_withEvenCount_shouldAverageMiddlePair() -> Result<()> {
    let talks = parse_str(
        "#1
[de] 11:00 +01:00, Adams
First Talk
alice
→ en: aa, bb

#2
[de] 12:00 +00:30, Borg
Second Talk
bob
→ en: bb, cc

#3
[de] 13:00 +00:15, Clarke
Third Talk
carol
→ en: cc, dd
",
    )?;
    let report = WorkloadReport::from_talks(&talks);

    // Totals: bb 1:30, cc 0:45, aa 1:00, dd 0:15 — middle pair 1:00 and 0:45
    assert_eq!(report.translator_count(), 4);
    assert_eq!(
        report.median_total(),
        Some((Duration::minutes(60) + Duration::minutes(45)) / 2)
    );

    Ok(())
}

/// Test that the median of nothing is nothing
#[test]
fn test_median_withoutWorkloads_shouldBeNone() {
    let report = WorkloadReport::from_talks(&[]);
    assert_eq!(report.median_total(), None);
    assert_eq!(report.translator_count(), 0);
}

/// Test that the long-workload threshold is a strict comparison
#[test]
fn test_over_threshold_shouldUseStrictComparison() -> Result<()> {
    let talks = parse_str(
        "#1
[de] 11:00 +06:00, Adams
Long Talk
alice
→ en: exactly

#2
[de] 12:00 +06:30, Borg
Longer Talk
bob
→ en: above
",
    )?;
    let report = WorkloadReport::from_talks(&talks);

    // exactly 6:00 is not "more than six hours"
    assert_eq!(report.over_threshold(Duration::hours(6)), 1);

    Ok(())
}

/// Test manual credit for translators off the roster
#[test]
fn test_off_roster_credit_shouldApplyRateAndQuarterCeil() -> Result<()> {
    let talks = parse_str(
        "#1
[de] 11:00 +00:40, Adams
First Talk
alice
→ en: newbie

#2
[de] 12:00 +00:41, Borg
Second Talk
bob
→ en: helper

#3
[de] 13:00 +01:00, Clarke
Third Talk
carol
→ en: Veteran
",
    )?;
    let report = WorkloadReport::from_talks(&talks);

    // Roster matching is case-insensitive
    let credits = report.off_roster_credit(&["VETERAN".to_string()]);
    let credited: Vec<(&str, i64)> = credits
        .iter()
        .map(|(name, duration)| (name.as_str(), duration.num_minutes()))
        .collect();

    // 41 min × 1.5 = 61.5 min → 75; 40 min × 1.5 = 60 min stays 60
    assert_eq!(credited, vec![("helper", 75), ("newbie", 60)]);

    Ok(())
}

/// Test the rendered report table
#[test]
fn test_workloadReport_display_shouldRenderTotalsAndLanguages() -> Result<()> {
    let talks = parse_str(pad_with_mixed_casing())?;
    let report = WorkloadReport::from_talks(&talks);
    let rendered = format!("{}", report);

    assert!(rendered.contains("waffle"));
    assert!(rendered.contains("1:30"));
    assert!(rendered.contains("(2 shifts)"));
    assert!(rendered.contains("(1 shift)"));
    assert!(rendered.contains("Shifts by language:"));
    assert!(rendered.contains("en (English)"));
    assert!(rendered.contains("fr (French)"));

    Ok(())
}
