/*!
 * Integration tests for the pad processing workflow
 */

use anyhow::Result;
use chrono::Duration;
use padshift::app_config::Config;
use padshift::app_controller::Controller;
use padshift::file_utils::FileManager;
use padshift::report::WorkloadReport;
use crate::common;

/// Test parsing several pad files in argument order
#[test]
fn test_parse_inputs_withMultipleFiles_shouldConcatenateInOrder() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let day1 = common::create_test_file(
        &dir,
        "day1.txt",
        "#1
[de] 11:00 +00:30, Adams
Day One Talk
alice
→ en: waffle
",
    )?;
    let day2 = common::create_test_file(
        &dir,
        "day2.txt",
        "#2
[en] 12:00 +01:00, Borg
Day Two Talk
bob
→ de: ironic
",
    )?;

    let controller = Controller::new_for_test()?;
    let talks = controller.parse_inputs(&[day1, day2])?;

    let titles: Vec<&str> = talks.iter().map(|talk| talk.title.as_str()).collect();
    assert_eq!(titles, vec!["Day One Talk", "Day Two Talk"]);

    Ok(())
}

/// Test that a directory input expands to its .txt exports, sorted
#[test]
fn test_parse_inputs_withDirectory_shouldPickUpTxtExportsSorted() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_file(
        &dir,
        "b.txt",
        "#2
[en] 12:00 +01:00, Borg
Second Talk
bob
",
    )?;
    common::create_test_file(
        &dir,
        "a.txt",
        "#1
[de] 11:00 +00:30, Adams
First Talk
alice
",
    )?;
    // Non-export files in the directory are ignored
    common::create_test_file(&dir, "notes.md", "# not a pad")?;

    let controller = Controller::new_for_test()?;
    let talks = controller.parse_inputs(&[dir.clone()])?;

    let titles: Vec<&str> = talks.iter().map(|talk| talk.title.as_str()).collect();
    assert_eq!(titles, vec!["First Talk", "Second Talk"]);

    Ok(())
}

/// Test that a missing input path is an error
#[test]
fn test_parse_inputs_withMissingPath_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("no-such-export.txt");

    let controller = Controller::new_for_test()?;
    assert!(controller.parse_inputs(&[missing]).is_err());

    Ok(())
}

/// Test that a structurally broken pad fails the whole file
#[test]
fn test_parse_inputs_withBrokenPad_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let broken = common::create_test_file(
        &dir,
        "broken.txt",
        "#1
[de] 11:00 +00:30, Adams
A Talk
alice
→ DE: wer auch immer
",
    )?;

    let controller = Controller::new_for_test()?;
    let error = controller.parse_inputs(&[broken]).unwrap_err();
    assert!(format!("{:#}", error).contains("→ DE: wer auch immer"));

    Ok(())
}

/// Test the full flow from files to an aggregated report
#[test]
fn test_workflow_withSamplePad_shouldAggregateWorkloads() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let pad = common::create_test_pad(&dir, "congress.txt")?;

    let controller = Controller::new_for_test()?;
    let talks = controller.parse_inputs(&[pad])?;
    assert_eq!(talks.len(), 1);

    let report = WorkloadReport::from_talks(&talks);
    assert_eq!(report.translator_count(), 6);
    for workload in &report.workloads {
        assert_eq!(workload.total, Duration::minutes(30));
        assert_eq!(workload.shifts, 1);
    }
    assert_eq!(report.median_total(), Some(Duration::minutes(30)));
    assert_eq!(report.over_threshold(Duration::hours(6)), 0);

    Ok(())
}

/// Test the JSON export end of the run workflow
#[test]
fn test_run_withJsonOutputFile_shouldWriteFlatRecords() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let pad = common::create_test_pad(&dir, "congress.txt")?;
    let output = dir.join("shifts.json");

    let controller = Controller::with_config(Config::default())?;
    controller.run(&[pad], true, Some(&output))?;

    assert!(FileManager::file_exists(&output));

    let json: serde_json::Value = serde_json::from_str(&FileManager::read_to_string(&output)?)?;
    let records = json.as_array().expect("export should be a JSON array");
    assert_eq!(records.len(), 6);
    assert_eq!(records[0]["name"], "waffle");
    assert_eq!(records[0]["language"], "en");
    assert_eq!(records[0]["duration"], 30);
    assert_eq!(records[0]["talk"]["title"], "Opening Event");

    Ok(())
}

/// Test file utility round trips used by the workflow
#[test]
fn test_fileManager_roundTrip_shouldPreserveContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("deep").join("pads.txt");

    FileManager::write_to_file(&nested, common::sample_pad())?;
    assert!(FileManager::file_exists(&nested));
    assert_eq!(FileManager::read_to_string(&nested)?, common::sample_pad());

    let found = FileManager::find_files(temp_dir.path(), "txt")?;
    assert_eq!(found, vec![nested]);

    Ok(())
}
