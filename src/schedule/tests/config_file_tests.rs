//! Unit tests for loading constraint configuration from disk.

use super::fixtures::{range, time};
use crate::schedule::{
    adapters::config_file::{
        ConfigLoadError, DEFAULT_CONFIG_FILE, load_constraints, open_config_dir, read_config,
    },
    domain::{ConstraintError, ConstraintModel, FinalCheck},
};
use chrono::Weekday;
use rstest::{fixture, rstest};
use tempfile::TempDir;

#[fixture]
fn config_dir() -> TempDir {
    tempfile::tempdir().expect("temporary directory should be created")
}

fn write_config(dir: &TempDir, contents: &str) {
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), contents)
        .expect("configuration file should be written");
}

fn load(dir: &TempDir) -> Result<ConstraintModel, ConfigLoadError> {
    let path = dir.path().to_str().expect("temporary path should be UTF-8");
    let capability = open_config_dir(path)?;
    load_constraints(&capability, DEFAULT_CONFIG_FILE)
}

#[rstest]
fn loads_full_configuration(config_dir: TempDir) {
    write_config(
        &config_dir,
        r#"{
            "workStart": "08:30",
            "workEnd": "16:30",
            "breakIntervals": [
                {"start": "15:00", "end": "15:15"},
                {"start": "12:00", "end": "12:45"}
            ],
            "excludedWeekdays": ["Sun"],
            "maxContinuousMinutes": 90,
            "finalCheck": "minute"
        }"#,
    );

    let model = load(&config_dir).expect("configuration should load");

    assert_eq!(model.work_start(), time("08:30"));
    assert_eq!(model.work_end(), time("16:30"));
    assert_eq!(
        model.breaks(),
        &[range("12:00", "12:45"), range("15:00", "15:15")]
    );
    assert_eq!(model.excluded_weekdays(), &[Weekday::Sun]);
    assert_eq!(model.max_continuous_minutes(), 90);
    assert_eq!(model.final_check(), FinalCheck::Minute);
}

#[rstest]
fn empty_object_yields_defaults(config_dir: TempDir) {
    write_config(&config_dir, "{}");
    let model = load(&config_dir).expect("empty configuration should load");
    assert_eq!(model, ConstraintModel::default());
}

#[rstest]
#[case::indices_from_sunday(r#"[0, 6]"#, vec![Weekday::Sun, Weekday::Sat])]
#[case::mixed_names_and_indices(r#"["Fri", 6, "sunday"]"#, vec![Weekday::Fri, Weekday::Sat, Weekday::Sun])]
#[case::weekday_indices(r#"[1, 3, 5]"#, vec![Weekday::Mon, Weekday::Wed, Weekday::Fri])]
fn loads_excluded_weekdays_as_indices_or_names(
    config_dir: TempDir,
    #[case] weekdays: &str,
    #[case] expected: Vec<Weekday>,
) {
    write_config(&config_dir, &format!(r#"{{"excludedWeekdays": {weekdays}}}"#));
    let model = load(&config_dir).expect("configuration should load");
    assert_eq!(model.excluded_weekdays(), expected.as_slice());
}

#[rstest]
fn read_config_keeps_raw_values(config_dir: TempDir) {
    write_config(&config_dir, r#"{"maxContinuousMinutes": 0}"#);
    let path = config_dir.path().to_str().expect("UTF-8 path");
    let capability = open_config_dir(path).expect("directory should open");

    let config = read_config(&capability, DEFAULT_CONFIG_FILE).expect("raw config should parse");

    assert_eq!(config.max_continuous_minutes, 0);
}

#[rstest]
fn missing_file_is_a_read_error(config_dir: TempDir) {
    let result = load(&config_dir);
    assert!(matches!(
        result,
        Err(ConfigLoadError::Read { ref path, .. }) if path == DEFAULT_CONFIG_FILE
    ));
}

#[rstest]
fn missing_directory_is_a_read_error(config_dir: TempDir) {
    let absent = config_dir.path().join("absent");
    let path = absent.to_str().expect("UTF-8 path");
    assert!(matches!(
        open_config_dir(path),
        Err(ConfigLoadError::Read { .. })
    ));
}

#[rstest]
#[case::not_json("work starts at ten")]
#[case::bad_time(r#"{"workStart": "25:00"}"#)]
#[case::bad_weekday(r#"{"excludedWeekdays": ["Someday"]}"#)]
#[case::weekday_index_out_of_range(r#"{"excludedWeekdays": [7]}"#)]
#[case::negative_weekday_index(r#"{"excludedWeekdays": [-1]}"#)]
fn malformed_file_is_a_parse_error(config_dir: TempDir, #[case] contents: &str) {
    write_config(&config_dir, contents);
    assert!(matches!(load(&config_dir), Err(ConfigLoadError::Parse(_))));
}

#[rstest]
fn inconsistent_configuration_is_invalid(config_dir: TempDir) {
    write_config(
        &config_dir,
        r#"{"workStart": "10:00", "workEnd": "18:00", "breakIntervals": [{"start": "09:00", "end": "10:30"}]}"#,
    );
    assert!(matches!(
        load(&config_dir),
        Err(ConfigLoadError::Invalid(ConstraintError::BreakOutsideWindow { .. }))
    ));
}
