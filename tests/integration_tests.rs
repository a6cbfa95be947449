use fittrack::export::{self, ExportFormat};
use fittrack::{default_packages, process_batch, read_package, show_training_info, AppConfig, SensorPackage};
use tempfile::tempdir;

/// Integration tests that run packages through the full pipeline

const EXPECTED_DEFAULT_BATCH: [&str; 3] = [
    "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
    "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
    "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
];

#[test]
fn test_default_batch_messages() {
    let messages: Vec<String> = process_batch(&default_packages())
        .into_iter()
        .map(|result| result.unwrap().get_message())
        .collect();

    assert_eq!(messages, EXPECTED_DEFAULT_BATCH);
}

#[test]
fn test_running_distance() {
    let record = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    let summary = show_training_info(&record);

    assert!((summary.distance - 9.75).abs() < 1e-9);
    assert!((summary.calories - 699.75).abs() < 1e-9);
}

#[test]
fn test_swimming_speed_and_calories() {
    let record = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let summary = show_training_info(&record);

    assert!((summary.speed - 1.0).abs() < 1e-9);
    assert!((summary.calories - 336.0).abs() < 1e-9);
}

#[test]
fn test_walking_distance() {
    let record = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    let summary = show_training_info(&record);

    assert!((summary.distance - 5.85).abs() < 1e-9);
    assert_eq!(summary.training_type, "SportsWalking");
}

#[test]
fn test_reprocessing_is_identical() {
    let packages = default_packages();

    let first: Vec<_> = process_batch(&packages).into_iter().map(Result::unwrap).collect();
    let second: Vec<_> = process_batch(&packages).into_iter().map(Result::unwrap).collect();

    assert_eq!(first, second);
}

#[test]
fn test_configured_batch_exported_to_file() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let output_path = temp_dir.path().join("out").join("summaries.json");

    let mut config = AppConfig::default();
    config.packages = vec![
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
    ];
    config.output.format = ExportFormat::Json;
    config.save_to_file(&config_path).unwrap();

    let loaded = AppConfig::load_from_file(&config_path).unwrap();
    let summaries: Vec<_> = process_batch(&loaded.effective_packages())
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();
    export::write_to(&output_path, &summaries, loaded.output.format).unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    let parsed: Vec<fittrack::WorkoutSummary> = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].training_type, "Running");
    assert_eq!(parsed[1].training_type, "Swimming");
}

#[test]
fn test_text_export_matches_messages() {
    let summaries: Vec<_> = process_batch(&default_packages())
        .into_iter()
        .map(Result::unwrap)
        .collect();

    let rendered = export::render(&summaries, ExportFormat::Text).unwrap();
    assert_eq!(rendered.lines().collect::<Vec<_>>(), EXPECTED_DEFAULT_BATCH);
}
