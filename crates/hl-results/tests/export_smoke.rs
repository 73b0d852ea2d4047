use hl_results::*;

#[test]
fn save_table_and_summary_files() {
    let temp_dir = std::env::temp_dir().join("hl_results_export_test");
    let _ = std::fs::remove_dir_all(&temp_dir);
    std::fs::create_dir_all(&temp_dir).unwrap();

    let mut table = Table::new(["timestamp", "Q_heat_W_m2"]);
    for (i, q) in [Some(12.0), None, Some(30.0), Some(18.0)].into_iter().enumerate() {
        table
            .push_row(vec![Cell::Text(format!("2024-01-01 0{i}:00:00")), q.into()])
            .unwrap();
    }

    let spec = SummarySpec {
        label: "Heating".to_string(),
        area_m2: 200.0,
        unit_count: 4,
        percentiles: vec![98.0, 95.0, 92.5, 90.0, 85.0],
    };
    let outcome = summarize(&table, "Q_heat_W_m2", &spec).unwrap();
    let summary = outcome.summary().expect("three valid values");
    assert_eq!(summary.samples, 3);
    assert_eq!(summary.rows.len(), 5);

    save_table_csv(&table, &temp_dir.join("hourly.csv")).unwrap();
    save_summary_csv(summary, &temp_dir.join("summary.csv")).unwrap();
    save_summary_json(&outcome, &temp_dir.join("summary.json")).unwrap();

    let hourly = std::fs::read_to_string(temp_dir.join("hourly.csv")).unwrap();
    assert_eq!(hourly.lines().count(), 5);
    assert!(hourly.contains("2024-01-01 01:00:00,\n"));

    let json = std::fs::read_to_string(temp_dir.join("summary.json")).unwrap();
    assert!(json.contains("\"Heating\""));

    let _ = std::fs::remove_dir_all(&temp_dir);
}
