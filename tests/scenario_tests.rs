use approx::assert_abs_diff_eq;
use line_tool::Scenario;

const STRAIGHT_SCENARIO: &str = r#"
terrain_height = 2.5

[options]
mode = "Straight"
spacing = 10.0

[object]
mesh_extents = [{ min = -1.0, max = 1.0 }]

[[frames]]
cursor = [0.0, 0.0, 0.0]
apply = true

[[frames]]
cursor = [60.0, 0.0, 0.0]

[[frames]]
cursor = [100.0, 0.0, 0.0]
apply = true
"#;

#[test]
fn test_straight_zero_to_hundred() {
    let scenario = Scenario::from_toml_str(STRAIGHT_SCENARIO).expect("Szenario gültig");
    let report = scenario.run();

    assert_eq!(report.frames, 3);
    assert_eq!(report.batches, vec![10]);
    for (i, placement) in report.placements.iter().enumerate() {
        assert_abs_diff_eq!(placement.position.x, i as f32 * 10.0, epsilon = 1e-4);
        assert_abs_diff_eq!(placement.position.y, 2.5, epsilon = 1e-6);
        assert!(placement.tree.is_none());
    }
}

#[test]
fn test_curve_with_keep_building() {
    let content = r#"
tree_state = "Elderly"

[options]
mode = "SimpleCurve"
spacing = 5.0

[object]
mesh_extents = [{ min = -0.5, max = 0.5 }]
is_tree = true

[[frames]]
cursor = [0.0, 0.0, 0.0]
apply = true

[[frames]]
cursor = [0.0, 0.0, 50.0]
apply = true

[[frames]]
cursor = [50.0, 0.0, 50.0]
keep_building = true

[[frames]]
cursor = [80.0, 0.0, 70.0]
apply = true

[[frames]]
cursor = [120.0, 0.0, 20.0]
apply = true
"#;
    let scenario = Scenario::from_toml_str(content).expect("Szenario gültig");
    assert!(scenario.object.is_tree);
    let report = scenario.run();

    assert_eq!(report.batches.len(), 2);
    assert!(report
        .placements
        .iter()
        .all(|p| p.tree.map(|t| t.state) == Some(line_tool::TreeState::Elderly)));
}

#[test]
fn test_invalid_scenario() {
    assert!(Scenario::from_toml_str("frames = 3").is_err());
}

#[test]
fn test_empty_scenario_without_placements() {
    let scenario = Scenario::from_toml_str("").expect("leeres Szenario gültig");
    let report = scenario.run();
    assert_eq!(report.frames, 0);
    assert!(report.placements.is_empty());
}

#[test]
fn test_report_as_json() {
    let scenario = Scenario::from_toml_str(STRAIGHT_SCENARIO).expect("Szenario gültig");
    let json = serde_json::to_value(scenario.run()).expect("JSON");
    assert_eq!(json["placements"].as_array().map(Vec::len), Some(10));
}
