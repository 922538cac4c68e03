use approx::assert_abs_diff_eq;
use glam::Vec3;
use line_tool::{
    Bounds1, DragPhase, FlatTerrain, FrameInput, LineMode, LineModeTool, LineToolController,
    PreviewUpdate, SelectedObject, SpacingMode, TreeState,
};

fn controller_with(footprint: Bounds1) -> LineToolController {
    let mut controller = LineToolController::new(Box::new(FlatTerrain::new(0.0)));
    controller.activate();
    controller.select_object(SelectedObject::new(footprint, false));
    controller
}

fn preview_len(preview: &PreviewUpdate) -> Option<usize> {
    match preview {
        PreviewUpdate::Replace(items) => Some(items.len()),
        _ => None,
    }
}

#[test]
fn test_straight_place_and_reset() {
    let mut controller = controller_with(Bounds1::new(-0.5, 0.5));
    controller.set_spacing(10.0);

    let output = controller.update(&FrameInput::click(Vec3::ZERO));
    assert!(output.placed.is_empty());
    assert!(controller.active_mode().has_start());

    let hover = controller.update(&FrameInput::hover(Vec3::new(100.0, 0.0, 0.0)));
    assert_eq!(preview_len(&hover.preview), Some(10));
    assert_eq!(hover.overlay.dashed_lines.len(), 1);

    let placed = controller.update(&FrameInput::click(Vec3::new(100.0, 0.0, 0.0)));
    assert_eq!(placed.placed.len(), 10);
    assert_eq!(placed.preview, PreviewUpdate::Clear);
    for (i, item) in placed.placed.iter().enumerate() {
        assert_abs_diff_eq!(item.position.x, i as f32 * 10.0, epsilon = 1e-4);
    }

    // Ohne Weiterbauen wird der Start verworfen
    assert!(!controller.active_mode().has_start());
    let next = controller.update(&FrameInput::hover(Vec3::new(20.0, 0.0, 0.0)));
    assert!(next.cursor.is_some());
}

#[test]
fn test_keep_building_starts_at_end() {
    let mut controller = controller_with(Bounds1::new(-0.5, 0.5));
    controller.set_spacing(10.0);

    controller.update(&FrameInput::click(Vec3::ZERO));
    let output = controller.update(&FrameInput::keep_building(Vec3::new(50.0, 0.0, 0.0)));
    assert_eq!(output.placed.len(), 5);

    let mode = controller.active_mode();
    assert!(mode.has_start());
    assert_eq!(mode.base().start_pos, Vec3::new(50.0, 0.0, 0.0));

    let hover = controller.update(&FrameInput::hover(Vec3::new(50.0, 0.0, 30.0)));
    assert_eq!(preview_len(&hover.preview), Some(3));
}

#[test]
fn test_cancel_drops_last_point() {
    let mut controller = controller_with(Bounds1::new(-0.5, 0.5));
    controller.set_mode(LineMode::SimpleCurve);

    controller.update(&FrameInput::click(Vec3::ZERO));
    controller.update(&FrameInput::click(Vec3::new(0.0, 0.0, 50.0)));
    assert!(controller.active_mode().has_all_points());

    let output = controller.update(&FrameInput::cancel(Vec3::new(10.0, 0.0, 10.0)));
    assert_eq!(output.preview, PreviewUpdate::Clear);
    assert!(controller.active_mode().has_start());
    assert!(!controller.active_mode().has_all_points());

    controller.update(&FrameInput::cancel(Vec3::new(10.0, 0.0, 10.0)));
    assert!(!controller.active_mode().has_start());
}

#[test]
fn test_curve_needs_three_clicks() {
    let mut controller = controller_with(Bounds1::new(-0.5, 0.5));
    controller.set_mode(LineMode::SimpleCurve);
    controller.set_spacing(5.0);

    assert!(controller.update(&FrameInput::click(Vec3::ZERO)).placed.is_empty());
    assert!(controller
        .update(&FrameInput::click(Vec3::new(0.0, 0.0, 100.0)))
        .placed
        .is_empty());

    let hover = controller.update(&FrameInput::hover(Vec3::new(100.0, 0.0, 100.0)));
    assert!(hover.overlay.angle.is_some());
    assert_eq!(hover.point_overlays.len(), 3);

    let placed = controller.update(&FrameInput::click(Vec3::new(100.0, 0.0, 100.0)));
    assert!(placed.placed.len() > 20);
}

#[test]
fn test_mode_switch_keeps_start() {
    let mut controller = controller_with(Bounds1::new(-0.5, 0.5));
    controller.update(&FrameInput::click(Vec3::new(5.0, 0.0, 5.0)));

    controller.set_mode(LineMode::Circle);
    assert_eq!(controller.mode(), LineMode::Circle);
    assert!(controller.active_mode().has_start());
    assert_eq!(
        controller.active_mode().base().start_pos,
        Vec3::new(5.0, 0.0, 5.0)
    );

    let hover = controller.update(&FrameInput::hover(Vec3::new(25.0, 0.0, 5.0)));
    assert!(preview_len(&hover.preview).is_some_and(|n| n > 0));
}

#[test]
fn test_circle_keeps_center_when_building_on() {
    let mut controller = controller_with(Bounds1::new(-0.5, 0.5));
    controller.set_mode(LineMode::Circle);
    controller.set_spacing(10.0);

    controller.update(&FrameInput::click(Vec3::ZERO));
    let first = controller.update(&FrameInput::keep_building(Vec3::new(10.0, 0.0, 0.0)));
    assert_eq!(first.placed.len(), 6);
    assert_eq!(controller.active_mode().base().start_pos, Vec3::ZERO);
}

#[test]
fn test_fixed_preview_ignores_cursor() {
    let mut controller = controller_with(Bounds1::new(-0.5, 0.5));
    controller.set_spacing(10.0);
    controller.update(&FrameInput::click(Vec3::ZERO));
    controller.update(&FrameInput::fix_preview(Vec3::new(40.0, 0.0, 0.0)));
    assert!(controller.is_preview_fixed());

    let hover = controller.update(&FrameInput::hover(Vec3::new(90.0, 0.0, 0.0)));
    assert_eq!(hover.preview, PreviewUpdate::Keep);
    assert_eq!(controller.points().len(), 4);

    // Klick platziert an der eingefrorenen Position
    let placed = controller.update(&FrameInput::click(Vec3::new(90.0, 0.0, 0.0)));
    assert_eq!(placed.placed.len(), 4);
    assert!(!controller.is_preview_fixed());
}

#[test]
fn test_fix_preview_requires_all_points() {
    let mut controller = controller_with(Bounds1::new(-0.5, 0.5));
    controller.update(&FrameInput::fix_preview(Vec3::new(40.0, 0.0, 0.0)));
    assert!(!controller.is_preview_fixed());
}

#[test]
fn test_drag_moves_start() {
    let mut controller = controller_with(Bounds1::new(-0.5, 0.5));
    controller.set_spacing(10.0);
    controller.update(&FrameInput::click(Vec3::ZERO));
    controller.update(&FrameInput::hover(Vec3::new(50.0, 0.0, 0.0)));

    controller.update(&FrameInput::drag(Vec3::new(1.0, 0.0, 0.0), DragPhase::Begin));
    controller.update(&FrameInput::drag(Vec3::new(20.0, 0.0, 0.0), DragPhase::Continue));
    controller.update(&FrameInput::drag(Vec3::new(20.0, 0.0, 0.0), DragPhase::End));
    assert_eq!(
        controller.active_mode().base().start_pos,
        Vec3::new(20.0, 0.0, 0.0)
    );

    let hover = controller.update(&FrameInput::hover(Vec3::new(50.0, 0.0, 0.0)));
    assert_eq!(preview_len(&hover.preview), Some(3));
}

#[test]
fn test_fence_mode_uses_object_length() {
    let mut controller = controller_with(Bounds1::new(-2.0, 2.0));
    controller.set_fence_mode(true);
    assert_abs_diff_eq!(controller.effective_spacing(), 4.0, epsilon = 1e-6);

    controller.update(&FrameInput::click(Vec3::ZERO));
    let placed = controller.update(&FrameInput::click(Vec3::new(20.0, 0.0, 0.0)));
    let xs: Vec<f32> = placed.placed.iter().map(|p| p.position.x).collect();
    assert_eq!(xs.len(), 5);
    assert_abs_diff_eq!(xs[0], 2.0, epsilon = 1e-4);
    assert_abs_diff_eq!(xs[4], 18.0, epsilon = 1e-4);
}

#[test]
fn test_spacing_at_least_object_length() {
    let mut controller = controller_with(Bounds1::new(-3.0, 1.0));
    controller.set_spacing(1.0);
    assert_abs_diff_eq!(controller.settings().spacing(), 3.1, epsilon = 1e-4);
    controller.spacing_up();
    assert_abs_diff_eq!(controller.settings().spacing(), 4.1, epsilon = 1e-4);
    controller.spacing_down();
    controller.spacing_down();
    assert_abs_diff_eq!(controller.settings().spacing(), 3.1, epsilon = 1e-4);
}

#[test]
fn test_full_length_through_controller() {
    let mut controller = controller_with(Bounds1::new(-0.5, 0.5));
    controller.set_spacing_mode(SpacingMode::FullLength);
    controller.set_spacing(30.0);
    controller.update(&FrameInput::click(Vec3::ZERO));
    let placed = controller.update(&FrameInput::click(Vec3::new(100.0, 0.0, 0.0)));
    assert_eq!(placed.placed.len(), 4);
    let last = placed.placed.last().map(|p| p.position.x).unwrap_or_default();
    assert_abs_diff_eq!(last, 100.0, epsilon = 1e-3);
}

#[test]
fn test_trees_receive_age() {
    let mut controller = LineToolController::new(Box::new(FlatTerrain::new(0.0)));
    controller.activate();
    controller.select_object(SelectedObject::from_mesh_extents(
        [Bounds1::new(-0.5, 0.3), Bounds1::new(-0.2, 0.6)],
        true,
    ));
    controller.set_spacing(10.0);
    controller.update(&FrameInput::click(Vec3::ZERO));
    let placed = controller.update(&FrameInput::click(Vec3::new(30.0, 0.0, 0.0)));
    assert_eq!(placed.placed.len(), 3);
    assert!(placed
        .placed
        .iter()
        .all(|p| p.tree.map(|t| t.state) == Some(TreeState::Adult)));
}

#[test]
fn test_random_rotation_stable_between_frames() {
    let mut controller = controller_with(Bounds1::new(-0.5, 0.5));
    controller.set_random_rotation(true);
    controller.set_spacing(10.0);
    controller.update(&FrameInput::click(Vec3::ZERO));
    let first = controller.update(&FrameInput::hover(Vec3::new(60.0, 0.0, 0.0)));
    controller.set_rotation(0);
    let second = controller.update(&FrameInput::hover(Vec3::new(60.0, 0.0, 0.0)));
    assert_eq!(first.preview, second.preview);
}
