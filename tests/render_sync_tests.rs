use approx::assert_relative_eq;
use glam::Vec3;
use scene_editor::core::{DimsPatch, Transform};
use scene_editor::render::{HeadlessBackend, RenderHandle, SceneSync};
use scene_editor::{
    create_cube, AppIntent, CubeParams, EditorOptions, EditorTool, GizmoMode, ObjectId,
    ObjectPatch, SceneObject, SceneStore, SnapSettings,
};

const EPS: f32 = 1e-5;

fn cube(id: u128) -> SceneObject {
    create_cube(CubeParams {
        id: Some(ObjectId::from_u128(id)),
        ..CubeParams::default()
    })
}

fn setup(count: u128) -> (SceneStore, SceneSync<HeadlessBackend>) {
    let mut store = SceneStore::new(EditorOptions::default());
    for i in 1..=count {
        store.add_object(cube(i), true);
    }
    let sync = SceneSync::new(HeadlessBackend::new(), &mut store);
    (store, sync)
}

/// Setzt Selektion und Werkzeug, sodass das Gizmo am Objekt hängt.
fn setup_with_gizmo(tool: EditorTool) -> (SceneStore, SceneSync<HeadlessBackend>) {
    let (mut store, mut sync) = setup(2);
    store.set_selection(&[ObjectId::from_u128(1)], false);
    store.set_active_tool(tool);
    sync.pump(&mut store);
    (store, sync)
}

fn assert_transform_eq(actual: Transform, expected: Transform) {
    assert!(
        actual.abs_diff_eq(&expected, EPS),
        "Transform weicht ab: {actual:?} != {expected:?}"
    );
}

fn assert_handles_match_store(store: &SceneStore, sync: &SceneSync<HeadlessBackend>) {
    let objects = &store.state().objects;
    assert_eq!(sync.handle_count(), objects.len());
    for object in objects.iter() {
        let handle = sync
            .handle(object.id)
            .unwrap_or_else(|| panic!("Handle für {} fehlt", object.id));
        assert_eq!(handle.object_id(), object.id);
        assert_transform_eq(handle.transform(), object.transform);
        assert!(handle.box_size().abs_diff_eq(object.box_size(), EPS));
    }
}

// ─── Abgleich ───────────────────────────────────────────────────

#[test]
fn test_handles_follow_store_updates() {
    let (mut store, mut sync) = setup(3);
    let id = ObjectId::from_u128(2);

    store.update_object(
        id,
        ObjectPatch {
            position: Some(Vec3::new(1.5, 0.5, -3.0)),
            rotation: Some(Vec3::new(0.0, 0.75, 0.0)),
            scale: Some(Vec3::new(2.0, 1.0, 1.0)),
            ..ObjectPatch::default()
        },
        true,
    );
    let report = sync.pump(&mut store);

    assert_eq!(report.created, 0);
    assert_eq!(report.disposed, 0);
    assert_eq!(report.rebuilt, 0);
    assert_handles_match_store(&store, &sync);
}

#[test]
fn test_dimension_change_rebuilds_geometry_once() {
    let (mut store, mut sync) = setup(2);

    store.update_object(
        ObjectId::from_u128(1),
        ObjectPatch {
            dims: Some(DimsPatch {
                width: Some(3.0),
                ..DimsPatch::default()
            }),
            ..ObjectPatch::default()
        },
        true,
    );
    let report = sync.pump(&mut store);

    assert_eq!(report.rebuilt, 1);
    assert_eq!(sync.backend().stats().rebuilt, 1);
    assert_handles_match_store(&store, &sync);
}

#[test]
fn test_add_and_remove_create_and_dispose_handles() {
    let (mut store, mut sync) = setup(2);

    store.add_object(cube(3), true);
    store.remove_object(ObjectId::from_u128(1), true);
    let report = sync.pump(&mut store);

    assert_eq!(report.created, 1);
    assert_eq!(report.disposed, 1);
    assert_eq!(sync.backend().live_handles(), 2);
    assert!(sync.handle(ObjectId::from_u128(1)).is_none());
    assert_handles_match_store(&store, &sync);
}

#[test]
fn test_undo_redo_resync_restored_collection() {
    let (mut store, mut sync) = setup(2);
    store.update_object(
        ObjectId::from_u128(1),
        ObjectPatch::position(Vec3::new(7.0, 0.5, 7.0)),
        true,
    );
    store.remove_object(ObjectId::from_u128(2), true);
    sync.pump(&mut store);
    assert_eq!(sync.handle_count(), 1);

    store.undo();
    sync.pump(&mut store);
    assert_handles_match_store(&store, &sync);
    assert_eq!(sync.handle_count(), 2);

    store.undo();
    sync.pump(&mut store);
    assert_handles_match_store(&store, &sync);

    store.redo();
    store.redo();
    sync.pump(&mut store);
    assert_handles_match_store(&store, &sync);
    assert_eq!(sync.backend().live_handles(), 1);
}

// ─── Gizmo-Anbindung ────────────────────────────────────────────

#[test]
fn test_gizmo_requires_transform_tool_and_selection() {
    let (mut store, mut sync) = setup(2);
    store.set_selection(&[ObjectId::from_u128(1)], false);
    sync.pump(&mut store);
    assert!(sync.backend().gizmo().is_none(), "Select-Werkzeug ohne Gizmo");

    store.set_active_tool(EditorTool::Rotate);
    sync.pump(&mut store);
    let gizmo = sync.backend().gizmo().expect("Gizmo angehängt");
    assert_eq!(gizmo.target, ObjectId::from_u128(1));
    assert_eq!(gizmo.mode, GizmoMode::Rotate);

    store.dispatch(AppIntent::ClearSelectionRequested);
    sync.pump(&mut store);
    assert!(sync.backend().gizmo().is_none());
    assert_eq!(sync.backend().stats().gizmo_detached, 1);
}

#[test]
fn test_gizmo_follows_first_selected_object() {
    let (mut store, mut sync) = setup_with_gizmo(EditorTool::Move);

    store.set_selection(&[ObjectId::from_u128(2), ObjectId::from_u128(1)], false);
    sync.pump(&mut store);

    let gizmo = sync.backend().gizmo().expect("Gizmo angehängt");
    assert_eq!(gizmo.target, ObjectId::from_u128(2));
    assert_eq!(gizmo.mode, GizmoMode::Translate);
}

#[test]
fn test_snap_change_reattaches_gizmo() {
    let (mut store, mut sync) = setup_with_gizmo(EditorTool::Move);
    let attached = sync.backend().stats().gizmo_attached;
    let snap = SnapSettings {
        translate: 0.5,
        ..SnapSettings::default()
    };

    store.dispatch(AppIntent::SnapSettingsChanged { snap });
    sync.pump(&mut store);

    assert_eq!(sync.backend().stats().gizmo_attached, attached + 1);
    assert_eq!(sync.backend().gizmo().map(|gizmo| gizmo.snap), Some(snap));
}

#[test]
fn test_unrelated_update_keeps_gizmo_attached() {
    let (mut store, mut sync) = setup_with_gizmo(EditorTool::Move);
    let stats = sync.backend().stats();

    store.update_object(
        ObjectId::from_u128(2),
        ObjectPatch::position(Vec3::new(0.0, 0.5, 4.0)),
        true,
    );
    sync.pump(&mut store);

    assert_eq!(sync.backend().stats().gizmo_attached, stats.gizmo_attached);
    assert_eq!(sync.backend().stats().gizmo_detached, stats.gizmo_detached);
}

// ─── Gizmo-Drag ─────────────────────────────────────────────────

#[test]
fn test_gizmo_drag_writes_back_and_undoes_in_one_step() {
    let (mut store, mut sync) = setup_with_gizmo(EditorTool::Move);
    let id = ObjectId::from_u128(1);
    let pre_drag = store.state().objects.get(id).unwrap().transform;
    let depth = store.state().history.undo_depth();

    assert!(sync.camera_orbit_enabled());
    assert!(sync.begin_gizmo_drag(&mut store));
    assert!(!sync.camera_orbit_enabled());
    assert_eq!(store.state().history.undo_depth(), depth + 1);

    for frame in 1..=10 {
        let handle = sync.handle_mut(id).expect("Handle vorhanden");
        let mut transform = handle.transform();
        transform.position = Vec3::new(0.5 * frame as f32, 0.5, 0.0);
        handle.set_transform(transform);

        assert!(sync.gizmo_drag_frame(&mut store));
        sync.pump(&mut store);

        let stored = store.state().objects.get(id).unwrap().transform;
        assert_transform_eq(stored, transform);
    }

    assert!(sync.end_gizmo_drag(&mut store));
    assert!(sync.camera_orbit_enabled());
    assert_eq!(store.state().history.undo_depth(), depth + 1);

    store.undo();
    sync.pump(&mut store);

    assert_eq!(store.state().objects.get(id).unwrap().transform, pre_drag);
    assert_handles_match_store(&store, &sync);
}

#[test]
fn test_drag_without_gizmo_is_ignored() {
    let (mut store, mut sync) = setup(1);
    let depth = store.state().history.undo_depth();

    assert!(!sync.begin_gizmo_drag(&mut store));
    assert!(!sync.gizmo_drag_frame(&mut store));
    assert!(!sync.end_gizmo_drag(&mut store));

    assert!(sync.camera_orbit_enabled());
    assert_eq!(store.state().history.undo_depth(), depth);
}

#[test]
fn test_second_drag_start_is_ignored() {
    let (mut store, mut sync) = setup_with_gizmo(EditorTool::Scale);
    let depth = store.state().history.undo_depth();

    assert!(sync.begin_gizmo_drag(&mut store));
    assert!(!sync.begin_gizmo_drag(&mut store));

    assert_eq!(store.state().history.undo_depth(), depth + 1);
}

#[test]
fn test_removing_dragged_object_ends_drag() {
    let (mut store, mut sync) = setup_with_gizmo(EditorTool::Move);
    let id = ObjectId::from_u128(1);
    assert!(sync.begin_gizmo_drag(&mut store));

    store.remove_object(id, true);
    sync.pump(&mut store);

    assert_eq!(sync.gizmo().dragging(), None);
    assert!(sync.camera_orbit_enabled());
    assert!(sync.backend().gizmo().is_none());
    assert!(sync.handle(id).is_none());
}

// ─── Werkzeuge ──────────────────────────────────────────────────

#[test]
fn test_wall_tool_creates_synced_handle() {
    let (mut store, mut sync) = setup(0);

    store.dispatch(AppIntent::SetEditorToolRequested {
        tool: EditorTool::AddWall,
    });
    store.dispatch(AppIntent::GroundClicked {
        point: Vec3::new(0.0, 0.0, 0.0),
    });
    sync.pump(&mut store);
    assert_eq!(sync.handle_count(), 0);

    store.dispatch(AppIntent::GroundClicked {
        point: Vec3::new(2.0, 0.0, 0.0),
    });
    sync.pump(&mut store);

    assert_eq!(sync.handle_count(), 1);
    assert_handles_match_store(&store, &sync);
    let wall = store.state().objects.iter().next().unwrap();
    let handle = sync.handle(wall.id).unwrap();
    assert_relative_eq!(handle.box_size().z, 2.0, epsilon = EPS);
    assert_relative_eq!(
        handle.transform().rotation.y,
        std::f32::consts::FRAC_PI_2,
        epsilon = EPS
    );
}

#[test]
fn test_dropping_sync_unsubscribes() {
    let (mut store, sync) = setup(1);
    assert_eq!(store.subscriber_count(), 1);

    drop(sync);
    store.add_object(cube(2), true);

    assert_eq!(store.subscriber_count(), 0);
}
