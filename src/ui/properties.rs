//! Properties-Panel (rechte Seitenleiste) für das primär selektierte Objekt.
//!
//! Getippte Werte werden als ein Undo-Schritt übernommen, Slider-Drags laufen als
//! Transform-Geste (ein Snapshot beim Start). Der Name wird erst beim Verlassen
//! des Feldes übernommen.

use crate::app::{AppIntent, AppState};
use crate::core::{
    deg_to_rad, rad_to_deg, DimsPatch, ObjectId, ObjectKind, ObjectPatch, SceneObject,
    MIN_DIMENSION,
};
use glam::Vec3;

/// Interaktion mit einem Eingabefeld im aktuellen Frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct FieldEdit {
    started: bool,
    changed: bool,
    in_gesture: bool,
    stopped: bool,
}

impl FieldEdit {
    fn from_drag(response: &egui::Response) -> Self {
        Self {
            started: response.drag_started(),
            changed: response.changed(),
            in_gesture: response.dragged() || response.drag_stopped(),
            stopped: response.drag_stopped(),
        }
    }

    fn merge(self, other: Self) -> Self {
        Self {
            started: self.started || other.started,
            changed: self.changed || other.changed,
            in_gesture: self.in_gesture || other.in_gesture,
            stopped: self.stopped || other.stopped,
        }
    }

    /// Übersetzt die Interaktion in Intents (Geste oder Einzel-Commit).
    fn push_intents(self, id: ObjectId, patch: ObjectPatch, events: &mut Vec<AppIntent>) {
        if self.started {
            events.push(AppIntent::TransformGestureStarted);
        }
        if self.changed {
            if self.in_gesture {
                events.push(AppIntent::TransformGestureUpdated { id, patch });
            } else {
                events.push(AppIntent::ObjectPropertyCommitted { id, patch });
            }
        }
        if self.stopped {
            events.push(AppIntent::TransformGestureEnded);
        }
    }
}

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(220.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Eigenschaften");
            ui.separator();

            let primary = state
                .selection
                .primary()
                .and_then(|id| state.objects.get(id));

            match primary {
                None => {
                    ui.label("Keine Selektion");
                }
                Some(object) => {
                    if state.selection.len() > 1 {
                        ui.label(format!("{} Objekte selektiert", state.selection.len()));
                        ui.separator();
                    }
                    render_object(ui, object, &mut events);
                }
            }

            ui.separator();
            ui.label(format!("Objekte: {}", state.object_count()));
        });

    events
}

fn render_object(ui: &mut egui::Ui, object: &SceneObject, events: &mut Vec<AppIntent>) {
    let id = object.id;
    ui.label(format!("Typ: {}", object.kind_label()));
    ui.label(format!("ID: {}", id));

    events.extend(name_row(ui, object));

    ui.separator();
    let t = object.transform;

    if let Some((position, edit)) = vec3_row(ui, "Position", t.position, 0.05, " m") {
        edit.push_intents(
            id,
            ObjectPatch {
                position: Some(position),
                ..ObjectPatch::default()
            },
            events,
        );
    }

    let rotation_deg = Vec3::new(
        rad_to_deg(t.rotation.x),
        rad_to_deg(t.rotation.y),
        rad_to_deg(t.rotation.z),
    );
    if let Some((deg, edit)) = vec3_row(ui, "Rotation", rotation_deg, 1.0, "°") {
        let rotation = Vec3::new(deg_to_rad(deg.x), deg_to_rad(deg.y), deg_to_rad(deg.z));
        edit.push_intents(
            id,
            ObjectPatch {
                rotation: Some(rotation),
                ..ObjectPatch::default()
            },
            events,
        );
    }

    if let Some((scale, edit)) = vec3_row(ui, "Skalierung", t.scale, 0.01, "") {
        edit.push_intents(
            id,
            ObjectPatch {
                scale: Some(scale),
                ..ObjectPatch::default()
            },
            events,
        );
    }

    ui.separator();
    let (labels, values) = match object.kind {
        ObjectKind::Cube { dims } => (
            ["Breite", "Höhe", "Tiefe"],
            Vec3::new(dims.width, dims.height, dims.depth),
        ),
        ObjectKind::Wall { wall } => (
            ["Länge", "Höhe", "Stärke"],
            Vec3::new(wall.length, wall.height, wall.thickness),
        ),
    };
    if let Some((v, edit)) = dims_rows(ui, labels, values) {
        edit.push_intents(id, dims_patch(&object.kind, v), events);
    }
}

/// Namensfeld: Eingaben bleiben bis zum Fokusverlust im Puffer, Fokuswechsel allein erzeugt nichts.
fn name_row(ui: &mut egui::Ui, object: &SceneObject) -> Option<AppIntent> {
    let edit_id = ui.make_persistent_id(("object_name", object.id));
    let buffer_id = edit_id.with("buffer");

    let focused = ui.memory(|memory| memory.has_focus(edit_id));
    let mut name = focused
        .then(|| ui.data(|data| data.get_temp::<String>(buffer_id)))
        .flatten()
        .unwrap_or_else(|| object.name.clone().unwrap_or_default());

    let response = ui
        .horizontal(|ui| {
            ui.label("Name:");
            ui.add(egui::TextEdit::singleline(&mut name).id(edit_id))
        })
        .inner;

    if response.has_focus() {
        ui.data_mut(|data| data.insert_temp(buffer_id, name));
        return None;
    }
    if !response.lost_focus() {
        return None;
    }
    ui.data_mut(|data| data.remove::<String>(buffer_id));
    commit_name(object, name)
}

/// Ein Undo-Schritt für einen geänderten Namen.
fn commit_name(object: &SceneObject, name: String) -> Option<AppIntent> {
    let unchanged = object.name.as_deref().unwrap_or_default() == name;
    (!unchanged).then(|| AppIntent::ObjectPropertyCommitted {
        id: object.id,
        patch: ObjectPatch {
            name: Some(name),
            ..ObjectPatch::default()
        },
    })
}

/// Drei DragValues in einer Zeile; liefert den neuen Vektor bei Interaktion.
fn vec3_row(
    ui: &mut egui::Ui,
    label: &str,
    value: Vec3,
    speed: f64,
    suffix: &str,
) -> Option<(Vec3, FieldEdit)> {
    let mut v = value;
    let mut edit = FieldEdit::default();

    ui.label(label);
    ui.horizontal(|ui| {
        for component in [&mut v.x, &mut v.y, &mut v.z] {
            let response = ui.add(
                egui::DragValue::new(component)
                    .speed(speed)
                    .max_decimals(3)
                    .suffix(suffix),
            );
            edit = edit.merge(FieldEdit::from_drag(&response));
        }
    });

    (edit != FieldEdit::default()).then_some((v, edit))
}

fn dims_rows(ui: &mut egui::Ui, labels: [&str; 3], value: Vec3) -> Option<(Vec3, FieldEdit)> {
    let mut v = value;
    let mut edit = FieldEdit::default();

    for (label, component) in labels.into_iter().zip([&mut v.x, &mut v.y, &mut v.z]) {
        ui.horizontal(|ui| {
            ui.label(format!("{label}:"));
            let response = ui.add(
                egui::DragValue::new(component)
                    .range(MIN_DIMENSION..=1000.0)
                    .speed(0.01)
                    .max_decimals(3)
                    .suffix(" m"),
            );
            edit = edit.merge(FieldEdit::from_drag(&response));
        });
    }

    (edit != FieldEdit::default()).then_some((v, edit))
}

/// Baut den Maß-Patch in der Achsenbelegung der jeweiligen Variante.
fn dims_patch(kind: &ObjectKind, v: Vec3) -> ObjectPatch {
    let dims = match kind {
        ObjectKind::Cube { .. } => DimsPatch {
            width: Some(v.x),
            height: Some(v.y),
            depth: Some(v.z),
            ..DimsPatch::default()
        },
        ObjectKind::Wall { .. } => DimsPatch {
            length: Some(v.x),
            height: Some(v.y),
            thickness: Some(v.z),
            ..DimsPatch::default()
        },
    };
    ObjectPatch {
        dims: Some(dims),
        ..ObjectPatch::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SceneStore;
    use crate::core::{create_wall_from_two_points, WallParams};

    fn id() -> ObjectId {
        ObjectId::from_u128(1)
    }

    #[test]
    fn typed_change_commits_with_history() {
        let mut events = Vec::new();
        FieldEdit {
            changed: true,
            ..FieldEdit::default()
        }
        .push_intents(id(), ObjectPatch::position(Vec3::X), &mut events);

        assert_eq!(
            events,
            vec![AppIntent::ObjectPropertyCommitted {
                id: id(),
                patch: ObjectPatch::position(Vec3::X)
            }]
        );
    }

    #[test]
    fn drag_frames_form_one_gesture() {
        let mut events = Vec::new();
        let patch = ObjectPatch::position(Vec3::Y);

        FieldEdit {
            started: true,
            changed: true,
            in_gesture: true,
            stopped: false,
        }
        .push_intents(id(), patch.clone(), &mut events);
        FieldEdit {
            changed: true,
            in_gesture: true,
            ..FieldEdit::default()
        }
        .push_intents(id(), patch.clone(), &mut events);
        FieldEdit {
            in_gesture: true,
            stopped: true,
            ..FieldEdit::default()
        }
        .push_intents(id(), patch.clone(), &mut events);

        assert_eq!(
            events,
            vec![
                AppIntent::TransformGestureStarted,
                AppIntent::TransformGestureUpdated {
                    id: id(),
                    patch: patch.clone()
                },
                AppIntent::TransformGestureUpdated { id: id(), patch },
                AppIntent::TransformGestureEnded,
            ]
        );
    }

    #[test]
    fn wall_dims_patch_maps_axes_to_wall_fields() {
        let wall = create_wall_from_two_points(Vec3::ZERO, Vec3::X, WallParams::default());
        let patch = dims_patch(&wall.kind, Vec3::new(5.0, 3.0, 0.2));
        let dims = patch.dims.expect("Maß-Patch erwartet");

        assert_eq!(dims.length, Some(5.0));
        assert_eq!(dims.height, Some(3.0));
        assert_eq!(dims.thickness, Some(0.2));
        assert_eq!(dims.width, None);
    }

    #[test]
    fn name_commit_only_when_text_differs() {
        let wall = create_wall_from_two_points(Vec3::ZERO, Vec3::X, WallParams::default());

        assert_eq!(commit_name(&wall, "Wall".to_string()), None);
        assert_eq!(
            commit_name(&wall, "Nordwand".to_string()),
            Some(AppIntent::ObjectPropertyCommitted {
                id: wall.id,
                patch: ObjectPatch {
                    name: Some("Nordwand".to_string()),
                    ..ObjectPatch::default()
                },
            })
        );
    }

    #[test]
    fn tabbing_through_panel_keeps_redo_history() {
        let mut store = SceneStore::default();
        store.dispatch(AppIntent::AddCubeRequested);
        store.dispatch(AppIntent::AddCubeRequested);
        store.dispatch(AppIntent::UndoRequested);
        assert!(store.state().can_redo());

        let ctx = egui::Context::default();
        let mut events = Vec::new();
        let tab = egui::Event::Key {
            key: egui::Key::Tab,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::default(),
        };
        for frame_events in [vec![], vec![tab.clone()], vec![tab], vec![]] {
            let input = egui::RawInput {
                events: frame_events,
                ..egui::RawInput::default()
            };
            let _ = ctx.run(input, |ctx| {
                events.extend(render_properties_panel(ctx, store.state()));
            });
        }

        assert!(events.is_empty(), "unerwartete Intents: {events:?}");
        for intent in events {
            store.dispatch(intent);
        }
        assert!(store.state().can_redo());
    }

    #[test]
    fn idle_panel_emits_nothing() {
        let mut state = AppState::new();
        let wall = create_wall_from_two_points(Vec3::ZERO, Vec3::X, WallParams::default());
        let wall_id = wall.id;
        state.objects_mut().insert(wall);
        state.selection.ids_mut().insert(wall_id);

        let ctx = egui::Context::default();
        let mut events = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            events = render_properties_panel(ctx, &state);
        });

        assert!(events.is_empty());
    }
}
