//! Zone editor interaction, driven without a window.

use schnauzer::editor::{
    EditorInput, EditorKey, EditorOutcome, EditorSurface, ScriptedEditor, ZoneEditor, ZonePart,
};
use schnauzer::{Point, Size, Zone};

use EditorInput::{Close, Key, PointerDown, PointerMove, PointerUp};

const SCREEN: Size = Size::new(1920, 1080);

fn zones() -> Vec<Zone> {
    vec![Zone::new(100, 600, 700, 60), Zone::new(1200, 1700, 700, 60)]
}

fn run(inputs: Vec<EditorInput>) -> EditorOutcome {
    ScriptedEditor::new(inputs).run(ZoneEditor::open(&zones(), SCREEN))
}

fn saved(outcome: EditorOutcome) -> Vec<Zone> {
    match outcome {
        EditorOutcome::Save(zones) => zones,
        other => panic!("expected save, got {other:?}"),
    }
}

#[test]
fn left_edge_keeps_minimum_width() {
    let out = run(vec![
        PointerDown(Point::new(100, 720)),
        PointerMove(Point::new(900, 720)),
        PointerUp,
        Key(EditorKey::Enter),
    ]);
    assert_eq!(saved(out)[0], Zone::new(550, 600, 700, 60));
}

#[test]
fn left_edge_stops_at_screen_start() {
    let out = run(vec![
        PointerDown(Point::new(100, 720)),
        PointerMove(Point::new(-40, 720)),
        PointerUp,
        Key(EditorKey::Enter),
    ]);
    assert_eq!(saved(out)[0].x_start, 0);
}

#[test]
fn right_edge_keeps_minimum_width_and_screen_end() {
    let narrowed = run(vec![
        PointerDown(Point::new(600, 720)),
        PointerMove(Point::new(0, 720)),
        PointerUp,
        Key(EditorKey::Enter),
    ]);
    assert_eq!(saved(narrowed)[0], Zone::new(100, 150, 700, 60));

    let widened = run(vec![
        PointerDown(Point::new(1700, 720)),
        PointerMove(Point::new(2500, 720)),
        PointerUp,
        Key(EditorKey::Enter),
    ]);
    assert_eq!(saved(widened)[1], Zone::new(1200, 1920, 700, 60));
}

#[test]
fn body_drag_keeps_grab_offset_and_stays_on_screen() {
    let moved = run(vec![
        PointerDown(Point::new(300, 720)),
        PointerMove(Point::new(400, 520)),
        PointerUp,
        Key(EditorKey::Enter),
    ]);
    assert_eq!(saved(moved)[0], Zone::new(200, 700, 500, 60));

    let clamped = run(vec![
        PointerDown(Point::new(300, 720)),
        PointerMove(Point::new(-500, 2000)),
        PointerUp,
        Key(EditorKey::Enter),
    ]);
    assert_eq!(saved(clamped)[0], Zone::new(0, 500, 1020, 60));
}

#[test]
fn moves_after_release_do_nothing() {
    let out = run(vec![
        PointerDown(Point::new(300, 720)),
        PointerUp,
        PointerMove(Point::new(900, 300)),
        Key(EditorKey::Enter),
    ]);
    assert_eq!(saved(out), zones());
}

#[test]
fn delete_never_removes_the_last_zone() {
    let mut editor = ZoneEditor::open(&zones(), SCREEN);
    assert!(editor.can_delete());

    editor.handle(PointerDown(Point::new(350, 710)));
    assert_eq!(editor.zones(), &[Zone::new(1200, 1700, 700, 60)]);
    assert!(!editor.can_delete());

    // The delete spot is now just part of the body.
    editor.handle(PointerDown(Point::new(1450, 710)));
    assert_eq!(editor.zones().len(), 1);
    assert_eq!(editor.dragging().map(|t| t.part), Some(ZonePart::Body));
}

#[test]
fn add_zone_then_save_button() {
    let out = run(vec![
        PointerDown(Point::new(960, 167)),
        PointerDown(Point::new(830, 120)),
    ]);
    let zones = saved(out);
    assert_eq!(zones.len(), 3);
    assert_eq!(zones[2], Zone::new(760, 1160, 510, 60));
}

#[test]
fn cancel_paths() {
    assert_eq!(run(vec![Key(EditorKey::Escape)]), EditorOutcome::Cancel);
    assert_eq!(run(vec![PointerDown(Point::new(1090, 120))]), EditorOutcome::Cancel);
    assert_eq!(run(vec![Close]), EditorOutcome::Cancel);
    assert_eq!(run(vec![]), EditorOutcome::Cancel);
}

#[test]
fn add_pet_button_ends_session() {
    let out = run(vec![
        PointerDown(Point::new(960, 167)),
        PointerDown(Point::new(960, 222)),
    ]);
    assert_eq!(out, EditorOutcome::SpawnPet);
}

#[test]
fn hover_tracks_the_part_under_the_pointer() {
    let mut editor = ZoneEditor::open(&zones(), SCREEN);
    editor.handle(PointerMove(Point::new(605, 730)));
    assert_eq!(editor.hover().map(|t| (t.index, t.part)), Some((0, ZonePart::RightEdge)));
    editor.handle(PointerMove(Point::new(1300, 730)));
    assert_eq!(editor.hover().map(|t| (t.index, t.part)), Some((1, ZonePart::Body)));
    editor.handle(PointerMove(Point::new(900, 300)));
    assert_eq!(editor.hover(), None);
}

#[test]
fn off_screen_zones_are_replaced_by_fallback() {
    let editor = ZoneEditor::open(&[Zone::new(-100, 300, 700, 60), Zone::new(1800, 2400, 0, 60)], SCREEN);
    assert_eq!(editor.zones(), &[Zone::new(100, 600, 900, 60)]);
}
