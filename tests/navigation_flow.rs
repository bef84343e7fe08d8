//! End-to-end navigation and save flow driven through key handling.

mod common;

use common::*;
use crossterm::event::KeyCode;
use sampleapp::config::UiConfig;
use sampleapp::navigation::Destination;
use sampleapp::profile::ProfileDraft;
use sampleapp::ui::chrome::BarAction;

#[test]
fn forward_path_matches_stack() {
    let (mut app, _) = make_app();
    assert_eq!(app.navigation().entries(), &[Destination::ScreenA]);

    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.navigation().entries(),
        &[Destination::ScreenA, Destination::ScreenB]
    );

    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.navigation().entries(),
        &[
            Destination::ScreenA,
            Destination::ScreenB,
            Destination::ScreenC
        ]
    );
}

#[test]
fn back_restores_previous_entry() {
    let (mut app, _) = make_app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current(), Destination::ScreenB);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current(), Destination::ScreenA);
}

#[test]
fn chrome_tracks_current_destination() {
    let (mut app, _) = make_app();
    let chrome = app.chrome();
    assert_eq!(chrome.title, "Intro");
    assert!(chrome.actions.is_empty());
    assert!(!chrome.show_back);

    press(&mut app, KeyCode::Enter);
    let chrome = app.chrome();
    assert_eq!(chrome.title, "Intermediate");
    assert_eq!(chrome.actions.len(), 2);
    assert!(chrome.show_back);

    press(&mut app, KeyCode::Enter);
    let chrome = app.chrome();
    assert_eq!(chrome.title, "Profile");
    assert_eq!(chrome.actions, &[BarAction::Save]);
    assert!(chrome.show_back);
}

#[test]
fn type_save_and_unwind() {
    let (mut app, sink) = make_app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current(), Destination::ScreenC);

    type_text(&mut app, "Jane");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "1 Main St");
    press_ctrl(&mut app, 's');

    assert_eq!(
        sink.calls(),
        vec![("Jane".to_string(), "1 Main St".to_string())]
    );

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current(), Destination::ScreenA);
    assert!(!app.action_slot().is_registered());
    assert_eq!(sink.calls().len(), 1);
}

#[test]
fn save_with_empty_fields_still_reaches_sink() {
    let (mut app, sink) = make_app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    press_ctrl(&mut app, 's');
    assert_eq!(sink.calls(), vec![(String::new(), String::new())]);
}

#[test]
fn save_key_is_inert_off_profile() {
    let (mut app, sink) = make_app();
    press_ctrl(&mut app, 's');
    press(&mut app, KeyCode::Enter);
    press_ctrl(&mut app, 's');
    press_ctrl(&mut app, 'k');
    press_ctrl(&mut app, 'd');

    assert!(sink.calls().is_empty());
    assert_eq!(app.current(), Destination::ScreenB);
}

#[test]
fn draft_is_discarded_on_unmount() {
    let (mut app, _) = make_app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "Jane");
    assert_eq!(app.draft().map(|d| d.name), Some("Jane".to_string()));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.draft(), None);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.draft(), Some(ProfileDraft::default()));
}

#[test]
fn backspace_edits_focused_field() {
    let (mut app, sink) = make_app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "Janex");
    press(&mut app, KeyCode::Backspace);
    press_ctrl(&mut app, 's');
    assert_eq!(sink.calls()[0].0, "Jane");
}

#[test]
fn escape_at_root_quits_by_default() {
    let (mut app, _) = make_app();
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());
    assert_eq!(app.navigation().depth(), 1);
}

#[test]
fn escape_at_root_stays_when_configured() {
    let (mut app, _) = make_app_with(UiConfig {
        exit_on_root_back: false,
        ..UiConfig::default()
    });
    press(&mut app, KeyCode::Esc);
    assert!(!app.should_quit());
    assert_eq!(app.current(), Destination::ScreenA);
}

#[test]
fn ctrl_q_quits_from_any_screen() {
    let (mut app, _) = make_app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    press_ctrl(&mut app, 'q');
    assert!(app.should_quit());
}
