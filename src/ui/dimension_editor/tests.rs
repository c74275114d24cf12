// SPDX-License-Identifier: MPL-2.0
use super::*;
use crate::i18n::fluent::I18n;

fn editor(width: u32, height: u32) -> State {
    State::new(Dimensions::new(width, height))
}

fn type_width(state: &mut State, value: &str) -> Event {
    state.update(Message::WidthInputChanged(value.to_string()))
}

fn type_height(state: &mut State, value: &str) -> Event {
    state.update(Message::HeightInputChanged(value.to_string()))
}

#[test]
fn new_editor_mirrors_source_dimensions() {
    let state = editor(640, 480);
    assert_eq!(state.width(), 640);
    assert_eq!(state.height(), 480);
    assert!(state.is_aspect_locked());
    assert!(!state.has_changed());
}

#[test]
fn with_lock_respects_initial_lock_state() {
    let state = State::with_lock(Dimensions::new(640, 480), false);
    assert!(!state.is_aspect_locked());
}

#[test]
fn set_source_resets_candidates() {
    let mut state = editor(640, 480);
    type_width(&mut state, "100");

    state.set_source(Dimensions::new(800, 600));

    assert_eq!(state.width(), 800);
    assert_eq!(state.height(), 600);
    assert!(!state.has_changed());
}

#[test]
fn set_source_with_same_dimensions_keeps_edits() {
    let mut state = editor(640, 480);
    type_width(&mut state, "320");

    state.set_source(Dimensions::new(640, 480));

    assert_eq!(state.width(), 320);
    assert_eq!(state.height(), 240);
}

#[test]
fn set_source_keeps_lock_state() {
    let mut state = editor(640, 480);
    state.update(Message::ToggleLockAspect);

    state.set_source(Dimensions::new(100, 100));

    assert!(!state.is_aspect_locked());
}

#[test]
fn locked_width_edit_recomputes_height() {
    let mut state = editor(200, 100);
    let event = type_width(&mut state, "150");
    assert_eq!(event, Event::None);
    assert_eq!(state.width(), 150);
    assert_eq!(state.height(), 75);
}

#[test]
fn locked_height_edit_recomputes_width() {
    let mut state = editor(200, 100);
    let event = type_height(&mut state, "50");
    assert_eq!(event, Event::None);
    assert_eq!(state.height(), 50);
    assert_eq!(state.width(), 100);
}

#[test]
fn locked_edit_rounds_to_nearest_integer() {
    let mut state = editor(1920, 1080);
    type_width(&mut state, "1001");
    // 1001 / (16 / 9) = 563.06...
    assert_eq!(state.height(), 563);

    type_height(&mut state, "100");
    // 100 * (16 / 9) = 177.77...
    assert_eq!(state.width(), 178);
}

#[test]
fn unlocked_edits_leave_other_field_alone() {
    let mut state = editor(200, 100);
    state.update(Message::ToggleLockAspect);

    type_width(&mut state, "150");
    assert_eq!(state.width(), 150);
    assert_eq!(state.height(), 100);

    type_height(&mut state, "33");
    assert_eq!(state.width(), 150);
    assert_eq!(state.height(), 33);
}

#[test]
fn toggle_lock_does_not_correct_existing_pair() {
    let mut state = editor(200, 100);
    state.update(Message::ToggleLockAspect);
    type_width(&mut state, "150");

    state.update(Message::ToggleLockAspect);

    assert!(state.is_aspect_locked());
    assert_eq!(state.width(), 150);
    assert_eq!(state.height(), 100);

    // Only the next edit re-applies the ratio
    type_height(&mut state, "10");
    assert_eq!(state.width(), 20);
}

#[test]
fn ratio_uses_source_not_current_candidates() {
    let mut state = editor(200, 100);
    state.update(Message::ToggleLockAspect);
    type_height(&mut state, "200");
    state.update(Message::ToggleLockAspect);

    type_width(&mut state, "400");

    assert_eq!(state.height(), 200);
}

#[test]
fn invalid_width_coerces_to_zero_and_disables_submit() {
    let mut state = editor(200, 100);
    type_width(&mut state, "abc");

    assert_eq!(state.width(), 0);
    assert_eq!(state.height(), 0);
    assert!(state.has_changed());
    assert!(!state.can_submit(false));
}

#[test]
fn empty_height_coerces_to_zero_when_unlocked() {
    let mut state = editor(200, 100);
    state.update(Message::ToggleLockAspect);
    type_height(&mut state, "");

    assert_eq!(state.width(), 200);
    assert_eq!(state.height(), 0);
    assert!(!state.can_submit(false));
}

#[test]
fn submit_is_disabled_while_unchanged() {
    let state = editor(200, 100);
    assert!(!state.can_submit(false));
}

#[test]
fn submit_is_disabled_while_busy() {
    let mut state = editor(200, 100);
    type_width(&mut state, "100");
    assert!(state.can_submit(false));
    assert!(!state.can_submit(true));
}

#[test]
fn submit_is_disabled_for_non_positive_values() {
    let mut state = editor(200, 100);
    state.update(Message::ToggleLockAspect);

    type_width(&mut state, "0");
    assert!(!state.can_submit(false));

    type_width(&mut state, "-10");
    assert!(!state.can_submit(false));

    type_width(&mut state, "10");
    type_height(&mut state, "-1");
    assert!(!state.can_submit(false));

    type_height(&mut state, "1");
    assert!(state.can_submit(false));
}

#[test]
fn apply_emits_request_with_current_values() {
    let mut state = editor(200, 100);
    type_width(&mut state, "150");

    let event = state.update(Message::ApplyResize);

    assert_eq!(
        event,
        Event::ResizeRequested {
            width: 150,
            height: 75
        }
    );
}

#[test]
fn apply_with_invalid_values_emits_nothing() {
    let mut state = editor(200, 100);
    type_width(&mut state, "nope");

    assert_eq!(state.update(Message::ApplyResize), Event::None);
}

#[test]
fn submit_revalidates_positivity_only() {
    // Unchanged dimensions keep the button disabled, but an explicit
    // submit still goes through since both values are positive.
    let state = editor(200, 100);
    assert!(!state.can_submit(false));
    assert_eq!(
        state.submit(),
        Event::ResizeRequested {
            width: 200,
            height: 100
        }
    );
}

#[test]
fn zero_height_source_skips_proportional_adjustment() {
    let mut state = editor(300, 0);
    type_width(&mut state, "150");
    assert_eq!(state.width(), 150);
    assert_eq!(state.height(), 0);
    assert!(!state.can_submit(false));
}

#[test]
fn full_resize_scenario() {
    let mut state = editor(1920, 1080);
    assert_eq!((state.width(), state.height()), (1920, 1080));
    assert!(!state.can_submit(false));

    type_width(&mut state, "960");
    assert_eq!(state.height(), 540);
    assert!(state.can_submit(false));

    let events: Vec<Event> = vec![state.update(Message::ApplyResize)];
    let requests: Vec<_> = events
        .into_iter()
        .filter(|event| matches!(event, Event::ResizeRequested { .. }))
        .collect();
    assert_eq!(
        requests,
        vec![Event::ResizeRequested {
            width: 960,
            height: 540
        }]
    );

    // Host applies the resize and reports the new source size
    state.set_source(Dimensions::new(960, 540));
    assert_eq!((state.width(), state.height()), (960, 540));
    assert!(!state.can_submit(false));
}

#[test]
fn oversized_candidate_is_not_submittable() {
    let mut state = editor(200, 100);
    state.update(Message::ToggleLockAspect);
    type_width(&mut state, "5000000000");

    assert_eq!(state.width(), 5_000_000_000);
    assert!(!state.can_submit(false));
    assert_eq!(state.submit(), Event::None);
}

#[test]
fn busy_disables_inputs_but_not_lock_toggle() {
    let mut state = editor(200, 100);
    type_width(&mut state, "100");

    assert!(state.inputs_enabled(false));
    assert!(state.lock_toggle_enabled(false));
    assert!(state.can_submit(false));

    assert!(!state.inputs_enabled(true));
    assert!(state.lock_toggle_enabled(true));
    assert!(!state.can_submit(true));
}

#[test]
fn dimension_editor_view_renders() {
    let i18n = I18n::default();
    let state = editor(1920, 1080);
    let _element = state.view(ViewContext {
        i18n: &i18n,
        busy: false,
    });
}

#[test]
fn dimension_editor_view_renders_while_busy() {
    let i18n = I18n::default();
    let mut state = editor(1920, 1080);
    type_width(&mut state, "960");
    let _element = state.view(ViewContext {
        i18n: &i18n,
        busy: true,
    });
}

#[test]
fn dimension_editor_view_renders_unlocked_with_invalid_values() {
    let i18n = I18n::default();
    let mut state = editor(1920, 1080);
    state.update(Message::ToggleLockAspect);
    type_height(&mut state, "-5");
    let _element = state.view(ViewContext {
        i18n: &i18n,
        busy: false,
    });
}
