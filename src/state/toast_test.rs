use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.push(ToastLevel::Info, "one");
    let second = state.warning("two");
    assert!(second > first);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].level, ToastLevel::Warning);
    assert_eq!(state.toasts[1].message, "two");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let first = state.warning("one");
    let second = state.warning("two");
    state.dismiss(first);
    assert_eq!(state.toasts.iter().map(|t| t.id).collect::<Vec<_>>(), vec![second]);
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn push_drops_oldest_beyond_cap() {
    let mut state = ToastState::default();
    for i in 0..(MAX_TOASTS + 2) {
        state.push(ToastLevel::Info, format!("toast {i}"));
    }
    assert_eq!(state.toasts.len(), MAX_TOASTS);
    assert_eq!(state.toasts[0].message, "toast 2");
}

#[test]
fn css_modifier_per_level() {
    assert_eq!(ToastLevel::Warning.css_modifier(), "toast--warning");
    assert_eq!(ToastLevel::Error.css_modifier(), "toast--error");
}
