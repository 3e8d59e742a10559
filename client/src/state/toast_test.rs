use super::*;

// =============================================================
// Notice constructors
// =============================================================

#[test]
fn error_notice_uses_standard_title() {
    let notice = Notice::error("Token no proporcionado.");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.title, "Error");
    assert_eq!(notice.description, "Token no proporcionado.");
}

#[test]
fn kind_maps_to_css_modifier() {
    assert_eq!(NoticeKind::Success.css_class(), "toast toast--success");
    assert_eq!(NoticeKind::Error.css_class(), "toast toast--error");
}

// =============================================================
// ToastState queue
// =============================================================

#[test]
fn push_assigns_increasing_ids_in_order() {
    let mut state = ToastState::default();
    let first = state.push(Notice::error("a"));
    let second = state.push(Notice::success("Éxito", "b"));
    assert!(second > first);
    let descriptions: Vec<_> = state.items.iter().map(|t| t.notice.description.as_str()).collect();
    assert_eq!(descriptions, ["a", "b"]);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let first = state.push(Notice::error("a"));
    let second = state.push(Notice::error("b"));
    assert!(state.dismiss(first));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, second);
}

#[test]
fn dismiss_twice_reports_missing() {
    let mut state = ToastState::default();
    let id = state.push(Notice::error("a"));
    assert!(state.dismiss(id));
    assert!(!state.dismiss(id));
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let id = state.push(Notice::error("a"));
    state.dismiss(id);
    assert_ne!(state.push(Notice::error("b")), id);
}
