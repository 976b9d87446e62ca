use super::*;

fn messages(state: &NotificationState) -> Vec<&str> {
    state.visible().iter().map(|n| n.message.as_str()).collect()
}

#[test]
fn enqueue_keeps_insertion_order() {
    let mut state = NotificationState::default();
    state.enqueue("first", NotificationKind::Info, 100);
    state.enqueue("second", NotificationKind::Error, 100);
    state.enqueue("third", NotificationKind::Success, 50);
    assert_eq!(messages(&state), ["first", "second", "third"]);
}

#[test]
fn enqueue_returns_distinct_ids() {
    let mut state = NotificationState::default();
    let a = state.enqueue("a", NotificationKind::Info, 0);
    let b = state.enqueue("b", NotificationKind::Info, 0);
    assert_ne!(a, b);
}

#[test]
fn prune_removes_only_expired() {
    let mut state = NotificationState::default();
    state.enqueue("old", NotificationKind::Warning, 1_000);
    state.enqueue("new", NotificationKind::Info, 4_000);

    state.prune(1_000 + DISPLAY_DURATION_MS - 1);
    assert_eq!(messages(&state), ["old", "new"]);

    state.prune(1_000 + DISPLAY_DURATION_MS);
    assert_eq!(messages(&state), ["new"]);

    state.prune(4_000 + DISPLAY_DURATION_MS);
    assert!(state.is_empty());
}

#[test]
fn dismiss_removes_before_expiry() {
    let mut state = NotificationState::default();
    let keep = state.enqueue("keep", NotificationKind::Info, 0);
    let drop = state.enqueue("drop", NotificationKind::Error, 0);
    state.dismiss(drop);
    state.dismiss(999);
    assert_eq!(state.visible().len(), 1);
    assert_eq!(state.visible()[0].id, keep);
}

#[test]
fn capacity_drops_oldest() {
    let mut state = NotificationState::default();
    for i in 0..=MAX_VISIBLE {
        state.enqueue(format!("n{i}"), NotificationKind::Info, 0);
    }
    assert_eq!(state.visible().len(), MAX_VISIBLE);
    assert_eq!(state.visible()[0].message, "n1");
    assert_eq!(state.visible()[MAX_VISIBLE - 1].message, format!("n{MAX_VISIBLE}"));
}

#[test]
fn kind_css_names() {
    assert_eq!(NotificationKind::Info.as_str(), "info");
    assert_eq!(NotificationKind::Success.as_str(), "success");
    assert_eq!(NotificationKind::Warning.as_str(), "warning");
    assert_eq!(NotificationKind::Error.as_str(), "error");
}
