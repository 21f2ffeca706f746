use super::*;

#[test]
fn register_then_resolve_delivers_the_payload() {
    let registry = PendingRegistry::default();
    let mut rx = registry.register("voices");

    let notified = registry.resolve("voices", &serde_json::json!(["fem 1"]));

    assert_eq!(notified, 1);
    assert_eq!(rx.try_recv().expect("open"), Some(serde_json::json!(["fem 1"])));
}

#[test]
fn resolve_without_waiters_notifies_nobody() {
    let registry = PendingRegistry::default();
    assert_eq!(registry.resolve("voices", &serde_json::json!(null)), 0);
}

#[test]
fn waiter_registered_after_a_frame_never_observes_it() {
    let registry = PendingRegistry::default();
    registry.resolve("progress", &serde_json::json!(50));

    let mut rx = registry.register("progress");
    assert_eq!(rx.try_recv().expect("open"), None);
}

#[test]
fn all_waiters_for_a_kind_observe_the_same_payload() {
    let registry = PendingRegistry::default();
    let mut first = registry.register("quality");
    let mut second = registry.register("quality");

    let notified = registry.resolve("quality", &serde_json::json!("High (1.5s)"));

    assert_eq!(notified, 2);
    assert_eq!(
        first.try_recv().expect("open"),
        Some(serde_json::json!("High (1.5s)"))
    );
    assert_eq!(
        second.try_recv().expect("open"),
        Some(serde_json::json!("High (1.5s)"))
    );
}

#[test]
fn waiters_are_one_shot() {
    let registry = PendingRegistry::default();
    let _rx = registry.register("voice");
    registry.resolve("voice", &serde_json::json!("fem 1"));

    assert_eq!(registry.waiting("voice"), 0);
    assert_eq!(registry.resolve("voice", &serde_json::json!("fem 2")), 0);
}

#[test]
fn kinds_resolve_independently() {
    let registry = PendingRegistry::default();
    let mut voices = registry.register("voices");
    let mut folder = registry.register("input_folder");

    registry.resolve("voices", &serde_json::json!(["male 1"]));

    assert_eq!(
        voices.try_recv().expect("open"),
        Some(serde_json::json!(["male 1"]))
    );
    assert_eq!(folder.try_recv().expect("open"), None);
}

#[test]
fn clones_share_one_table() {
    let registry = PendingRegistry::default();
    let clone = registry.clone();
    let mut rx = registry.register("voices");

    clone.resolve("voices", &serde_json::json!([]));
    assert_eq!(rx.try_recv().expect("open"), Some(serde_json::json!([])));
}
