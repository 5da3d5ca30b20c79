use super::*;

fn full() -> Presence {
    Presence { input: true, submit: true, result: true, badge: true, reply: true, file_input: true, upload_label: true }
}

#[test]
fn full_page_attaches_everything() {
    let plan = SetupPlan::from_presence(full()).unwrap();
    assert!(plan.validate_input);
    assert!(plan.submit_on_click);
    assert!(plan.submit_on_shortcut);
    assert!(plan.upload_feedback);
    assert!(plan.reveal_result);
}

#[test]
fn missing_input_attaches_nothing() {
    assert_eq!(SetupPlan::from_presence(Presence { input: false, ..full() }), None);
}

#[test]
fn missing_submit_attaches_nothing() {
    assert_eq!(SetupPlan::from_presence(Presence { submit: false, ..full() }), None);
}

#[test]
fn empty_page_attaches_nothing() {
    assert_eq!(SetupPlan::from_presence(Presence::default()), None);
}

#[test]
fn upload_feedback_needs_chooser_and_label() {
    let no_label = SetupPlan::from_presence(Presence { upload_label: false, ..full() }).unwrap();
    assert!(!no_label.upload_feedback);
    let no_chooser = SetupPlan::from_presence(Presence { file_input: false, ..full() }).unwrap();
    assert!(!no_chooser.upload_feedback);
}

#[test]
fn missing_result_card_keeps_submit_behavior() {
    let plan = SetupPlan::from_presence(Presence { result: false, ..full() }).unwrap();
    assert!(plan.submit_on_click);
    assert!(!plan.reveal_result);
}

#[test]
fn badge_and_reply_are_optional() {
    let plan = SetupPlan::from_presence(Presence { badge: false, reply: false, ..full() });
    assert!(plan.is_some());
}
