use std::cell::RefCell;

use serde_json::json;

use super::*;
use crate::error::{SubmitError, TransportError};

fn entity(value: serde_json::Value) -> Entity {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

fn name_email_binder() -> EntityFormBinder {
    EntityFormBinder::new(&[
        FieldSpec::required("name", "이름"),
        FieldSpec::required("email", "이메일"),
    ])
}

#[test]
fn first_empty_required_field_wins() {
    let mut binder = name_email_binder();
    binder.hydrate(&entity(json!({"name": "", "email": "a@b.com"})));

    let err = binder.collect().unwrap_err();
    assert_eq!(err.field, "name");
    assert_eq!(err.label, "이름");
    assert_eq!(binder.focus_request(), Some("name"));
}

#[test]
fn only_the_first_failure_is_reported() {
    let mut binder = name_email_binder();
    binder.hydrate(&entity(json!({"email": "", "name": ""})));

    let err = binder.collect().unwrap_err();
    assert_eq!(err.field, "email");
}

#[test]
fn payload_reflects_latest_set_field() {
    let mut binder = name_email_binder();
    binder.hydrate(&entity(json!({"name": "Kim", "email": "a@b.com"})));
    assert!(binder.set_field("name", "Lee"));

    let payload = binder.collect().unwrap();
    assert_eq!(payload.get("name"), Some("Lee"));
    assert_eq!(payload.get("email"), Some("a@b.com"));
    assert_eq!(
        payload.to_entity(),
        entity(json!({"name": "Lee", "email": "a@b.com"}))
    );
}

#[test]
fn binding_is_the_intersection_of_entity_and_declared_keys() {
    let mut binder = EntityFormBinder::new(&[
        FieldSpec::required("name", "이름"),
        FieldSpec::required("nickname", "닉네임"),
    ]);
    binder.hydrate(&entity(json!({"user_id": 7, "name": "Kim"})));

    assert_eq!(binder.model().bound_keys(), &["name".to_string()]);
    let payload = binder.collect().unwrap();
    assert_eq!(payload.keys().collect::<Vec<_>>(), vec!["name"]);
}

#[test]
fn payload_follows_entity_key_order() {
    let mut binder = EntityFormBinder::new(&[
        FieldSpec::required("a", "A"),
        FieldSpec::required("b", "B"),
        FieldSpec::required("c", "C"),
    ]);
    binder.hydrate(&entity(json!({"c": "3", "a": "1", "b": "2"})));

    let payload = binder.collect().unwrap();
    assert_eq!(payload.keys().collect::<Vec<_>>(), vec!["c", "a", "b"]);
}

#[test]
fn non_string_values_bind_by_their_text() {
    let mut binder = EntityFormBinder::new(&[
        FieldSpec::optional("zip", "우편번호"),
        FieldSpec::optional("note", "메모"),
        FieldSpec::optional("flag", "플래그"),
    ]);
    binder.hydrate(&entity(json!({"zip": 6236, "note": null, "flag": true})));

    assert_eq!(binder.value("zip"), Some("6236"));
    assert_eq!(binder.value("note"), Some(""));
    assert_eq!(binder.value("flag"), Some("true"));
}

#[test]
fn optional_fields_may_be_empty() {
    let mut binder = EntityFormBinder::new(&[
        FieldSpec::required("name", "이름"),
        FieldSpec::optional("memo", "메모"),
    ]);
    binder.hydrate(&entity(json!({"name": "Kim", "memo": ""})));

    let payload = binder.collect().unwrap();
    assert_eq!(payload.get("memo"), Some(""));
    assert_eq!(binder.focus_request(), None);
}

#[test]
fn set_field_ignores_undeclared_keys() {
    let mut binder = name_email_binder();
    assert!(!binder.set_field("password", "x"));
    assert_eq!(binder.value("password"), None);
}

#[test]
fn submit_is_rejected_before_hydration() {
    let mut binder = name_email_binder();
    let calls = RefCell::new(0);
    let sink = |_: &UpdatePayload| -> Result<(), TransportError> {
        *calls.borrow_mut() += 1;
        Ok(())
    };

    assert!(!binder.can_submit());
    let err = binder.submit(&sink).unwrap_err();
    assert!(matches!(err, SubmitError::NotReady));
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn invalid_submit_stays_hydrated_and_sends_nothing() {
    let mut binder = name_email_binder();
    binder.hydrate(&entity(json!({"name": "", "email": "a@b.com"})));
    let calls = RefCell::new(0);
    let sink = |_: &UpdatePayload| -> Result<(), TransportError> {
        *calls.borrow_mut() += 1;
        Ok(())
    };

    let err = binder.submit(&sink).unwrap_err();
    assert!(matches!(err, SubmitError::Invalid(ref v) if v.field == "name"));
    assert_eq!(binder.phase(), FormPhase::Hydrated);
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn failed_save_preserves_values_and_allows_retry() {
    let mut binder = name_email_binder();
    binder.hydrate(&entity(json!({"name": "Kim", "email": "a@b.com"})));
    binder.set_field("email", "new@b.com");

    let failing =
        |_: &UpdatePayload| -> Result<(), TransportError> { Err(TransportError::status("save", 502)) };
    let err = binder.submit(&failing).unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)));
    assert_eq!(binder.phase(), FormPhase::Failed);
    assert_eq!(binder.value("email"), Some("new@b.com"));
    assert!(binder.can_submit());

    let sent = RefCell::new(None);
    let recording = |p: &UpdatePayload| -> Result<(), TransportError> {
        *sent.borrow_mut() = Some(p.clone());
        Ok(())
    };
    binder.submit(&recording).unwrap();
    assert_eq!(binder.phase(), FormPhase::Hydrated);
    let sent = sent.into_inner().unwrap();
    assert_eq!(sent.get("email"), Some("new@b.com"));
}

#[test]
fn second_begin_while_submitting_is_busy() {
    let mut binder = name_email_binder();
    binder.hydrate(&entity(json!({"name": "Kim", "email": "a@b.com"})));

    let payload = binder.begin_submit().unwrap();
    assert_eq!(payload.len(), 2);
    assert_eq!(binder.phase(), FormPhase::Submitting);
    assert!(matches!(binder.begin_submit(), Err(SubmitError::Busy)));

    binder.finish_submit(Ok(())).unwrap();
    assert_eq!(binder.phase(), FormPhase::Hydrated);
    assert!(matches!(
        binder.finish_submit(Ok(())),
        Err(SubmitError::NotReady)
    ));
}

#[test]
fn payload_serializes_as_a_flat_object() {
    let mut binder = name_email_binder();
    binder.hydrate(&entity(json!({"name": "Kim", "email": "a@b.com"})));
    let payload = binder.collect().unwrap();

    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({"name": "Kim", "email": "a@b.com"})
    );
}

#[test]
fn hydrate_during_a_save_keeps_the_save_outcome() {
    let mut binder = name_email_binder();
    binder.hydrate(&entity(json!({"name": "kim", "email": "a@b.com"})));
    let payload = binder.begin_submit().unwrap();

    binder.hydrate(&entity(json!({"name": "lee", "email": "c@d.com"})));
    assert_eq!(binder.phase(), FormPhase::Submitting);
    assert_eq!(binder.value("name"), Some("kim"));

    let err = binder
        .finish_submit(Err(TransportError::status("update profile", 502)))
        .unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)));
    assert_eq!(binder.phase(), FormPhase::Failed);
    assert_eq!(payload.get("name"), Some("kim"));
}

#[test]
fn rehydrate_clears_fields_missing_from_the_new_entity() {
    let mut binder = name_email_binder();
    binder.hydrate(&entity(json!({"name": "kim", "email": "a@b.com"})));
    binder.hydrate(&entity(json!({"name": "lee"})));

    assert_eq!(binder.value("name"), Some("lee"));
    assert_eq!(binder.value("email"), Some(""));
    assert_eq!(binder.model().bound_keys(), ["name"]);
}
