//! Envelope construction and the push/team delivery scenarios.

use pretty_assertions::assert_eq;
use storm_core::entities::Resource;
use storm_core::events::{OrganizationScoped, PushEvent, TeamEvent, WatchEvent};
use storm_core::enums::TeamAction;
use storm_core::{Event, PayloadType, TypedEvent};
use storm_schema::{DecodeError, DecodeErrorKind, Envelope, PayloadRegistry};
use uuid::Uuid;

const PUSH: &str = include_str!("fixtures/push.json");
const TEAM: &str = include_str!("fixtures/team.json");

fn delivery_id() -> Uuid {
    Uuid::parse_str("72d3162e-cc78-11e3-81ab-4c9367dc0958").unwrap()
}

#[test]
fn push_delivery_decodes_literal_values() {
    let push: PushEvent = PayloadRegistry::global().decode_as(PUSH.as_bytes()).unwrap();

    assert_eq!(push.reference(), "refs/heads/changes");
    assert_eq!(push.before(), "9049f1265b7d61be4a8904a9a27120d2064dab3b");
    assert_eq!(push.after(), "0d1a26e67d8f5eaf1f6ba5c57fc3c7d91ac0fd1c");
    assert!(!push.is_forced());
    assert!(!push.is_created());
    assert!(!push.is_deleted());
    assert_eq!(push.base_ref(), None);
    assert_eq!(push.commits().len(), 1);
    assert_eq!(
        push.compare().as_str(),
        "https://github.com/baxterthehacker/public-repo/compare/9049f1265b7d...0d1a26e67d8f"
    );

    let head = push.head_commit().unwrap();
    assert_eq!(head.id(), push.after());
    assert_eq!(head.committer(), None, "committer equal to author collapses");
    assert_eq!(head.effective_committer(), head.author());
    assert_eq!(push.scoped_repository().unwrap().full_name(), "baxterthehacker/public-repo");
}

#[test]
fn team_delivery_without_repository() {
    let envelope =
        Envelope::decode(PayloadRegistry::global(), delivery_id(), "team", TEAM.as_bytes())
            .unwrap();
    assert_eq!(envelope.payload_type(), PayloadType::Team);
    assert!(envelope.event().repository().is_none());

    let team = envelope.event_as::<TeamEvent>().unwrap();
    assert_eq!(team.action(), TeamAction::Created);
    assert_eq!(team.team().slug(), "github");
    assert_eq!(team.organization().login(), "baxterandthehackers");
    assert!(team.repository().is_none());
}

#[test]
fn envelope_exposes_its_parts_unchanged() {
    let event = PayloadRegistry::global().decode("push", PUSH).unwrap();
    let envelope = Envelope::new(delivery_id(), PayloadType::Push, event.clone()).unwrap();

    assert_eq!(envelope.delivery_id(), delivery_id());
    assert_eq!(envelope.payload_type(), PayloadType::Push);
    assert_eq!(envelope.event(), &event);
    assert!(envelope.event_as::<WatchEvent>().is_none());
    assert_eq!(envelope.into_event(), event);
}

#[test]
fn envelope_rejects_mismatched_payload_type() {
    let event = PayloadRegistry::global().decode("team", TEAM).unwrap();
    let err = Envelope::new(delivery_id(), PayloadType::Push, event).unwrap_err();

    assert_eq!(err.kind(), DecodeErrorKind::SchemaMismatch);
    let DecodeError::SchemaMismatch {
        payload_type,
        expected,
        actual,
    } = err
    else {
        panic!("expected SchemaMismatch");
    };
    assert_eq!(payload_type, PayloadType::Push);
    assert_eq!(expected, std::any::type_name::<PushEvent>());
    assert_eq!(actual, std::any::type_name::<TeamEvent>());
}

#[test]
fn envelope_checks_against_a_caller_registry() {
    let registry = PayloadRegistry::new();
    let event: Event = registry.decode_as::<TeamEvent>(TEAM.as_bytes()).unwrap().into();
    assert!(Envelope::with_registry(&registry, delivery_id(), PayloadType::Team, event.clone()).is_ok());
    assert!(Envelope::with_registry(&registry, delivery_id(), PayloadType::TeamAdd, event).is_err());
}

#[test]
fn envelopes_compare_structurally() {
    let registry = PayloadRegistry::global();
    let first = Envelope::decode(registry, delivery_id(), "push", PUSH.as_bytes()).unwrap();
    let second = Envelope::decode(registry, delivery_id(), "PUSH", PUSH.as_bytes()).unwrap();
    assert_eq!(first, second);

    let other = Envelope::decode(registry, Uuid::new_v4(), "push", PUSH.as_bytes()).unwrap();
    assert_ne!(first, other);
}

#[test]
fn envelope_serializes_with_its_tag() {
    let envelope = Envelope::decode(PayloadRegistry::global(), delivery_id(), "team", TEAM.as_bytes())
        .unwrap();
    let value = serde_json::to_value(&envelope).unwrap();
    assert_eq!(value["delivery_id"], "72d3162e-cc78-11e3-81ab-4c9367dc0958");
    assert_eq!(value["payload_type"], "team");
    assert_eq!(value["event"]["action"], "created");
    assert_eq!(value["event"]["team"]["id"], "836012");
}
