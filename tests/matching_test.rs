//! Scenario tests for the stable matching engine.
//!
//! Covers the reference data set, boundary shapes and input rejection.

use stable_matching::{
    is_stable, stable_matching, validate, MatchingError, Participants, ProposingSide, Side,
    StableMatcher, StableMatching,
};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn reference_participants() -> Participants {
    Participants::new(
        Side::new("side_A")
            .with_member("abc", ["123", "451", "912"])
            .with_member("asd", ["123", "912", "451"])
            .with_member("pqq", ["123", "451", "912"]),
        Side::new("side_B")
            .with_member("123", ["pqq", "asd", "abc"])
            .with_member("451", ["asd", "pqq", "abc"])
            .with_member("912", ["pqq", "asd", "abc"]),
    )
}

/// Couples as (smaller, larger) identifier tuples, sorted
fn unordered(matching: &StableMatching) -> Vec<(String, String)> {
    let mut couples: Vec<_> = matching
        .iter()
        .map(|pair| {
            let (a, b) = pair.as_tuple();
            if a <= b {
                (a.to_owned(), b.to_owned())
            } else {
                (b.to_owned(), a.to_owned())
            }
        })
        .collect();
    couples.sort();
    couples
}

// ============================================================================
// REFERENCE SCENARIO
// ============================================================================

#[test]
fn reference_scenario_content() {
    let matching = stable_matching(&reference_participants()).unwrap();

    assert_eq!(
        unordered(&matching),
        vec![
            ("123".to_string(), "pqq".to_string()),
            ("451".to_string(), "abc".to_string()),
            ("912".to_string(), "asd".to_string()),
        ]
    );
    assert!(is_stable(&reference_participants(), &matching));
}

#[test]
fn reference_scenario_orientation_and_order() {
    let matching = stable_matching(&reference_participants()).unwrap();

    assert_eq!(matching.proposing, "side_A");
    assert_eq!(matching.receiving, "side_B");
    assert_eq!(
        matching.to_tuples(),
        vec![("abc", "451"), ("asd", "912"), ("pqq", "123")]
    );
}

#[test]
fn reference_scenario_from_json_document() {
    let document = r#"{
        "first": {
            "label": "side_A",
            "members": [
                { "id": "abc", "preferences": ["123", "451", "912"] },
                { "id": "asd", "preferences": ["123", "912", "451"] },
                { "id": "pqq", "preferences": ["123", "451", "912"] }
            ]
        },
        "second": {
            "label": "side_B",
            "members": [
                { "id": "123", "preferences": ["pqq", "asd", "abc"] },
                { "id": "451", "preferences": ["asd", "pqq", "abc"] },
                { "id": "912", "preferences": ["pqq", "asd", "abc"] }
            ]
        }
    }"#;

    let participants: Participants = serde_json::from_str(document).unwrap();
    assert_eq!(participants, reference_participants());

    let matching = stable_matching(&participants).unwrap();
    assert_eq!(matching.len(), 3);
}

// ============================================================================
// BOUNDARIES
// ============================================================================

#[test]
fn one_versus_one() {
    let participants = Participants::new(
        Side::new("A").with_member("x", ["y"]),
        Side::new("B").with_member("y", ["x"]),
    );

    let matching = stable_matching(&participants).unwrap();
    assert_eq!(matching.to_tuples(), vec![("x", "y")]);
}

#[test]
fn arbitrary_side_labels() {
    let participants = Participants::new(
        Side::new("students").with_member("s1", ["school"]),
        Side::new("schools").with_member("school", ["s1"]),
    );

    let matching = stable_matching(&participants).unwrap();
    assert_eq!(matching.proposing, "students");
    assert_eq!(matching.receiving, "schools");
}

#[test]
fn empty_sides_yield_empty_matching() {
    let participants = Participants::new(Side::new("A"), Side::new("B"));

    let result = StableMatcher::default().run(&participants).unwrap();
    assert!(result.matching.is_empty());
    assert_eq!(result.receipt.proposals, 0);
}

#[test]
fn extra_receiver_is_left_out() {
    // Every proposer ranks the extra receiver last
    let participants = Participants::new(
        Side::new("A")
            .with_member("a", ["x", "y", "spare"])
            .with_member("b", ["y", "x", "spare"]),
        Side::new("B")
            .with_member("x", ["a", "b"])
            .with_member("y", ["a", "b"])
            .with_member("spare", ["a", "b"]),
    );

    let result = StableMatcher::default().run(&participants).unwrap();

    assert_eq!(result.matching.to_tuples(), vec![("a", "x"), ("b", "y")]);
    assert!(!result.matching.is_matched("spare"));
    assert_eq!(result.receipt.unmatched_receivers, 1);
    assert_eq!(result.receipt.unmatched_proposers, 0);
    assert!(is_stable(&participants, &result.matching));
}

#[test]
fn extra_proposer_is_left_out() {
    let participants = Participants::new(
        Side::new("A")
            .with_member("a", ["x", "y"])
            .with_member("b", ["x", "y"])
            .with_member("c", ["x", "y"]),
        Side::new("B")
            .with_member("x", ["c", "b", "a"])
            .with_member("y", ["b", "c", "a"]),
    );

    let result = StableMatcher::default().run(&participants).unwrap();

    assert_eq!(result.matching.to_tuples(), vec![("b", "y"), ("c", "x")]);
    assert_eq!(result.receipt.unmatched_proposers, 1);
    assert!(!result.receipt.is_perfect());
    assert!(is_stable(&participants, &result.matching));
}

#[test]
fn identifiers_shared_across_sides() {
    let participants = Participants::new(
        Side::new("A")
            .with_member("x", ["a", "x"])
            .with_member("z", ["x", "a"]),
        Side::new("B")
            .with_member("a", ["x", "z"])
            .with_member("x", ["z", "x"]),
    );

    let matching = stable_matching(&participants).unwrap();

    assert_eq!(matching.to_tuples(), vec![("x", "a"), ("z", "x")]);
    assert_eq!(matching.receiver_of("x"), Some("a"));
    assert_eq!(matching.proposer_of("x"), Some("z"));
    assert!(is_stable(&participants, &matching));
}

// ============================================================================
// REJECTION
// ============================================================================

#[test]
fn missing_preference_is_rejected() {
    let mut participants = reference_participants();
    participants.first.members[0].preferences.retain(|p| p != "912");

    assert!(!validate(&participants));
    let err = stable_matching(&participants).unwrap_err();
    assert!(err.is_missing_preferences());
    assert_eq!(
        err,
        MatchingError::MissingPreferences {
            side: "side_A".into(),
            participant: "abc".into(),
            missing: "912".into(),
        }
    );
}

#[test]
fn missing_preference_is_rejected_for_either_proposing_side() {
    let mut participants = reference_participants();
    participants.second.members[1].preferences.clear();

    for proposing in [ProposingSide::First, ProposingSide::Second] {
        let err = StableMatcher::proposing(proposing)
            .run(&participants)
            .unwrap_err();
        assert!(err.is_missing_preferences());
    }
}

#[test]
fn unknown_participant_is_rejected() {
    let mut participants = reference_participants();
    participants.second.members[0].preferences.push("zzz".into());

    assert_eq!(
        stable_matching(&participants),
        Err(MatchingError::UnknownParticipant {
            side: "side_B".into(),
            participant: "123".into(),
            unknown: "zzz".into(),
        })
    );
}

#[test]
fn duplicate_side_label_is_rejected() {
    let participants = Participants::new(
        Side::new("same").with_member("x", ["y"]),
        Side::new("same").with_member("y", ["x"]),
    );

    assert!(matches!(
        stable_matching(&participants),
        Err(MatchingError::DuplicateSideLabel { .. })
    ));
}

// ============================================================================
// PROPOSING SIDE
// ============================================================================

#[test]
fn proposing_side_decides_between_stable_matchings() {
    // Two stable matchings exist: {a-x, b-y} and {a-y, b-x}
    let participants = Participants::new(
        Side::new("A")
            .with_member("a", ["x", "y"])
            .with_member("b", ["y", "x"]),
        Side::new("B")
            .with_member("x", ["b", "a"])
            .with_member("y", ["a", "b"]),
    );

    let first = StableMatcher::proposing(ProposingSide::First)
        .stable_matching(&participants)
        .unwrap();
    assert_eq!(first.to_tuples(), vec![("a", "x"), ("b", "y")]);

    let second = StableMatcher::proposing(ProposingSide::Second)
        .stable_matching(&participants)
        .unwrap();
    assert_eq!(second.to_tuples(), vec![("x", "b"), ("y", "a")]);

    assert!(is_stable(&participants, &first));
    assert!(is_stable(&participants, &second));
}
