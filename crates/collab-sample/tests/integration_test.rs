use collab_framework::{require, Collaborator, MockCollaborator, MockError};
use collab_sample::{require_bravo, Alpha, Bravo};

/// Scenario: construct the local marker, then exercise its print capability.
#[test]
fn construct_then_print_local_marker() {
    let alpha = Alpha::new();
    assert!(!alpha.to_string().is_empty(), "textual form must not be empty");
    alpha.print();
}

/// Scenario: the delegation entry point drives the external collaborator.
///
/// Completion is the assertion: `Bravo`'s capabilities are total and the
/// failure arm is uninhabited at the type level.
#[test]
fn delegation_entry_point_runs_to_completion() {
    require_bravo();
}

/// The generic delegation constructs its collaborator and invokes the print
/// capability exactly once, proven with the recording mock, since the real
/// collaborator only writes to stdout.
#[test]
fn delegation_constructs_and_prints_exactly_once() {
    MockCollaborator::reset();

    require::<MockCollaborator>().expect("unscripted mock capabilities are total");

    assert_eq!(MockCollaborator::constructed(), 1);
    assert_eq!(MockCollaborator::printed(), 1);
    MockCollaborator::verify();
}

/// Delegating to the external collaborator has no observable effect on the
/// local component's state.
#[test]
fn delegation_does_not_disturb_local_state() {
    let alpha = Alpha::new();
    let before = alpha.to_string();

    require_bravo();

    assert_eq!(alpha.to_string(), before);
    assert_eq!(alpha, Alpha::new());
}

/// Repeated construction yields independently owned, behaviorally
/// indistinguishable markers.
#[test]
fn repeated_construction_is_idempotent() {
    let markers = [Alpha::new(), Alpha::new(), Alpha::new()];
    for marker in markers {
        assert_eq!(marker, Alpha::new());
        assert_eq!(marker.to_string(), "Alpha");
    }
}

/// A collaborator failure surfaces from the delegation unchanged, and a
/// failed construct never reaches the print capability.
#[test]
fn collaborator_failures_surface_unchanged() {
    MockCollaborator::reset();
    MockCollaborator::fail_next_construct("collaborator offline");

    let err = require::<MockCollaborator>().unwrap_err();

    assert_eq!(err, MockError::Construct("collaborator offline".to_string()));
    assert_eq!(MockCollaborator::printed(), 0);
    MockCollaborator::verify();
}

/// Both concrete markers satisfy the seam with total capabilities.
#[test]
fn both_markers_satisfy_the_seam() {
    let alpha = <Alpha as Collaborator>::construct().expect("construction is total");
    assert_eq!(alpha.to_string(), "Alpha");

    let bravo = <Bravo as Collaborator>::construct().expect("construction is total");
    assert_eq!(bravo.to_string(), "Bravo");
}
