//! Property-based tests for the session orchestrator
//!
//! These drive the two submit halves directly, so every property holds
//! independently of any backend.

use super::*;
use crate::backend::DEFAULT_TOP_K;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\n]{0,8}"
}

fn arb_query() -> impl Strategy<Value = String> {
    "[ ]{0,3}[a-zA-Z0-9?][a-zA-Z0-9 ?]{0,40}"
}

fn arb_evidence() -> impl Strategy<Value = Evidence> {
    ("[A-Za-z ]{1,20}", "[a-z_]{1,20}", 0.0f64..1.0, "[a-zA-Z0-9 .]{0,60}").prop_map(
        |(section, service, score, text)| Evidence {
            section,
            service,
            score,
            text,
        },
    )
}

fn arb_response() -> impl Strategy<Value = AskResponse> {
    (
        proptest::option::of("[a-zA-Z0-9 .]{0,40}"),
        proptest::option::of(proptest::collection::vec(arb_evidence(), 0..5)),
        proptest::option::of(proptest::collection::vec("[a-z_]{1,15}", 0..4)),
    )
        .prop_map(|(answer, sources, next_steps)| AskResponse {
            answer,
            sources,
            next_steps,
        })
}

fn arb_outcome() -> impl Strategy<Value = Result<AskResponse, BackendError>> {
    prop_oneof![
        arb_response().prop_map(Ok),
        "[a-z ]{1,20}".prop_map(|m| Err(BackendError::network(m))),
        "[a-z ]{1,20}".prop_map(|m| Err(BackendError::decode(m))),
    ]
}

fn arb_service_filter() -> impl Strategy<Value = Option<Service>> {
    prop_oneof![
        Just(None),
        Just(Some(Service::RationCard)),
        Just(Some(Service::BirthCertificate)),
        Just(Some(Service::UnemploymentAllowance)),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_blank_input_never_changes_session(blank in arb_blank()) {
        let mut session = Session::new();
        prop_assert!(session.begin_submit(&blank).is_none());
        prop_assert!(session.turns().is_empty());
        prop_assert!(!session.is_pending());
    }

    #[test]
    fn prop_each_exchange_adds_two_turns(
        exchanges in proptest::collection::vec((arb_query(), arb_outcome()), 1..8)
    ) {
        let mut session = Session::new();
        for (query, outcome) in exchanges {
            let before = session.turns().len();
            session.set_draft(query.clone());

            let request = session.begin_submit(&query).unwrap();
            prop_assert_eq!(session.turns().len(), before + 1);
            prop_assert!(session.is_pending());
            prop_assert_eq!(&request.query, query.trim());

            session.finish_submit(outcome);
            prop_assert_eq!(session.turns().len(), before + 2);
            prop_assert!(!session.is_pending());
            prop_assert!(session.draft().is_empty());
        }
    }

    #[test]
    fn prop_turns_alternate_and_user_turns_are_bare(
        exchanges in proptest::collection::vec((arb_query(), arb_outcome()), 1..8)
    ) {
        let mut session = Session::new();
        for (query, outcome) in exchanges {
            session.begin_submit(&query);
            session.finish_submit(outcome);
        }

        for (i, turn) in session.turns().iter().enumerate() {
            let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
            prop_assert_eq!(turn.role(), expected);
            if turn.role() == Role::User {
                prop_assert!(turn.sources().is_empty());
                prop_assert!(turn.next_steps().is_empty());
            }
        }
    }

    #[test]
    fn prop_request_history_is_observed_prefix(
        exchanges in proptest::collection::vec((arb_query(), arb_outcome()), 1..6),
        filter in arb_service_filter(),
    ) {
        let mut session = Session::new().with_service_filter(filter);
        for (query, outcome) in exchanges {
            let observed_before: Vec<Turn> = session.turns().to_vec();
            let request = session.begin_submit(&query).unwrap();

            // Everything seen before, then exactly the new question
            prop_assert_eq!(request.history.len(), observed_before.len() + 1);
            prop_assert_eq!(&request.history[..observed_before.len()], &observed_before[..]);
            prop_assert_eq!(request.history.last().map(Turn::role), Some(Role::User));
            prop_assert_eq!(request.service, filter);
            prop_assert_eq!(request.top_k, DEFAULT_TOP_K);
            prop_assert!(request.include_sources);

            session.finish_submit(outcome);
        }
    }

    #[test]
    fn prop_failures_become_error_turns(
        query in arb_query(),
        message in "[a-z ]{1,20}",
    ) {
        let mut session = Session::new();
        session.begin_submit(&query).unwrap();
        session.finish_submit(Err(BackendError::server_error(message)));

        let last = session.turns().last().unwrap();
        prop_assert_eq!(last.role(), Role::Assistant);
        prop_assert_eq!(last.content(), CONNECTION_ERROR);
        prop_assert!(last.sources().is_empty());
        prop_assert!(last.next_steps().is_empty());
    }

    #[test]
    fn prop_success_preserves_server_data(query in arb_query(), response in arb_response()) {
        let mut session = Session::new();
        session.begin_submit(&query).unwrap();
        session.finish_submit(Ok(response.clone()));

        let last = session.turns().last().unwrap();
        let expected_sources = response.sources.unwrap_or_default();
        let expected_steps = response.next_steps.unwrap_or_default();
        prop_assert_eq!(last.sources(), &expected_sources[..]);
        prop_assert_eq!(last.next_steps(), &expected_steps[..]);
        match response.answer.filter(|a| !a.is_empty()) {
            Some(answer) => prop_assert_eq!(last.content(), answer.as_str()),
            None => prop_assert_eq!(last.content(), NO_ANSWER),
        }
    }

    #[test]
    fn prop_reentrant_begin_never_appends(first in arb_query(), second in arb_query()) {
        let mut session = Session::new();
        session.begin_submit(&first).unwrap();
        prop_assert!(session.begin_submit(&second).is_none());
        prop_assert_eq!(session.turns().len(), 1);
    }
}
