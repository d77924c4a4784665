use frame_support::{
    assert_noop,
    assert_ok,
    error
};
use crate::{
    mock::*,
    Error,
    Event
};
use crate::tests::{
    default_options,
    start_default_survey
};

/// Pausing blocks creation until unpaused, and the id sequence is unaffected.
#[test]
fn pause_blocks_creation()
{
    new_test_ext().execute_with(|| {
        assert_ok!(Surveys::pause(RuntimeOrigin::signed(ADMIN)));
        System::assert_last_event(Event::Paused { by: ADMIN }.into());
        assert!(Surveys::is_paused());

        assert_noop!(Surveys::create_survey(RuntimeOrigin::signed(ALICE), b"Action".to_vec(), default_options(), 3_600), Error::<Test>::Paused);

        assert_ok!(Surveys::unpause(RuntimeOrigin::signed(ADMIN)));
        System::assert_last_event(Event::Unpaused { by: ADMIN }.into());
        assert!(!Surveys::is_paused());

        assert_ok!(Surveys::create_survey(RuntimeOrigin::signed(ALICE), b"Action".to_vec(), default_options(), 3_600));
        System::assert_last_event(Event::SurveyCreated { survey_id: 1, creator: ALICE }.into());
    })
}

/// Pausing blocks every lifecycle transition and vote.
#[test]
fn pause_blocks_transitions()
{
    new_test_ext().execute_with(|| {
        let ongoing = start_default_survey(ALICE);
        let created = create_default_survey(ALICE).unwrap();

        assert_ok!(Surveys::pause(RuntimeOrigin::signed(ADMIN)));

        assert_noop!(Surveys::start_survey(RuntimeOrigin::signed(ALICE), created), Error::<Test>::Paused);
        assert_noop!(Surveys::vote(RuntimeOrigin::signed(BOB), ongoing, 0), Error::<Test>::Paused);
        assert_noop!(Surveys::end_survey(RuntimeOrigin::signed(ALICE), ongoing), Error::<Test>::Paused);

        // The pause check comes first, even for unknown surveys.
        assert_noop!(Surveys::vote(RuntimeOrigin::signed(BOB), 42, 0), Error::<Test>::Paused);

        assert_ok!(Surveys::unpause(RuntimeOrigin::signed(ADMIN)));
        assert_ok!(Surveys::vote(RuntimeOrigin::signed(BOB), ongoing, 0));
        assert_ok!(Surveys::end_survey(RuntimeOrigin::signed(ALICE), ongoing));
        assert_ok!(Surveys::start_survey(RuntimeOrigin::signed(ALICE), created));
    })
}

/// Reads are never gated by the pause switch.
#[test]
fn pause_allows_queries()
{
    new_test_ext().execute_with(|| {
        let survey_id = start_default_survey(ALICE);
        assert_ok!(Surveys::vote(RuntimeOrigin::signed(BOB), survey_id, 1));
        assert_ok!(Surveys::pause(RuntimeOrigin::signed(ADMIN)));

        assert!(Surveys::survey(survey_id).is_ok());
        assert!(Surveys::leading_option(survey_id).is_ok());
        assert!(Surveys::has_voted(survey_id, &BOB));
        assert_eq!(Surveys::survey_ids(&ALICE), vec![survey_id]);
    })
}

/// Only the administrator may pause or unpause.
#[test]
fn pause_unauthorized()
{
    new_test_ext().execute_with(|| {
        assert_noop!(Surveys::pause(RuntimeOrigin::signed(ALICE)), Error::<Test>::Unauthorized);
        assert_noop!(Surveys::unpause(RuntimeOrigin::signed(ALICE)), Error::<Test>::Unauthorized);
        assert_noop!(Surveys::pause(RuntimeOrigin::none()), error::BadOrigin);

        assert_ok!(Surveys::pause(RuntimeOrigin::signed(ADMIN)));
        assert_noop!(Surveys::unpause(RuntimeOrigin::signed(BOB)), Error::<Test>::Unauthorized);
        assert!(Surveys::is_paused());
    })
}

/// Pausing while paused is accepted and simply re-asserts the switch.
#[test]
fn pause_twice()
{
    new_test_ext().execute_with(|| {
        assert_ok!(Surveys::pause(RuntimeOrigin::signed(ADMIN)));
        assert_ok!(Surveys::pause(RuntimeOrigin::signed(ADMIN)));
        System::assert_last_event(Event::Paused { by: ADMIN }.into());
        assert!(Surveys::is_paused());

        assert_ok!(Surveys::unpause(RuntimeOrigin::signed(ADMIN)));
        assert_ok!(Surveys::unpause(RuntimeOrigin::signed(ADMIN)));
        assert!(!Surveys::is_paused());
    })
}

/// Without a genesis administrator nobody can toggle the switch.
#[test]
fn pause_without_administrator()
{
    new_test_ext_with(None, false).execute_with(|| {
        assert_eq!(Surveys::administrator(), None);
        assert_noop!(Surveys::pause(RuntimeOrigin::signed(ADMIN)), Error::<Test>::Unauthorized);
        assert_ok!(create_default_survey(ALICE));
    })
}

/// The switch can be set at genesis.
#[test]
fn paused_at_genesis()
{
    new_test_ext_with(Some(ADMIN), true).execute_with(|| {
        assert_eq!(Surveys::administrator(), Some(ADMIN));
        assert!(Surveys::is_paused());
        assert_noop!(Surveys::create_survey(RuntimeOrigin::signed(ALICE), b"Action".to_vec(), default_options(), 3_600), Error::<Test>::Paused);

        assert_ok!(Surveys::unpause(RuntimeOrigin::signed(ADMIN)));
        assert_eq!(create_default_survey(ALICE), Ok(1));
    })
}
