use frame_support::{assert_ok, BoundedVec};
use crate::{
    mock::*,
    Label,
    SurveyId
};

/// Moves the mock clock forward by `secs` seconds.
pub fn advance_time(secs: u64)
{
    MockTime::advance(secs);
}

pub fn label(bytes: &[u8]) -> Label<Test>
{
    BoundedVec::truncate_from(bytes.to_vec())
}

pub fn default_options() -> Vec<Vec<u8>>
{
    vec![b"Movie1".to_vec(), b"Movie2".to_vec()]
}

/// Creates and starts the default survey, returning its id.
pub fn start_default_survey(creator: u64) -> SurveyId
{
    let survey_id = create_default_survey(creator).expect("default survey is valid");
    assert_ok!(Surveys::start_survey(RuntimeOrigin::signed(creator), survey_id));
    survey_id
}

/// Asserts the stored surveys still satisfy every pallet invariant.
pub fn assert_invariants()
{
    assert_ok!(Surveys::do_try_state());
}
