use super::*;
use frame_benchmarking::{account, benchmarks, whitelisted_caller};
use frame_support::traits::Get;
use frame_system::RawOrigin;
use sp_std::vec::Vec;

use crate::Pallet as Surveys;

fn options<T: Config>(count: u32) -> Vec<Vec<u8>>
{
    let length = T::MaxLabelLength::get() as usize;
    (0..count)
        .map(|i| {
            let mut label = Vec::from(i.to_be_bytes());
            label.resize(length.max(4), b'o');
            label.truncate(length);
            label
        })
        .collect()
}

fn ongoing_survey<T: Config>(creator: &T::AccountId) -> Result<SurveyId, frame_benchmarking::BenchmarkError>
{
    let survey_id = Surveys::<T>::do_create_survey(
        creator,
        b"genre".to_vec(),
        options::<T>(T::MaxOptions::get()),
        T::MaxDuration::get()
    )?;
    Surveys::<T>::do_start_survey(creator, survey_id)?;
    Ok(survey_id)
}

benchmarks!
{
    create_survey {
        let n in 1 .. T::MaxOptions::get();
        let caller: T::AccountId = whitelisted_caller();
        let genre = sp_std::vec![b'g'; T::MaxGenreLength::get() as usize];
    }: _(RawOrigin::Signed(caller.clone()), genre, options::<T>(n), T::MaxDuration::get())
    verify {
        assert!(!Surveys::<T>::survey_ids(&caller).is_empty());
    }

    start_survey {
        let caller: T::AccountId = whitelisted_caller();
        let survey_id = Surveys::<T>::do_create_survey(&caller, b"genre".to_vec(), options::<T>(1), 60)?;
    }: _(RawOrigin::Signed(caller), survey_id)
    verify {
        assert_eq!(Surveys::<T>::survey(survey_id)?.status, SurveyStatus::Ongoing);
    }

    end_survey {
        let caller: T::AccountId = whitelisted_caller();
        let survey_id = ongoing_survey::<T>(&caller)?;
    }: _(RawOrigin::Signed(caller), survey_id)
    verify {
        assert_eq!(Surveys::<T>::survey(survey_id)?.status, SurveyStatus::Ended);
    }

    vote {
        let creator: T::AccountId = account("creator", 0, 0);
        let caller: T::AccountId = whitelisted_caller();
        let survey_id = ongoing_survey::<T>(&creator)?;
        let last = T::MaxOptions::get() - 1;
    }: _(RawOrigin::Signed(caller.clone()), survey_id, last)
    verify {
        assert!(Surveys::<T>::has_voted(survey_id, &caller));
    }

    pause {
        let caller: T::AccountId = whitelisted_caller();
        Administrator::<T>::put(&caller);
    }: _(RawOrigin::Signed(caller))
    verify {
        assert!(Surveys::<T>::is_paused());
    }

    unpause {
        let caller: T::AccountId = whitelisted_caller();
        Administrator::<T>::put(&caller);
        IsPaused::<T>::put(true);
    }: _(RawOrigin::Signed(caller))
    verify {
        assert!(!Surveys::<T>::is_paused());
    }

    impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test)
}
