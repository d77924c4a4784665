use frame_support::pallet_prelude::*;
use sp_std::marker::PhantomData;

use crate::{Administrator, CallLock, Config, Error, IsPaused, Pallet, SurveyStore};
use crate::survey::{Survey, SurveyId};

impl<T: Config> Pallet<T>
{
    /// True iff `who` is the administrator recorded at genesis.
    pub fn is_administrator(who: &T::AccountId) -> bool
    {
        Administrator::<T>::get().as_ref() == Some(who)
    }

    /// True iff survey `survey_id` exists and was created by `who`.
    pub fn is_survey_creator(who: &T::AccountId, survey_id: SurveyId) -> bool
    {
        SurveyStore::<T>::get(survey_id)
            .is_some_and(|survey| Self::ensure_survey_creator(who, &survey).is_ok())
    }

    pub(crate) fn ensure_administrator(who: &T::AccountId) -> DispatchResult
    {
        ensure!(Self::is_administrator(who), Error::<T>::Unauthorized);
        Ok(())
    }

    pub(crate) fn ensure_survey_creator(who: &T::AccountId, survey: &Survey<T>) -> DispatchResult
    {
        ensure!(&survey.creator == who, Error::<T>::Unauthorized);
        Ok(())
    }

    pub(crate) fn ensure_not_paused() -> DispatchResult
    {
        ensure!(!IsPaused::<T>::get(), Error::<T>::Paused);
        Ok(())
    }
}

/// Holds the pallet call lock for as long as it is alive.
///
/// The lock is released on drop, so every exit path of the guarded call
/// (including early error returns) frees it.
#[must_use]
pub struct CallGuard<T: Config>(PhantomData<T>);

impl<T: Config> CallGuard<T>
{
    pub fn acquire() -> Result<Self, DispatchError>
    {
        ensure!(!CallLock::<T>::get(), Error::<T>::ReentrancyBlocked);
        CallLock::<T>::put(true);
        Ok(CallGuard(PhantomData))
    }
}

impl<T: Config> Drop for CallGuard<T>
{
    fn drop(&mut self)
    {
        CallLock::<T>::kill();
    }
}
