use crate::survey::{Survey, SurveyStatus, Timestamp};

/// Ways a lifecycle transition or check may be refused.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LifecycleError
{
    /// The survey has already left the `Created` state.
    AlreadyStarted,
    /// The survey is not (yet) `Ongoing`.
    NotStarted,
    /// The survey was ended or its voting window has lapsed.
    HasEnded
}

pub trait SurveyLifecycle: Sized
{
    /// Created -> Ongoing, stamping `now` as the start time.
    fn start(&mut self, now: Timestamp) -> Result<(), LifecycleError>;

    /// Ongoing -> Ended. The voting window need not have lapsed.
    fn end(&mut self) -> Result<(), LifecycleError>;

    /// Succeeds iff the survey is `Ongoing` and `now` is inside its voting window.
    fn ensure_open(&self, now: Timestamp) -> Result<(), LifecycleError>;

    /// The first instant at which votes are no longer accepted.
    fn closes_at(&self) -> Timestamp;

    fn is_open(&self, now: Timestamp) -> bool
    {
        self.ensure_open(now).is_ok()
    }
}

impl<T: crate::Config> SurveyLifecycle for Survey<T>
{
    fn start(&mut self, now: Timestamp) -> Result<(), LifecycleError>
    {
        if self.status != SurveyStatus::Created || self.start_time != 0
        {
            Err(LifecycleError::AlreadyStarted)?
        }

        self.start_time = now;
        self.status = SurveyStatus::Ongoing;

        Ok(())
    }

    fn end(&mut self) -> Result<(), LifecycleError>
    {
        if self.status != SurveyStatus::Ongoing { Err(LifecycleError::NotStarted)? }

        self.status = SurveyStatus::Ended;

        Ok(())
    }

    fn ensure_open(&self, now: Timestamp) -> Result<(), LifecycleError>
    {
        match self.status
        {
            SurveyStatus::Created => Err(LifecycleError::NotStarted),
            SurveyStatus::Ended => Err(LifecycleError::HasEnded),
            SurveyStatus::Ongoing if now >= self.closes_at() => Err(LifecycleError::HasEnded),
            SurveyStatus::Ongoing => Ok(())
        }
    }

    fn closes_at(&self) -> Timestamp
    {
        self.start_time.saturating_add(self.duration)
    }
}
