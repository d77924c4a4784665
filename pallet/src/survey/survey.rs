use frame_support::pallet_prelude::*;
use frame_support::{CloneNoBound, EqNoBound, PartialEqNoBound, RuntimeDebugNoBound};

use crate::survey::Tally;

pub type SurveyId = u32;
pub type Timestamp = u64;
pub type Duration = u64;
pub type OptionIndex = u32;
pub type VoteCount = u32;
pub type Genre<T> = BoundedVec<u8, <T as crate::Config>::MaxGenreLength>;
pub type Label<T> = BoundedVec<u8, <T as crate::Config>::MaxLabelLength>;
pub type SurveyOptions<T> = BoundedVec<Label<T>, <T as crate::Config>::MaxOptions>;

/// The longest a survey may remain open once started (one week, in seconds).
pub const MAX_SURVEY_DURATION: Duration = 604_800;

/// Position of a survey within its lifecycle. Only ever moves forward.
#[derive(Clone, Copy, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen, Default)]
pub enum SurveyStatus
{
    /// Accepting no votes until the creator starts it.
    #[default]
    Created,

    /// Open for voting until `start_time + duration` or until ended.
    Ongoing,

    /// Terminal.
    Ended
}

/// Survey storage definition.
#[derive(CloneNoBound, Encode, Decode, EqNoBound, PartialEqNoBound, RuntimeDebugNoBound, TypeInfo)]
#[scale_info(skip_type_params(T))]
pub struct Survey<T: crate::Config>
{
    /// The survey id.
    pub index: SurveyId,

    /// The survey creator.
    pub creator: T::AccountId,

    /// The lifecycle state.
    pub status: SurveyStatus,

    /// Descriptive text supplied at creation.
    pub genre: Genre<T>,

    /// The selectable options, identified by position.
    pub options: SurveyOptions<T>,

    /// The unix time (in seconds) at which voting opened, zero until started.
    pub start_time: Timestamp,

    /// The number of seconds voting stays open once started.
    pub duration: Duration,

    /// Per-option counters and the running leader.
    pub tally: Tally<T>
}

impl<T: crate::Config> Survey<T>
{
    pub fn new(
        index: SurveyId,
        creator: T::AccountId,
        genre: Genre<T>,
        options: SurveyOptions<T>,
        duration: Duration
    ) -> Self
    {
        let tally = Tally::new(options.len());
        Survey {
            index,
            creator,
            status: SurveyStatus::Created,
            genre,
            options,
            start_time: 0,
            duration,
            tally
        }
    }

    /// The label at `option`, if it is in range.
    pub fn label(&self, option: OptionIndex) -> Option<&Label<T>>
    {
        self.options.get(option as usize)
    }

    /// A read-only view without the tally.
    pub fn details(&self) -> SurveyDetails<T>
    {
        SurveyDetails {
            creator: self.creator.clone(),
            genre: self.genre.clone(),
            options: self.options.clone(),
            start_time: self.start_time,
            duration: self.duration,
            status: self.status
        }
    }
}

/// Snapshot returned by survey queries.
#[derive(CloneNoBound, Encode, Decode, EqNoBound, PartialEqNoBound, RuntimeDebugNoBound, TypeInfo)]
#[scale_info(skip_type_params(T))]
pub struct SurveyDetails<T: crate::Config>
{
    pub creator: T::AccountId,
    pub genre: Genre<T>,
    pub options: SurveyOptions<T>,
    pub start_time: Timestamp,
    pub duration: Duration,
    pub status: SurveyStatus
}
