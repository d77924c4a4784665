use frame_support::pallet_prelude::*;
use frame_support::{CloneNoBound, EqNoBound, PartialEqNoBound, RuntimeDebugNoBound};
use sp_std::vec;

use crate::survey::{OptionIndex, VoteCount};

pub type OptionCounters<T> = BoundedVec<VoteCount, <T as crate::Config>::MaxOptions>;

/// Per-option vote counters together with the running leader.
///
/// The counters are sized once from the option count and never grow. The leader
/// only moves when an option strictly exceeds the current leading count, so on a
/// tie the option that reached the count first keeps the lead.
#[derive(CloneNoBound, Encode, Decode, EqNoBound, PartialEqNoBound, RuntimeDebugNoBound, TypeInfo)]
#[scale_info(skip_type_params(T))]
pub struct Tally<T: crate::Config>
{
    /// Vote count per option position.
    pub counters: OptionCounters<T>,

    /// The number of accepted votes.
    pub total_votes: VoteCount,

    /// The position of the leading option.
    pub winning_option: OptionIndex,

    /// The vote count of the leading option.
    pub winning_votes: VoteCount
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TallyError
{
    /// The option is outside of the counters.
    InvalidOption,
    /// A counter would exceed `VoteCount::MAX`.
    Overflow
}

impl<T: crate::Config> Tally<T>
{
    /// A zeroed tally over `option_count` options.
    pub fn new(option_count: usize) -> Self
    {
        Tally {
            counters: BoundedVec::truncate_from(vec![0; option_count]),
            total_votes: 0,
            winning_option: 0,
            winning_votes: 0
        }
    }

    pub fn option_count(&self) -> usize
    {
        self.counters.len()
    }

    /// The vote count of `option`, if it is in range.
    pub fn votes(&self, option: OptionIndex) -> Option<VoteCount>
    {
        self.counters.get(option as usize).copied()
    }

    /// The leading (position, votes) pair.
    pub fn leader(&self) -> (OptionIndex, VoteCount)
    {
        (self.winning_option, self.winning_votes)
    }

    /// Counts a single vote for `option`. Nothing is modified on error.
    ///
    /// Returns true if the vote moved the lead to `option`.
    pub fn record(&mut self, option: OptionIndex) -> Result<bool, TallyError>
    {
        let total = self.total_votes.checked_add(1);
        let slot = self.counters
            .get_mut(option as usize)
            .ok_or(TallyError::InvalidOption)?;

        let count = slot.checked_add(1).ok_or(TallyError::Overflow)?;
        let total = total.ok_or(TallyError::Overflow)?;

        *slot = count;
        self.total_votes = total;

        if count > self.winning_votes
        {
            let changed = self.winning_option != option || self.winning_votes == 0;
            self.winning_option = option;
            self.winning_votes = count;
            return Ok(changed);
        }

        Ok(false)
    }

    /// True iff the total and the leader agree with the counters.
    pub fn is_consistent(&self) -> bool
    {
        let sum = self.counters
            .iter()
            .try_fold(0u32, |acc, count| acc.checked_add(*count));

        let max = self.counters.iter().copied().max().unwrap_or(0);

        let leader_matches = match self.counters.get(self.winning_option as usize)
        {
            Some(&count) => count == self.winning_votes,
            None => self.counters.is_empty() && self.winning_votes == 0
        };

        sum == Some(self.total_votes) && max == self.winning_votes && leader_matches
    }
}
