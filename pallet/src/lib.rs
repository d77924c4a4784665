#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;
use sp_std::vec;
use frame_support::traits::UnixTime;

pub mod guard;
pub mod survey;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
pub mod benchmarking;

pub use guard::CallGuard;
pub use survey::*;
pub use weights::WeightInfo;

pub(crate) const LOG_TARGET: &str = "runtime::surveys";

#[frame_support::pallet]
pub mod pallet
{
	use super::*;
	use frame_support::pallet_prelude::*;
	use frame_support::traits::BuildGenesisConfig;
	use frame_system::pallet_prelude::*;
	use sp_runtime::ArithmeticError;

	const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

	#[pallet::pallet]
	#[pallet::storage_version(STORAGE_VERSION)]
	#[pallet::without_storage_info]
	pub struct Pallet<T>(_);

	#[pallet::config]
	pub trait Config: frame_system::Config
	{
		/// The overarching event type.
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

		/// Permit access to the current unix time. Surveys read it in whole seconds.
		type TimeProvider: UnixTime;

		/// The maximum number of options a survey may offer.
		#[pallet::constant]
		type MaxOptions: Get<u32>;

		/// The maximum length (in bytes) of a single option label.
		#[pallet::constant]
		type MaxLabelLength: Get<u32>;

		/// The maximum length (in bytes) of a survey genre.
		#[pallet::constant]
		type MaxGenreLength: Get<u32>;

		/// The maximum number of seconds a survey may stay open.
		#[pallet::constant]
		type MaxDuration: Get<Duration>;

		/// Weight information for the pallet calls.
		type WeightInfo: WeightInfo;
	}

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config>
	{
		/// A new survey was created.
		SurveyCreated {
			/// The survey id.
			survey_id: SurveyId,
			/// The survey creator.
			creator: T::AccountId
		},

		/// A survey was opened for voting.
		SurveyStarted {
			/// The survey id.
			survey_id: SurveyId
		},

		/// A survey was closed by its creator.
		SurveyEnded {
			/// The survey id.
			survey_id: SurveyId,
			/// The position of the winning option.
			winning_option: OptionIndex,
			/// The number of votes the winning option received.
			winning_votes: VoteCount
		},

		/// A vote was accepted.
		Voted {
			/// The survey id.
			survey_id: SurveyId,
			/// The label of the chosen option.
			option: Label<T>,
			/// The voter.
			voter: T::AccountId
		},

		/// Surveys were paused.
		Paused {
			/// The administrator.
			by: T::AccountId
		},

		/// Surveys were unpaused.
		Unpaused {
			/// The administrator.
			by: T::AccountId
		}
	}

	#[pallet::error]
	pub enum Error<T>
	{
		/// The caller lacks the required role.
		Unauthorized,

		/// Survey has already been started.
		SurveyAlreadyStarted,

		/// Survey is not currently ongoing.
		SurveyNotStarted,

		/// Survey was ended or its voting window has lapsed.
		SurveyHasEnded,

		/// Survey does not exist.
		SurveyDoesNotExist,

		/// Survey parameters are malformed.
		InvalidInput,

		/// The option is not part of the survey.
		InvalidOptionId,

		/// The caller has already voted in this survey.
		AlreadyVoted,

		/// Survey creators may not vote in their own survey.
		CreatorCannotVote,

		/// Surveys are paused.
		Paused,

		/// A guarded call was re-entered.
		ReentrancyBlocked
	}

	impl<T> From<LifecycleError> for Error<T>
	{
		fn from(error: LifecycleError) -> Self
		{
			match error
			{
				LifecycleError::AlreadyStarted => Error::<T>::SurveyAlreadyStarted,
				LifecycleError::NotStarted => Error::<T>::SurveyNotStarted,
				LifecycleError::HasEnded => Error::<T>::SurveyHasEnded
			}
		}
	}

	/// Map of ids to surveys. The counter doubles as the id source.
	#[pallet::storage]
	pub type SurveyStore<T: Config> = CountedStorageMap<
		_,
		Twox64Concat,
		SurveyId,
		Survey<T>
	>;

	/// Whether an account has voted in a survey.
	#[pallet::storage]
	pub type Participation<T: Config> = StorageDoubleMap<
		_,
		Twox64Concat,
		SurveyId,
		Blake2_128Concat,
		T::AccountId,
		bool,
		ValueQuery
	>;

	/// Map of creators to the survey ids they created, in creation order.
	#[pallet::storage]
	pub type CreatorSurveyIds<T: Config> = StorageMap<
		_,
		Blake2_128Concat,
		T::AccountId,
		vec::Vec<SurveyId>,
		ValueQuery
	>;

	/// The account permitted to pause and unpause.
	#[pallet::storage]
	pub type Administrator<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

	/// Whether state changing survey calls are rejected.
	#[pallet::storage]
	pub type IsPaused<T: Config> = StorageValue<_, bool, ValueQuery>;

	/// Set for the extent of a guarded call.
	#[pallet::storage]
	pub type CallLock<T: Config> = StorageValue<_, bool, ValueQuery>;

	#[pallet::genesis_config]
	#[derive(frame_support::DefaultNoBound)]
	pub struct GenesisConfig<T: Config>
	{
		/// The account permitted to pause and unpause.
		pub administrator: Option<T::AccountId>,

		/// Whether surveys start out paused.
		pub paused: bool
	}

	#[pallet::genesis_build]
	impl<T: Config> BuildGenesisConfig for GenesisConfig<T>
	{
		fn build(&self)
		{
			if let Some(ref administrator) = self.administrator
			{
				Administrator::<T>::put(administrator);
			}
			IsPaused::<T>::put(self.paused);
		}
	}

	#[pallet::hooks]
	impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T>
	{
		#[cfg(feature = "try-runtime")]
		fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError>
		{
			Self::do_try_state()
		}
	}

	#[pallet::call]
	impl<T: Config> Pallet<T>
	{
		/// Create a new survey where the caller is the creator.
		///
		/// - `genre`: Descriptive text.
		/// - `options`: The option labels, at least one.
		/// - `duration`: Seconds the survey stays open once started, in `1..=MaxDuration`.
		///
		/// Emits `SurveyCreated`.
		#[pallet::call_index(0)]
		#[pallet::weight(T::WeightInfo::create_survey(options.len() as u32))]
		pub fn create_survey(
			origin: OriginFor<T>,
			genre: vec::Vec<u8>,
			options: vec::Vec<vec::Vec<u8>>,
			duration: Duration
		) -> DispatchResult
		{
			// Check that the extrinsic was signed and get the signer.
			let creator = ensure_signed(origin)?;

			Self::do_create_survey(&creator, genre, options, duration)?;

			Ok(())
		}

		/// Open a survey for voting. Only the creator may do so, and only once.
		///
		/// - `survey_id`: The id of the survey.
		///
		/// Emits `SurveyStarted`.
		#[pallet::call_index(1)]
		#[pallet::weight(T::WeightInfo::start_survey())]
		pub fn start_survey(
			origin: OriginFor<T>,
			survey_id: SurveyId
		) -> DispatchResult
		{
			let sender = ensure_signed(origin)?;
			Self::do_start_survey(&sender, survey_id)
		}

		/// Close an ongoing survey. Only the creator may do so, at any point while it is ongoing.
		///
		/// - `survey_id`: The id of the survey.
		///
		/// Emits `SurveyEnded`.
		#[pallet::call_index(2)]
		#[pallet::weight(T::WeightInfo::end_survey())]
		pub fn end_survey(
			origin: OriginFor<T>,
			survey_id: SurveyId
		) -> DispatchResult
		{
			let sender = ensure_signed(origin)?;
			Self::do_end_survey(&sender, survey_id)
		}

		/// Cast the caller's single vote in an ongoing survey.
		///
		/// - `survey_id`: The id of the survey.
		/// - `option`: The position of the chosen option.
		///
		/// Emits `Voted`.
		#[pallet::call_index(3)]
		#[pallet::weight(T::WeightInfo::vote())]
		pub fn vote(
			origin: OriginFor<T>,
			survey_id: SurveyId,
			option: OptionIndex
		) -> DispatchResult
		{
			let voter = ensure_signed(origin)?;
			Self::do_vote(&voter, survey_id, option)
		}

		/// Reject all state changing survey calls. Administrator only.
		///
		/// Emits `Paused`.
		#[pallet::call_index(4)]
		#[pallet::weight(T::WeightInfo::pause())]
		pub fn pause(origin: OriginFor<T>) -> DispatchResult
		{
			let sender = ensure_signed(origin)?;
			Self::do_set_paused(&sender, true)
		}

		/// Accept state changing survey calls again. Administrator only.
		///
		/// Emits `Unpaused`.
		#[pallet::call_index(5)]
		#[pallet::weight(T::WeightInfo::unpause())]
		pub fn unpause(origin: OriginFor<T>) -> DispatchResult
		{
			let sender = ensure_signed(origin)?;
			Self::do_set_paused(&sender, false)
		}
	}

	impl<T: Config> Pallet<T>
	{
		/// Validates the survey parameters, stores a new survey and returns its id.
		pub fn do_create_survey(
			creator: &T::AccountId,
			genre: vec::Vec<u8>,
			options: vec::Vec<vec::Vec<u8>>,
			duration: Duration
		) -> Result<SurveyId, DispatchError>
		{
			Self::ensure_not_paused()?;

			// The survey must be open for a positive and bounded number of seconds.
			ensure!(
				duration > 0 && duration <= T::MaxDuration::get(),
				Error::<T>::InvalidInput
			);

			// At least one option is required.
			ensure!(!options.is_empty(), Error::<T>::InvalidInput);

			let genre: Genre<T> = genre
				.try_into()
				.map_err(|_| Error::<T>::InvalidInput)?;

			let labels = options
				.into_iter()
				.map(Label::<T>::try_from)
				.collect::<Result<vec::Vec<_>, _>>()
				.map_err(|_| Error::<T>::InvalidInput)?;

			let options: SurveyOptions<T> = labels
				.try_into()
				.map_err(|_| Error::<T>::InvalidInput)?;

			// Ids are sequential and start at one; surveys are never removed.
			let index = SurveyStore::<T>::count()
				.checked_add(1)
				.ok_or(ArithmeticError::Overflow)?;

			SurveyStore::<T>::insert(index, Survey::<T>::new(
				index,
				creator.clone(),
				genre,
				options,
				duration
			));
			CreatorSurveyIds::<T>::append(creator, index);

			log::debug!(target: LOG_TARGET, "survey {} created by {:?}", index, creator);

			Self::deposit_event(Event::SurveyCreated {
				survey_id: index,
				creator: creator.clone()
			});

			Ok(index)
		}

		pub fn do_start_survey(
			sender: &T::AccountId,
			survey_id: SurveyId
		) -> DispatchResult
		{
			Self::ensure_not_paused()?;

			let mut survey = SurveyStore::<T>::get(survey_id).ok_or(Error::<T>::SurveyDoesNotExist)?;

			Self::ensure_survey_creator(sender, &survey)?;

			let now = Self::now();
			survey.start(now).map_err(Error::<T>::from)?;
			SurveyStore::<T>::insert(survey_id, survey);

			log::debug!(target: LOG_TARGET, "survey {} started at {}", survey_id, now);

			Self::deposit_event(Event::SurveyStarted { survey_id });

			Ok(())
		}

		pub fn do_end_survey(
			sender: &T::AccountId,
			survey_id: SurveyId
		) -> DispatchResult
		{
			Self::ensure_not_paused()?;

			let mut survey = SurveyStore::<T>::get(survey_id).ok_or(Error::<T>::SurveyDoesNotExist)?;

			Self::ensure_survey_creator(sender, &survey)?;

			survey.end().map_err(Error::<T>::from)?;
			let (winning_option, winning_votes) = survey.tally.leader();
			SurveyStore::<T>::insert(survey_id, survey);

			log::debug!(
				target: LOG_TARGET,
				"survey {} ended, option {} leads with {} votes",
				survey_id, winning_option, winning_votes
			);

			Self::deposit_event(Event::SurveyEnded {
				survey_id,
				winning_option,
				winning_votes
			});

			Ok(())
		}

		pub fn do_vote(
			voter: &T::AccountId,
			survey_id: SurveyId,
			option: OptionIndex
		) -> DispatchResult
		{
			Self::ensure_not_paused()?;

			let _guard = CallGuard::<T>::acquire()?;

			let mut survey = SurveyStore::<T>::get(survey_id).ok_or(Error::<T>::SurveyDoesNotExist)?;

			survey.ensure_open(Self::now()).map_err(Error::<T>::from)?;

			let label = survey.label(option).cloned().ok_or(Error::<T>::InvalidOptionId)?;

			// Each account has a single vote per survey.
			ensure!(
				!Participation::<T>::get(survey_id, voter),
				Error::<T>::AlreadyVoted
			);

			ensure!(&survey.creator != voter, Error::<T>::CreatorCannotVote);

			let took_lead = survey.tally
				.record(option)
				.map_err(|error| match error
				{
					TallyError::InvalidOption => DispatchError::from(Error::<T>::InvalidOptionId),
					TallyError::Overflow => ArithmeticError::Overflow.into()
				})?;
			debug_assert!(survey.tally.is_consistent());

			Participation::<T>::insert(survey_id, voter, true);
			SurveyStore::<T>::insert(survey_id, survey);

			log::debug!(
				target: LOG_TARGET,
				"{:?} voted for option {} in survey {}{}",
				voter, option, survey_id, if took_lead { ", which now leads" } else { "" }
			);

			Self::deposit_event(Event::Voted {
				survey_id,
				option: label,
				voter: voter.clone()
			});

			Ok(())
		}

		pub fn do_set_paused(
			sender: &T::AccountId,
			paused: bool
		) -> DispatchResult
		{
			Self::ensure_administrator(sender)?;

			// Re-asserting the current value is accepted.
			IsPaused::<T>::put(paused);

			log::info!(target: LOG_TARGET, "surveys {} by {:?}", if paused { "paused" } else { "unpaused" }, sender);

			let by = sender.clone();
			Self::deposit_event(if paused { Event::Paused { by } } else { Event::Unpaused { by } });

			Ok(())
		}

		/// The survey `survey_id` without its tally.
		pub fn survey(survey_id: SurveyId) -> Result<SurveyDetails<T>, DispatchError>
		{
			let survey = SurveyStore::<T>::get(survey_id).ok_or(Error::<T>::SurveyDoesNotExist)?;
			Ok(survey.details())
		}

		/// The label and vote count of the leading option. Only available while voting is open.
		pub fn leading_option(survey_id: SurveyId) -> Result<(Label<T>, VoteCount), DispatchError>
		{
			let survey = SurveyStore::<T>::get(survey_id).ok_or(Error::<T>::SurveyDoesNotExist)?;

			survey.ensure_open(Self::now()).map_err(Error::<T>::from)?;

			let (option, votes) = survey.tally.leader();
			let label = survey.label(option).cloned().ok_or(Error::<T>::InvalidOptionId)?;

			Ok((label, votes))
		}

		/// The ids of the surveys created by `creator`, oldest first.
		pub fn survey_ids(creator: &T::AccountId) -> vec::Vec<SurveyId>
		{
			CreatorSurveyIds::<T>::get(creator)
		}

		pub fn has_voted(survey_id: SurveyId, who: &T::AccountId) -> bool
		{
			Participation::<T>::get(survey_id, who)
		}

		pub fn is_paused() -> bool
		{
			IsPaused::<T>::get()
		}

		pub fn administrator() -> Option<T::AccountId>
		{
			Administrator::<T>::get()
		}

		/// The number of surveys created so far, which is also the latest id.
		pub fn survey_count() -> u32
		{
			SurveyStore::<T>::count()
		}

		fn now() -> Timestamp
		{
			T::TimeProvider::now().as_secs()
		}

		/// Checks the stored surveys against the pallet invariants.
		#[cfg(any(feature = "try-runtime", test))]
		pub fn do_try_state() -> Result<(), DispatchError>
		{
			let count = SurveyStore::<T>::count();
			let mut seen = 0u32;

			for (id, survey) in SurveyStore::<T>::iter()
			{
				seen += 1;

				ensure!(id != 0, "survey id zero was assigned");
				ensure!(id <= count, "survey id exceeds the survey count");
				ensure!(survey.index == id, "survey stored under a foreign id");
				ensure!(!survey.options.is_empty(), "survey without options");
				ensure!(
					survey.tally.option_count() == survey.options.len(),
					"tally size differs from the option count"
				);
				ensure!(survey.tally.is_consistent(), "tally totals or leader out of sync");
				// A clock reading of zero may stamp a started survey with zero.
				ensure!(
					survey.status != SurveyStatus::Created || survey.start_time == 0,
					"unstarted survey carries a start time"
				);

				let voters = Participation::<T>::iter_prefix(id)
					.filter(|(_, voted)| *voted)
					.count();
				ensure!(
					voters == survey.tally.total_votes as usize,
					"participation records differ from the vote total"
				);
				ensure!(
					!Participation::<T>::get(id, &survey.creator),
					"creator voted in their own survey"
				);
			}

			ensure!(seen == count, "survey counter out of sync");
			ensure!(!CallLock::<T>::get(), "call lock left set");

			Ok(())
		}
	}
}
