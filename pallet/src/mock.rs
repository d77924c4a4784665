use crate as pallet_surveys;
use core::cell::RefCell;
use frame_support::{
    derive_impl,
    traits::{ConstU32, ConstU64, UnixTime}
};
use sp_core::H256;
use sp_runtime::{
	traits::{BlakeTwo256, IdentityLookup},
	BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

pub const ADMIN: u64 = 100;
pub const ALICE: u64 = 1;
pub const BOB: u64 = 2;
pub const CHARLIE: u64 = 3;
pub const DAVE: u64 = 4;

/// The unix time (in seconds) every test starts at.
pub const GENESIS_TIME: u64 = 1_700_000_000;

frame_support::construct_runtime!(
	pub enum Test
	{
		System: frame_system,
		Surveys: pallet_surveys,
	}
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig as frame_system::DefaultConfig)]
impl frame_system::Config for Test {
	type Nonce = u64;
	type Hash = H256;
	type Hashing = BlakeTwo256;
	type AccountId = u64;
	type Lookup = IdentityLookup<Self::AccountId>;
	type Block = Block;
	type BlockHashCount = ConstU64<250>;
}

thread_local! {
    static NOW: RefCell<u64> = RefCell::new(GENESIS_TIME);
}

/// A clock driven by the tests.
pub struct MockTime;

impl MockTime
{
    pub fn set(secs: u64)
    {
        NOW.with(|now| *now.borrow_mut() = secs);
    }

    pub fn advance(secs: u64)
    {
        NOW.with(|now| *now.borrow_mut() += secs);
    }

    pub fn get() -> u64
    {
        NOW.with(|now| *now.borrow())
    }
}

impl UnixTime for MockTime
{
    fn now() -> core::time::Duration
    {
        core::time::Duration::from_secs(Self::get())
    }
}

impl pallet_surveys::Config for Test {
	type RuntimeEvent = RuntimeEvent;
	type TimeProvider = MockTime;
	type MaxOptions = ConstU32<16>;
	type MaxLabelLength = ConstU32<32>;
	type MaxGenreLength = ConstU32<64>;
	type MaxDuration = ConstU64<{ pallet_surveys::MAX_SURVEY_DURATION }>;
	type WeightInfo = ();
}

pub fn new_test_ext() -> sp_io::TestExternalities {
	new_test_ext_with(Some(ADMIN), false)
}

pub fn new_test_ext_with(administrator: Option<u64>, paused: bool) -> sp_io::TestExternalities {
	MockTime::set(GENESIS_TIME);

	let t = RuntimeGenesisConfig {
		system: Default::default(),
		surveys: pallet_surveys::GenesisConfig {
			administrator,
			paused
		},
	}
	.build_storage()
	.unwrap();

	let mut ext: sp_io::TestExternalities = t.into();
	// Events are only deposited from block one onwards.
	ext.execute_with(|| System::set_block_number(1));
	ext
}

/// Creates the default two option survey on behalf of `creator`.
pub fn create_default_survey(creator: u64) -> Result<u32, sp_runtime::DispatchError>
{
	Surveys::do_create_survey(&creator, b"Action".to_vec(), vec![b"Movie1".to_vec(), b"Movie2".to_vec()], 3_600)
}
