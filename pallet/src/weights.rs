use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight}
};

/// Weight functions needed by the surveys pallet.
pub trait WeightInfo
{
    /// `n` is the number of options offered.
    fn create_survey(n: u32) -> Weight;
    fn start_survey() -> Weight;
    fn end_survey() -> Weight;
    fn vote() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
}

impl WeightInfo for ()
{
    // Storage: SurveyStore (counter, map), CreatorSurveyIds, IsPaused.
    fn create_survey(n: u32) -> Weight
    {
        Weight::from_parts(18_000_000, 3_500)
            .saturating_add(Weight::from_parts(450_000, 40).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(3))
            .saturating_add(RocksDbWeight::get().writes(3))
    }

    fn start_survey() -> Weight
    {
        Weight::from_parts(14_000_000, 4_000)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }

    fn end_survey() -> Weight
    {
        Weight::from_parts(14_500_000, 4_000)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }

    fn vote() -> Weight
    {
        Weight::from_parts(22_000_000, 4_500)
            .saturating_add(RocksDbWeight::get().reads(4))
            .saturating_add(RocksDbWeight::get().writes(4))
    }

    fn pause() -> Weight
    {
        Weight::from_parts(8_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }

    fn unpause() -> Weight
    {
        Weight::from_parts(8_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
}
