//! Shared fixtures

use chrono::{DateTime, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use levelup::orchestrator::{FixedClock, Orchestrator};
use levelup::store::SaveData;

pub fn day(month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, d).expect("valid test date")
}

/// Noon UTC on the given 2024 date
pub fn noon(month: u32, d: u32) -> DateTime<Utc> {
    day(month, d)
        .and_hms_opt(12, 0, 0)
        .expect("valid test time")
        .and_utc()
}

/// Orchestrator on a fixed clock starting at `start`, seeded RNG
pub fn orchestrator_at(save: SaveData, start: NaiveDate) -> Orchestrator<FixedClock, StdRng> {
    Orchestrator::new(save, FixedClock::new(start), StdRng::seed_from_u64(42))
}
