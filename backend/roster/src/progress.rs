//! # Progress
//!
//! Values derived from a record on every read. Nothing here is stored.
//!
//! - `progress`: share of the goal raised, rounded half up, capped at 100
//! - `nextMilestone`: raised amount rounded up to the next multiple of [`MILESTONE_STEP`]
//! - `daysLeft`: whole days until the campaign end, rounded up
//!
//! An amount that already sits on a multiple of the step is its own milestone,
//! so 10000 raised reports 10000, not 15000.
//!
//! `daysLeft` goes negative once the campaign is over. That is expected and not clamped.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::{RosterError, models::FundraiserRecord};

pub const MILESTONE_STEP: u64 = 5000;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub progress: u8,
    pub next_milestone: u64,
    pub days_left: i64,
}

impl Progress {
    pub fn of(
        record: &FundraiserRecord,
        now: DateTime<Utc>,
        campaign_end: NaiveDate,
    ) -> Result<Self, RosterError> {
        let progress = progress_percent(record.donations_raised, record.donation_goal)
            .ok_or(RosterError::ZeroGoal { id: record.id })?;

        Ok(Self {
            progress,
            next_milestone: next_milestone(record.donations_raised),
            days_left: days_left(now, campaign_end),
        })
    }
}

/// Returns `None` for a zero goal.
pub fn progress_percent(raised: u64, goal: u64) -> Option<u8> {
    if goal == 0 {
        return None;
    }

    // round(raised / goal * 100) == floor((200 * raised + goal) / (2 * goal))
    let rounded = (200 * raised as u128 + goal as u128) / (2 * goal as u128);

    Some(rounded.min(100) as u8)
}

pub fn next_milestone(raised: u64) -> u64 {
    raised.div_ceil(MILESTONE_STEP) * MILESTONE_STEP
}

/// The campaign ends at midnight UTC of `campaign_end`.
pub fn days_left(now: DateTime<Utc>, campaign_end: NaiveDate) -> i64 {
    let end = campaign_end.and_time(chrono::NaiveTime::MIN).and_utc();
    let remaining = (end - now).num_milliseconds();

    // integer division truncates toward zero, which is already the ceiling for negatives
    let days = remaining / MILLIS_PER_DAY;
    if remaining % MILLIS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}
