use chrono::NaiveDate;
use roster::{models::FundraiserRecord, progress::MILESTONE_STEP};
use serde::Serialize;

pub const MILESTONE_DATE: NaiveDate = date(2023, 7, 15);
pub const REFERRAL_DATE: NaiveDate = date(2023, 7, 10);

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Donation,
    Milestone,
    Referral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    pub date: NaiveDate,
    pub message: String,
}

/// Placeholder feed. Only the donation entry comes from the record, the
/// milestone and referral entries are identical for everyone.
pub fn activity_feed(record: &FundraiserRecord) -> Vec<Activity> {
    vec![
        Activity {
            id: 1,
            kind: ActivityKind::Donation,
            amount: Some(record.last_donation_amount),
            date: record.last_donation_date,
            message: format!("Raised ₹{}", format_amount(record.last_donation_amount)),
        },
        Activity {
            id: 2,
            kind: ActivityKind::Milestone,
            amount: Some(MILESTONE_STEP),
            date: MILESTONE_DATE,
            message: format!("Reached ₹{} milestone!", format_amount(MILESTONE_STEP)),
        },
        Activity {
            id: 3,
            kind: ActivityKind::Referral,
            amount: None,
            date: REFERRAL_DATE,
            message: "Referred a new member".to_string(),
        },
    ]
}

/// Thousands separated with commas, `12450` -> `12,450`.
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}

/// Only positive integers can name a record.
pub fn parse_id(raw: &str) -> Option<u32> {
    raw.parse::<u32>().ok().filter(|&id| id > 0)
}
