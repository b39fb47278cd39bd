use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundraiserRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub join_date: NaiveDate,
    pub avatar_url: String,
    pub referral_code: String,
    pub donations_raised: u64,
    pub donation_goal: u64,
    pub last_donation_amount: u64,
    pub last_donation_date: NaiveDate,
    pub rewards: Vec<RewardBadge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    pub bio: String,
}

/// Unlock state is authored in the seed, it is never recomputed from the raised amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardBadge {
    pub id: u32,
    pub name: String,
    pub unlocked: bool,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// Public view handed out for referral lookups, carries no donation fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralProfile<'a> {
    pub id: u32,
    pub name: &'a str,
    pub referral_code: &'a str,
    pub avatar_url: &'a str,
}

impl<'a> From<&'a FundraiserRecord> for ReferralProfile<'a> {
    fn from(record: &'a FundraiserRecord) -> Self {
        Self {
            id: record.id,
            name: &record.name,
            referral_code: &record.referral_code,
            avatar_url: &record.avatar_url,
        }
    }
}
