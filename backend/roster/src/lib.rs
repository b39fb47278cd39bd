//! # Roster
//!
//! Immutable set of fundraiser records, loaded once at startup.
//!
//! ## Loading
//!
//! - Embedded seed (`seed.json`) by default
//! - Any JSON file with the same shape through [`Roster::from_path`]
//!
//! Every loader validates before handing out a [`Roster`]:
//! - ids are positive and unique
//! - referral codes are unique, so a referral lookup never has to pick between matches
//! - goals are positive, so progress never divides by zero
//!
//! A seed that fails any of these is a configuration error. The server refuses to start.
//!
//! ## Lookups
//!
//! Both indexes are built at load time. Nothing mutates the records afterwards.

use std::{
    collections::{HashMap, hash_map::Entry},
    fs,
    path::Path,
};

use thiserror::Error;

pub mod models;
pub mod progress;

use models::FundraiserRecord;

const EMBEDDED_SEED: &str = include_str!("../seed.json");

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed seed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Record {id} has a donation goal of zero")]
    ZeroGoal { id: u32 },

    #[error("Record ids must be positive, found {id}")]
    InvalidId { id: u32 },

    #[error("Duplicate record id {id}")]
    DuplicateId { id: u32 },

    #[error("Referral code {code} is used by records {first} and {second}")]
    DuplicateReferralCode {
        code: String,
        first: u32,
        second: u32,
    },
}

#[derive(Debug, Clone)]
pub struct Roster {
    records: Vec<FundraiserRecord>,
    by_id: HashMap<u32, usize>,
    by_referral_code: HashMap<String, usize>,
}

impl Roster {
    pub fn new(records: Vec<FundraiserRecord>) -> Result<Self, RosterError> {
        let mut by_id = HashMap::with_capacity(records.len());
        let mut by_referral_code = HashMap::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            if record.id == 0 {
                return Err(RosterError::InvalidId { id: record.id });
            }

            if record.donation_goal == 0 {
                return Err(RosterError::ZeroGoal { id: record.id });
            }

            if by_id.insert(record.id, index).is_some() {
                return Err(RosterError::DuplicateId { id: record.id });
            }

            match by_referral_code.entry(record.referral_code.clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(index);
                }
                Entry::Occupied(entry) => {
                    return Err(RosterError::DuplicateReferralCode {
                        code: entry.key().clone(),
                        first: records[*entry.get()].id,
                        second: record.id,
                    });
                }
            }
        }

        Ok(Self {
            records,
            by_id,
            by_referral_code,
        })
    }

    pub fn embedded() -> Result<Self, RosterError> {
        Self::from_json(EMBEDDED_SEED)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let data = fs::read_to_string(path)?;

        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, RosterError> {
        let records: Vec<FundraiserRecord> = serde_json::from_str(data)?;

        Self::new(records)
    }

    /// Seed order.
    pub fn all(&self) -> &[FundraiserRecord] {
        &self.records
    }

    pub fn by_id(&self, id: u32) -> Option<&FundraiserRecord> {
        self.by_id.get(&id).map(|&index| &self.records[index])
    }

    pub fn by_referral_code(&self, code: &str) -> Option<&FundraiserRecord> {
        self.by_referral_code
            .get(code)
            .map(|&index| &self.records[index])
    }

    /// Records by raised amount, highest first, with 1-based ranks.
    /// Ties keep seed order.
    pub fn ranked(&self) -> Vec<(usize, &FundraiserRecord)> {
        let mut sorted: Vec<&FundraiserRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| b.donations_raised.cmp(&a.donations_raised));

        sorted
            .into_iter()
            .enumerate()
            .map(|(index, record)| (index + 1, record))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
