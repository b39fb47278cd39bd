//! # Intern Board Documentation
//!
//! Fundraising board for interns: who raised what, how close they are to their goal, who leads.
//!
//!
//!
//! # General Infrastructure
//! - `backend/roster`: the records and everything derived from them
//! - `backend/server`: axum API serving the roster as JSON
//! - `backend/process`: `roster-check`, validates a seed before it is deployed
//! - `backend`: the `internboard` binary
//!
//! The routes are also served under `/api/intern`, the prefix the original web client called. Records use the
//! roster field names (`avatarUrl`, `lastDonationAmount`, `socialLinks`), so that client has to be updated to
//! read them. See [`client`].
//!
//!
//!
//! # Data
//!
//! The roster is a JSON seed, embedded at build time or read from `SEED_PATH`.
//! It is loaded once at startup and never written to.
//!
//! Per record, computed on every read:
//! - `progress`: percent of goal, capped at 100
//! - `nextMilestone`: raised amount rounded up to a multiple of 5000
//! - `daysLeft`: days until `CAMPAIGN_END`, negative once it has passed
//!
//! Reward badges are authored in the seed. Raising more does not unlock anything by itself.
//!
//!
//!
//! # Notes
//!
//! ## Referral codes
//! Duplicate codes are rejected when the seed loads instead of picking the first match at request time.
//!
//! ## Activity
//! The activity feed is a placeholder. Only the latest donation is real, the milestone and referral entries
//! are the same for everyone.
//!
//!
//!
//! # Setup
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```
//!
//! Run the server.
//! ```sh
//! RUST_LOG=info RUST_ENV=development cargo run --bin internboard
//! ```
//!
//! Check a seed.
//! ```sh
//! cargo run --bin roster-check -- ./roster.json --leaderboard
//! ```
//!
//!
//!
//! # Environment
//!
//! | Variable | Default | |
//! |---|---|---|
//! | `RUST_PORT` | `5000` | listen port |
//! | `SEED_PATH` | embedded | roster seed file |
//! | `CAMPAIGN_END` | `2023-12-31` | end date for `daysLeft` |
//! | `RUST_ENV` | `production` | `development` puts failure detail in 500 bodies |
//! | `RUST_LOG` | | tracing filter |

pub mod client;
