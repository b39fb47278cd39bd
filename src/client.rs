//! # Frontend Specifications
//!
//! Client logic/relevant structures. Nothing here runs on the server.
//!
//! ## Views
//!
//! ### Login
//! - Intern enters their id
//! - Client fetches `GET /api/intern/{id}`, a 404 means unknown id
//! - No password, no token. Login is a lookup
//!
//! ### Dashboard
//! - `GET /api/intern/{id}` for totals, `progress`, `nextMilestone`, `daysLeft` and badges
//! - `GET /api/intern/{id}/activity` for the recent activity list
//! - Shows "Raise X more" as `nextMilestone - donationsRaised`
//!
//! ### Leaderboard
//! - `GET /api/intern/leaderboard`, already sorted with `rank`
//! - Top three get medals
//!
//! ## Session
//!
//! Browser local storage:
//! - current user id
//! - current user name
//!
//! Only there to skip the login prompt on reload. No expiry, the server never sees it.
//!
//! ## Fields
//!
//! Records are sent with the roster names: `avatarUrl`, `lastDonationAmount`, `socialLinks`.
//! The original views read `avatar`, `lastDonation` and `socialMedia` and need those renamed.
//!
//! ## Errors
//!
//! Non-2xx responses carry `{ "message": ... }`, shown as is.
