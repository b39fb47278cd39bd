//! # Roster Check
//!
//! Loads a seed the same way the server does and reports what it found.
//!
//! ```sh
//! cargo run --bin roster-check -- ./roster.json --leaderboard
//! ```
//!
//! Exits non-zero on the first validation failure, so it can gate a deploy.

use std::{fmt::Write, path::Path};

use anyhow::{Context, Result};
use roster::{
    Roster,
    progress::{next_milestone, progress_percent},
};

pub fn check(path: Option<&Path>, leaderboard: bool) -> Result<String> {
    let roster = match path {
        Some(path) => Roster::from_path(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => Roster::embedded().context("Failed to load embedded roster")?,
    };

    let mut report = String::new();
    writeln!(report, "Loaded Interns: {}", roster.len())?;

    if leaderboard {
        writeln!(report)?;
        write_leaderboard(&mut report, &roster)?;
    }

    Ok(report)
}

fn write_leaderboard(report: &mut String, roster: &Roster) -> Result<()> {
    writeln!(
        report,
        "{:>4}  {:<20} {:>10} {:>10} {:>8} {:>10}",
        "Rank", "Name", "Raised", "Goal", "Progress", "Milestone"
    )?;

    for (rank, record) in roster.ranked() {
        let progress = progress_percent(record.donations_raised, record.donation_goal)
            .with_context(|| format!("Record {} has no goal", record.id))?;

        writeln!(
            report,
            "{:>4}  {:<20} {:>10} {:>10} {:>7}% {:>10}",
            rank,
            record.name,
            record.donations_raised,
            record.donation_goal,
            progress,
            next_milestone(record.donations_raised)
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn test_embedded() {
        let report = check(None, false).unwrap();
        assert_eq!(report, "Loaded Interns: 6\n");
    }

    #[test]
    fn test_leaderboard() {
        let report = check(None, true).unwrap();
        let rows: Vec<&str> = report.lines().skip(3).collect();

        assert_eq!(rows.len(), 6);
        assert!(rows[0].contains("Ayush Sharma"));
        assert!(rows[0].contains("93%"));
        assert!(rows[5].contains("Meera Nair"));
        assert!(rows[5].contains("58%"));
    }

    #[test]
    fn test_rejects_zero_goal() {
        let seed = r#"[{
            "id": 1, "name": "A", "email": "a@example.com", "phone": "",
            "joinDate": "2023-01-01", "avatarUrl": "", "referralCode": "a",
            "donationsRaised": 10, "donationGoal": 0,
            "lastDonationAmount": 10, "lastDonationDate": "2023-01-02",
            "rewards": [], "bio": ""
        }]"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(seed.as_bytes()).unwrap();

        let error = check(Some(file.path()), false).unwrap_err();
        assert!(format!("{error:#}").contains("donation goal of zero"));
    }
}
