//! Simulation report generation.

use super::runner::{CareerStats, RunStats};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    /// Careers across all runs
    pub careers: u32,
    pub careers_timed_out: u32,

    // Aggregated stats
    pub avg_seasons: f64,
    /// Games won over games played, playoffs included
    pub win_rate: f64,
    /// Playoff appearances per completed season
    pub playoff_rate: f64,
    pub titles_per_career: f64,
    pub avg_final_rating: f64,
    pub awards_per_career: f64,
    pub avg_upgrade_levels: f64,
    pub avg_final_prestige: f64,

    // Distribution data
    pub award_counts: BTreeMap<String, u32>,
    pub rating_by_position: BTreeMap<String, f64>,

    // Individual run stats for detailed analysis
    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let careers: Vec<&CareerStats> = runs.iter().flat_map(|r| r.careers.iter()).collect();
        let career_count = careers.len() as u32;
        let per_career = career_count.max(1) as f64;

        let careers_timed_out = careers.iter().filter(|c| c.timed_out).count() as u32;
        let seasons: u32 = careers.iter().map(|c| c.seasons).sum();
        let games: u32 = careers.iter().map(|c| c.games).sum();
        let wins: u32 = careers.iter().map(|c| c.wins).sum();
        let playoffs: u32 = careers.iter().map(|c| c.playoff_appearances).sum();
        let titles: u32 = careers.iter().map(|c| c.titles).sum();
        let awards: usize = careers.iter().map(|c| c.awards.len()).sum();

        let avg_final_rating =
            careers.iter().map(|c| c.final_rating as f64).sum::<f64>() / per_career;
        let avg_upgrade_levels =
            careers.iter().map(|c| c.upgrade_levels as f64).sum::<f64>() / per_career;
        let avg_final_prestige =
            runs.iter().map(|r| r.final_prestige as f64).sum::<f64>() / num_runs.max(1) as f64;

        let mut award_counts = BTreeMap::new();
        for award in careers.iter().flat_map(|c| c.awards.iter()) {
            *award_counts.entry(award.label().to_string()).or_insert(0) += 1;
        }

        let mut rating_totals: BTreeMap<String, (u32, u32)> = BTreeMap::new();
        for career in &careers {
            let entry = rating_totals
                .entry(career.position.code().to_string())
                .or_insert((0, 0));
            entry.0 += career.final_rating;
            entry.1 += 1;
        }
        let rating_by_position = rating_totals
            .into_iter()
            .map(|(position, (total, count))| (position, total as f64 / count as f64))
            .collect();

        Self {
            num_runs,
            careers: career_count,
            careers_timed_out,
            avg_seasons: seasons as f64 / per_career,
            win_rate: wins as f64 / games.max(1) as f64,
            playoff_rate: playoffs as f64 / seasons.max(1) as f64,
            titles_per_career: titles as f64 / per_career,
            avg_final_rating,
            awards_per_career: awards as f64 / per_career,
            avg_upgrade_levels,
            avg_final_prestige,
            award_counts,
            rating_by_position,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} careers, {} timed out\n\n",
            self.num_runs, self.careers, self.careers_timed_out
        ));

        report.push_str("── CAREERS ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Seasons:         {:.1}\n", self.avg_seasons));
        report.push_str(&format!("  Win Rate:            {:.1}%\n", self.win_rate * 100.0));
        report.push_str(&format!(
            "  Playoff Rate:        {:.1}%\n",
            self.playoff_rate * 100.0
        ));
        report.push_str(&format!("  Titles per Career:   {:.2}\n", self.titles_per_career));
        report.push_str(&format!("  Avg Final Rating:    {:.1}\n", self.avg_final_rating));
        report.push_str(&format!("  Avg Upgrade Levels:  {:.1}\n", self.avg_upgrade_levels));
        report.push_str(&format!("  Avg Final Prestige:  {:.1}\n\n", self.avg_final_prestige));

        report.push_str("── RATING BY POSITION ───────────────────────────────────────────\n");
        for (position, rating) in &self.rating_by_position {
            let bar = "█".repeat((rating / 5.0) as usize);
            report.push_str(&format!("  {:>3}: {:>5.1} {}\n", position, rating, bar));
        }
        report.push('\n');

        report.push_str("── AWARDS ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Awards per Career:   {:.2}\n", self.awards_per_career));
        for (award, count) in &self.award_counts {
            report.push_str(&format!("  {:<20} {}\n", award, count));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let win_rating = if self.win_rate < 0.35 {
            "TOO HARD - Most seasons are lost"
        } else if self.win_rate < 0.65 {
            "GOOD - Competitive seasons"
        } else {
            "TOO EASY - Teams rarely lose"
        };
        report.push_str(&format!("  Win Rating:      {}\n", win_rating));

        if self.playoff_rate < 0.1 {
            report.push_str("  ⚠️  Playoffs almost never reached - win threshold too steep?\n");
        }
        if self.careers_timed_out > 0 {
            report.push_str("  ⚠️  Some careers hit the tick cap before retiring\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
