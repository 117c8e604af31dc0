//! Plain-text rendering of the dashboard

use std::fmt::Write;

use super::summary::{DashboardSummary, DayXp, ProfileSummary};

const HEAT_GLYPHS: [char; 5] = ['·', '░', '▒', '▓', '█'];
const SPARK_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const BAR_WIDTH: usize = 30;

/// Progress bar like `[#######.......]`
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (percent.min(100) as usize * width) / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

/// Heatmap as 7 rows; each column is one week, filled top to bottom
pub fn heatmap(days: &[DayXp]) -> String {
    let cols = days.len().div_ceil(7);
    let mut out = String::new();
    for row in 0..7 {
        for col in 0..cols {
            let glyph = days
                .get(col * 7 + row)
                .map(|d| HEAT_GLYPHS[d.intensity.min(4) as usize])
                .unwrap_or(' ');
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

/// One glyph per day, scaled to the peak
pub fn sparkline(days: &[DayXp]) -> String {
    let peak = days.iter().map(|d| d.xp).max().unwrap_or(0);
    days.iter()
        .map(|d| {
            if peak == 0 || d.xp == 0 {
                SPARK_GLYPHS[0]
            } else {
                let steps = SPARK_GLYPHS.len() as u128 - 1;
                let idx = (d.xp as u128 * steps).div_ceil(peak as u128);
                SPARK_GLYPHS[idx as usize]
            }
        })
        .collect()
}

pub fn profile(profile: &ProfileSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} Level {} - {}",
        profile.title.avatar, profile.level, profile.title.name
    );
    let _ = writeln!(
        out,
        "Total XP: {} | Streak: {} days",
        profile.total_xp, profile.streak
    );
    let _ = writeln!(
        out,
        "{} {} / {} XP ({}%)",
        progress_bar(profile.percent, BAR_WIDTH),
        profile.current_xp,
        profile.next_level_xp,
        profile.percent
    );
    if let Some(next) = profile.next_title {
        let _ = writeln!(out, "Next title: {} at level {}", next.name, next.min_level);
    }
    out
}

/// Full dashboard text
pub fn render(summary: &DashboardSummary) -> String {
    let mut out = profile(&summary.profile);

    let _ = writeln!(out, "\nActivity Heatmap");
    out.push_str(&heatmap(&summary.heatmap));

    let _ = writeln!(out, "\nXP Trend (Last {} Days)", summary.trend.len());
    let first = summary.trend.first().map(|d| d.date.format("%m-%d").to_string());
    let last = summary.trend.last().map(|d| d.date.format("%m-%d").to_string());
    let _ = writeln!(out, "{}  peak {} XP", sparkline(&summary.trend), summary.trend_peak());
    if let (Some(first), Some(last)) = (first, last) {
        let _ = writeln!(out, "{} .. {}", first, last);
    }

    let _ = writeln!(
        out,
        "\nBadges: {} / {}",
        summary.badges_earned, summary.badges_total
    );
    for next in &summary.upcoming {
        let _ = writeln!(
            out,
            "  next: {} ({}) {}/{}",
            next.name, next.description, next.current, next.target
        );
    }

    if !summary.quests.is_empty() {
        let _ = writeln!(out, "\nQuests");
        for line in &summary.quests {
            let q = &line.quest;
            let mark = if q.completed {
                "x"
            } else if line.expired {
                "-"
            } else {
                " "
            };
            let _ = writeln!(
                out,
                "  [{}] {} {}/{} (+{} XP)",
                mark, q.description, q.progress, q.target, q.reward_xp
            );
        }
    }

    out
}
