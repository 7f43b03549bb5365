//! Plain-text result card for a reconstructed play.

use crate::models::{PlayOutcome, ScoreRecord, User};
use crate::views::group_thousands;
use std::fmt::Write;

/// Performance line, e.g. `174pp -> 200pp for 97.67% FC`.
pub fn performance_line(score: &ScoreRecord, outcome: &PlayOutcome) -> String {
    let if_fc = outcome.if_fc_pp();

    if score.is_failed() {
        let progress = outcome.fail_progress().unwrap_or(0.0);
        return match if_fc {
            Some(pp) => format!("Failed @ {:.1}% (If FC: {:.0}pp)", progress, pp),
            None => format!("Failed @ {:.1}%", progress),
        };
    }

    if outcome.is_fc() {
        return format!("{:.0}pp FC", outcome.pp());
    }

    match if_fc {
        Some(pp) => format!(
            "{:.0}pp -> {:.0}pp for {:.2}% FC",
            outcome.pp(),
            pp,
            score.accuracy * 100.0
        ),
        None => format!("{:.0}pp", outcome.pp()),
    }
}

/// Grade, accuracy and combo against the chart's max combo. Falls back to
/// the play's own combo when the max combo is unknown.
pub fn score_line(score: &ScoreRecord, outcome: &PlayOutcome) -> String {
    let max_combo = outcome.max_combo().unwrap_or(score.max_combo);

    format!(
        "{} | {:.2}% | {}x / {}x",
        score.rank.label(),
        score.accuracy * 100.0,
        group_thousands(score.max_combo.into()),
        group_thousands(max_combo.into())
    )
}

pub fn hit_line(score: &ScoreRecord) -> String {
    let hits = &score.statistics;
    format!(
        "300: {} 100: {} 50: {} Miss: {}",
        hits.great, hits.ok, hits.meh, hits.miss
    )
}

/// Tempo-adjusted map stats.
pub fn map_line(outcome: &PlayOutcome) -> String {
    let chart = outcome.chart();
    format!(
        "Length: {}  BPM: {:.0}  CS: {:.1}  AR: {:.1}  OD: {:.1}  HP: {:.1}",
        chart.length_display(),
        chart.bpm,
        chart.cs,
        chart.ar,
        chart.od,
        chart.hp
    )
}

/// Full multi-line summary of a recent play.
pub fn render_summary(user: &User, score: &ScoreRecord, outcome: &PlayOutcome) -> String {
    let mut out = String::new();

    let title = match &score.beatmapset {
        Some(set) => format!("{} - {}", set.artist, set.title),
        None => "Unknown".to_string(),
    };

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Recent play of {} [{}]", user.username, user.country_code);
    let _ = write!(out, "{} [{}]", title, score.beatmap.version);
    if !outcome.mods().is_empty() {
        let _ = write!(out, " {}", outcome.mods());
    }
    out.push('\n');

    let _ = writeln!(out, "{}", performance_line(score, outcome));
    let _ = writeln!(out, "{}", score_line(score, outcome));
    let _ = writeln!(out, "{}", hit_line(score));
    let _ = writeln!(out, "{}", map_line(outcome));

    if let Some(url) = &score.beatmap.url {
        let _ = writeln!(out, "{}", url);
    }
    if let Some(at) = score.completed_at() {
        let _ = writeln!(out, "Played {}", at.format("%Y-%m-%d %H:%M UTC"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::score::tests::score;
    use crate::models::user::tests::user;
    use crate::models::score::BeatmapsetSummary;
    use crate::models::{FcBasis, Grade, ModSet};

    fn outcome(score: &ScoreRecord) -> PlayOutcome {
        let mods = score.mod_set();
        PlayOutcome {
            chart: score.beatmap.stats().adjusted(&mods),
            mods,
            pp: score.pp.unwrap_or(0.0),
            is_fc: false,
            fc_basis: FcBasis::ComboTolerance,
            if_fc_pp: None,
            fail_progress: None,
            max_combo: Some(1000),
            degraded: None,
        }
    }

    #[test]
    fn test_performance_lines() {
        let play = score(0.9767, 812, 2, Grade::A);
        let mut result = outcome(&play);
        assert_eq!(performance_line(&play, &result), "174pp");

        result.if_fc_pp = Some(200.2);
        assert_eq!(performance_line(&play, &result), "174pp -> 200pp for 97.67% FC");

        result.is_fc = true;
        result.pp = 300.0;
        assert_eq!(performance_line(&play, &result), "300pp FC");
    }

    #[test]
    fn test_failed_lines() {
        let play = score(0.8, 100, 3, Grade::F);
        let mut result = outcome(&play);
        result.fail_progress = Some(21.6);
        assert_eq!(performance_line(&play, &result), "Failed @ 21.6%");

        result.if_fc_pp = Some(250.0);
        assert_eq!(performance_line(&play, &result), "Failed @ 21.6% (If FC: 250pp)");
    }

    #[test]
    fn test_score_line_falls_back_to_own_combo() {
        let play = score(0.9767, 1234, 0, Grade::SilverSS);
        let mut result = outcome(&play);
        result.max_combo = Some(2001);
        assert_eq!(score_line(&play, &result), "SSH | 97.67% | 1,234x / 2,001x");

        result.max_combo = None;
        assert_eq!(score_line(&play, &result), "SSH | 97.67% | 1,234x / 1,234x");
    }

    #[test]
    fn test_map_line_uses_adjusted_stats() {
        let mut play = score(0.95, 500, 1, Grade::A);
        play.beatmap.cs = Some(4.0);
        play.beatmap.ar = Some(9.3);
        play.beatmap.accuracy = Some(8.5);
        play.beatmap.drain = Some(6.0);

        let mut result = outcome(&play);
        result.chart = play.beatmap.stats().adjusted(&ModSet::from_acronyms(["DT"]));

        assert_eq!(
            map_line(&result),
            "Length: 1:20  BPM: 300  CS: 4.0  AR: 9.3  OD: 8.5  HP: 6.0"
        );
    }

    #[test]
    fn test_render_summary() {
        let mut play = score(0.9767, 812, 2, Grade::A);
        play.beatmap.version = "Extra".to_string();
        play.beatmapset = Some(BeatmapsetSummary {
            title: "Freedom Dive".to_string(),
            artist: "xi".to_string(),
        });
        let mut result = outcome(&play);
        result.mods = ModSet::from_acronyms(["HD", "DT"]);

        let mut user = user(1, "mrekk");
        user.country_code = "AU".to_string();

        let text = render_summary(&user, &play, &result);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Recent play of mrekk [AU]");
        assert_eq!(lines[1], "xi - Freedom Dive [Extra] +HDDT");
        assert_eq!(lines[2], "174pp");
        assert_eq!(lines[4], "300: 900 100: 20 50: 0 Miss: 2");
        assert_eq!(lines.len(), 6);
    }
}
