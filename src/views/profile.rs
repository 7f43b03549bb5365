//! Plain-text profile card.

use crate::models::User;
use crate::views::{format_number, group_thousands};
use std::fmt::Write;

const PROFILE_URL: &str = "https://osu.ppy.sh/users";

fn rank(rank: Option<u32>) -> String {
    match rank {
        Some(rank) => format!("#{}", group_thousands(rank.into())),
        None => "Unranked".to_string(),
    }
}

pub fn render_profile(user: &User) -> String {
    let stats = &user.statistics;
    let grades = &stats.grade_counts;
    let mut out = String::new();

    let _ = writeln!(out, "[{}] {}", user.country_code, user.username);
    let _ = writeln!(out, "{}/{}", PROFILE_URL, user.id);
    let _ = writeln!(
        out,
        "Global: {} | Country: {}",
        rank(stats.global_rank),
        rank(stats.country_rank)
    );
    let _ = writeln!(
        out,
        "Performance: {}pp  Accuracy: {:.2}%  Max Combo: {}x",
        format_number(stats.pp, 0),
        stats.hit_accuracy,
        group_thousands(stats.maximum_combo.into())
    );
    let _ = writeln!(
        out,
        "Play Count: {}  Play Time: {}h  Level: Lv.{} ({}%)",
        group_thousands(stats.play_count.into()),
        format_number(stats.play_hours(), 1),
        stats.level.current,
        stats.level.progress
    );
    let _ = writeln!(
        out,
        "SSH: {} SS: {} SH: {} S: {} A: {}",
        grades.ssh, grades.ss, grades.sh, grades.s, grades.a
    );

    if let Some(avatar) = &user.avatar_url {
        let _ = writeln!(out, "Avatar: {}", avatar);
    }

    out
}
