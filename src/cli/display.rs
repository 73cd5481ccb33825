// src/cli/display.rs
//! Terminal rendering for reports, history and tips.

use chrono::{DateTime, Utc};
use console::style;

use crate::core::history::PasswordHistory;
use crate::education;
use crate::models::{StrengthLevel, StrengthReport};
use crate::strength::Rule;
use crate::utils::{format_time_ago, meter_bar};

pub fn render_meter(report: &StrengthReport) -> String {
    let bar = meter_bar(report.score, StrengthLevel::MAX_SCORE);
    let bar = match report.score {
        0..=1 => style(bar).red(),
        2..=3 => style(bar).yellow(),
        _ => style(bar).green(),
    };

    format!(
        "{} {}/{} ({:.0}%)  {} {}",
        bar,
        report.score,
        StrengthLevel::MAX_SCORE,
        report.progress() * 100.0,
        style("Strength:").bold(),
        report.level()
    )
}

pub fn render_report(report: &StrengthReport) -> String {
    let mut lines = vec![render_meter(report)];

    if report.is_excellent() {
        lines.push(format!("{}", style("🎉 Your password is strong and secure!").green()));
    } else {
        lines.push(format!("{}", style("💡 Suggestions to improve your password:").bold()));
        for suggestion in &report.suggestions {
            let icon = Rule::from_suggestion(suggestion).map_or("•", |rule| rule.icon());
            lines.push(format!("  {} {}", icon, suggestion));
        }
    }

    lines.join("\n")
}

pub fn render_history(history: &PasswordHistory, now: DateTime<Utc>) -> String {
    if history.is_empty() {
        return format!("{}", style("No passwords checked yet.").dim());
    }

    let mut lines = vec![format!("{}", style("📜 Password history").bold())];
    for (idx, entry) in history.numbered() {
        lines.push(format!(
            "{}. {} {}",
            idx,
            entry.password,
            style(format!("({})", format_time_ago(entry.entered_at, now))).dim()
        ));
    }
    lines.join("\n")
}

pub fn render_tips() -> String {
    let mut lines = vec![format!("{}", style(education::TIPS_TITLE).bold())];
    lines.extend(education::TIPS.iter().map(|tip| format!("- {}", tip)));
    lines.join("\n")
}
