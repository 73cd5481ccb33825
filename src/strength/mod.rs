// src/strength/mod.rs
//! Rule-based password strength scoring.
//!
//! A password is checked against five independent composition rules. Each
//! satisfied rule adds one point; each failed rule contributes its
//! suggestion, in rule order.

use crate::charset;
use crate::models::StrengthReport;

pub const MIN_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl Rule {
    /// All rules, in the order their suggestions are reported.
    pub const ALL: [Rule; 5] = [
        Rule::Length,
        Rule::Uppercase,
        Rule::Lowercase,
        Rule::Digit,
        Rule::Special,
    ];

    pub fn is_satisfied_by(&self, password: &str) -> bool {
        match self {
            Rule::Length => password.chars().count() >= MIN_LENGTH,
            Rule::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Rule::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Rule::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Rule::Special => password.chars().any(charset::is_special),
        }
    }

    pub fn suggestion(&self) -> &'static str {
        match self {
            Rule::Length => "Use at least 8 characters.",
            Rule::Uppercase => "Add uppercase letters.",
            Rule::Lowercase => "Add lowercase letters.",
            Rule::Digit => "Include numbers.",
            Rule::Special => "Add special characters (!@#$%^&*).",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Rule::Length => "🔒",
            Rule::Uppercase => "🔠",
            Rule::Lowercase => "🔡",
            Rule::Digit => "🔢",
            Rule::Special => "🔣",
        }
    }

    pub fn from_suggestion(text: &str) -> Option<Rule> {
        Rule::ALL.into_iter().find(|rule| rule.suggestion() == text)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StrengthScorer;

impl StrengthScorer {
    pub fn new() -> Self {
        StrengthScorer
    }

    /// Rules the password fails, in reporting order.
    pub fn unmet_rules(&self, password: &str) -> Vec<Rule> {
        Rule::ALL
            .into_iter()
            .filter(|rule| !rule.is_satisfied_by(password))
            .collect()
    }

    pub fn score(&self, password: &str) -> StrengthReport {
        let unmet = self.unmet_rules(password);
        let score = (Rule::ALL.len() - unmet.len()) as u8;

        log::trace!("scored password: {} of {} rules met", score, Rule::ALL.len());

        StrengthReport {
            score,
            suggestions: unmet.iter().map(|rule| rule.suggestion().to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestions_for(rules: &[Rule]) -> Vec<String> {
        rules.iter().map(|r| r.suggestion().to_string()).collect()
    }

    #[test]
    fn empty_password_fails_everything() {
        let report = StrengthScorer::new().score("");
        assert_eq!(report.score, 0);
        assert_eq!(report.suggestions, suggestions_for(&Rule::ALL));
    }

    #[test]
    fn all_rules_met() {
        let report = StrengthScorer::new().score("Abcdef1!");
        assert_eq!(report.score, 5);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn lowercase_only_with_length() {
        let report = StrengthScorer::new().score("abcdefgh");
        assert_eq!(report.score, 2);
        assert_eq!(
            report.suggestions,
            suggestions_for(&[Rule::Uppercase, Rule::Digit, Rule::Special])
        );
    }

    #[test]
    fn short_password_still_checks_other_rules() {
        let report = StrengthScorer::new().score("A1!");
        assert_eq!(report.score, 3);
        assert_eq!(report.suggestions, suggestions_for(&[Rule::Length, Rule::Lowercase]));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // four characters, twelve bytes
        assert!(!Rule::Length.is_satisfied_by("éééé"));
        assert!(Rule::Length.is_satisfied_by("éééééééé"));
    }

    #[test]
    fn non_ascii_letters_do_not_count() {
        let scorer = StrengthScorer::new();
        assert!(!Rule::Uppercase.is_satisfied_by("ÉÀÜ"));
        assert!(!Rule::Lowercase.is_satisfied_by("éàü"));
        assert_eq!(scorer.score("ÉÀÜéàü").score, 0);
    }

    #[test]
    fn punctuation_outside_special_set_is_not_special() {
        assert!(!Rule::Special.is_satisfied_by("a-b_c+d=e~"));
        assert!(Rule::Special.is_satisfied_by("a\"b"));
    }

    #[test]
    fn score_stays_in_range_and_is_deterministic() {
        let scorer = StrengthScorer::new();
        for password in ["", "a", "A", "1", "!", "aA1!", "password", "P@ssw0rd", "ÜÖÄ 🔥 绝"] {
            let first = scorer.score(password);
            assert!(first.score <= 5);
            assert_eq!(first.suggestions.len(), 5 - first.score as usize);
            assert_eq!(first, scorer.score(password));
        }
    }

    #[test]
    fn suggestion_maps_back_to_rule() {
        for rule in Rule::ALL {
            assert_eq!(Rule::from_suggestion(rule.suggestion()), Some(rule));
        }
        assert_eq!(Rule::from_suggestion("nope"), None);
    }
}
