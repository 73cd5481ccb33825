// src/education/mod.rs

pub const TIPS_TITLE: &str = "📚 Tips for creating strong passwords";

pub const TIPS: [&str; 5] = [
    "Use a mix of uppercase and lowercase letters.",
    "Include numbers and special characters.",
    "Avoid using common words or phrases.",
    "Make your password at least 12 characters long.",
    "Use a passphrase (e.g., `MyDogLoves2Run!`).",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::StrengthScorer;

    #[test]
    fn example_passphrase_is_excellent() {
        let example = TIPS[4]
            .split('`')
            .nth(1)
            .expect("tip contains a quoted example");
        assert_eq!(StrengthScorer::new().score(example).score, 5);
    }
}
