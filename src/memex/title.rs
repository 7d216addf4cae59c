//! Titles from filename slugs.
//!
//! `git_privacy-for-the-cli` becomes "Git Privacy for the CLI": the slug is split
//! on `-` and `_`, each word is capitalized, acronyms are replaced by their
//! display form and little words stay lowercase unless they open the title.

use std::collections::{HashMap, HashSet};

/// Acronym and little-word tables, keyed by lowercase token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleCase {
    acronyms: HashMap<String, String>,
    lil_words: HashSet<String>,
}

impl TitleCase {
    pub fn new<A, L>(acronyms: A, lil_words: L) -> Self
    where
        A: IntoIterator<Item = (String, String)>,
        L: IntoIterator<Item = String>,
    {
        Self {
            acronyms: acronyms
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v))
                .collect(),
            lil_words: lil_words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn title_from_slug(&self, slug: &str) -> String {
        title_from_slug(slug, &self.acronyms, &self.lil_words)
    }
}

/// Empty tokens (from `a--b`) are kept and yield empty words.
/// An acronym wins at any position; a little word never lowercases the first token.
pub fn title_from_slug(
    slug: &str,
    acronym_map: &HashMap<String, String>,
    keep_lowercase: &HashSet<String>,
) -> String {
    slug.trim()
        .split(['-', '_'])
        .enumerate()
        .map(|(i, word)| {
            let low = word.to_lowercase();
            if let Some(display) = acronym_map.get(&low) {
                display.clone()
            } else if i != 0 && keep_lowercase.contains(&low) {
                low
            } else {
                capitalize(&low)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tc(acronyms: &[(&str, &str)], lil: &[&str]) -> TitleCase {
        TitleCase::new(
            acronyms
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
            lil.iter().map(|s| s.to_string()),
        )
    }

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(tc(&[], &[]).title_from_slug("git-privacy_tips"), "Git Privacy Tips");
    }

    #[test]
    fn first_word_is_never_kept_lowercase() {
        assert_eq!(
            tc(&[], &["the"]).title_from_slug("the-git-cheatsheet"),
            "The Git Cheatsheet"
        );
    }

    #[test]
    fn little_words_stay_lowercase_mid_title() {
        let t = tc(
            &[("git", "Git"), ("cheatsheet", "CheatSheet")],
            &["in", "on", "a", "the"],
        );
        assert_eq!(
            t.title_from_slug("in-the_git-cheatsheet_initial-version-all-in-one"),
            "In the Git CheatSheet Initial Version All in One"
        );
    }

    #[test]
    fn acronym_wins_even_at_first_position() {
        let t = tc(&[("cli", "CLI"), ("a", "A+")], &["a"]);
        assert_eq!(t.title_from_slug("cli-in-a-day"), "CLI In A+ Day");
        assert_eq!(t.title_from_slug("a-cli"), "A+ CLI");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let t = tc(&[("WiFi", "Wi-Fi")], &["OF"]);
        assert_eq!(t.title_from_slug("STATE-of-WIFI"), "State of Wi-Fi");
    }

    #[test]
    fn rest_of_word_is_lowercased() {
        assert_eq!(tc(&[], &[]).title_from_slug("hELLO-wORLD"), "Hello World");
    }

    #[test]
    fn empty_tokens_are_preserved() {
        assert_eq!(tc(&[], &[]).title_from_slug("a--b"), "A  B");
        assert_eq!(tc(&[], &[]).title_from_slug("_x"), " X");
        assert_eq!(tc(&[], &[]).title_from_slug(""), "");
    }

    #[test]
    fn non_ascii_first_letters() {
        assert_eq!(tc(&[], &[]).title_from_slug("élan-ß"), "Élan SS");
    }
}
