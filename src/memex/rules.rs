use indexmap::IndexSet;

/// A `dir_rules` entry: folder pattern (conventionally `docs/<folder>/**`) and
/// the categories new documents in that folder receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirRule {
    pub pattern: String,
    pub categories: Vec<String>,
}

impl DirRule {
    pub fn new(pattern: impl Into<String>, categories: Vec<String>) -> Self {
        Self {
            pattern: pattern.into(),
            categories,
        }
    }

    /// Prefix match on `docs/<folder>/`; the glob tail is never evaluated.
    pub fn matches_folder(&self, folder: &str) -> bool {
        self.pattern.starts_with(&format!("docs/{}/", folder))
    }
}

/// Categories from every rule matching `folder`, in rule order, first occurrence wins.
pub fn infer_categories(folder: &str, rules: &[DirRule]) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| rule.matches_folder(folder))
        .flat_map(|rule| rule.categories.iter().cloned())
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(pattern: &str, cats: &[&str]) -> DirRule {
        DirRule::new(pattern, cats.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn collects_categories_from_matching_rules() {
        let rules = vec![
            rule("docs/git/**", &["tech", "git"]),
            rule("docs/linux/**", &["tech", "linux"]),
        ];
        assert_eq!(infer_categories("linux", &rules), vec!["tech", "linux"]);
    }

    #[test]
    fn deduplicates_preserving_first_occurrence() {
        let rules = vec![
            rule("docs/linux/**", &["linux", "tech"]),
            rule("docs/aws/**", &["aws"]),
            rule("docs/linux/kernel/**", &["tech", "kernel", "linux"]),
        ];
        assert_eq!(
            infer_categories("linux", &rules),
            vec!["linux", "tech", "kernel"]
        );
    }

    #[test]
    fn unmatched_folder_is_empty() {
        let rules = vec![rule("docs/git/**", &["git"])];
        assert!(infer_categories("drafts", &rules).is_empty());
        assert!(infer_categories("git", &[]).is_empty());
    }

    #[test]
    fn prefix_requires_full_folder_segment() {
        let rules = vec![
            rule("docs/linuxbox/**", &["box"]),
            rule("docs/LLM/**", &["llm"]),
        ];
        assert!(infer_categories("linux", &rules).is_empty());
        assert!(infer_categories("llm", &rules).is_empty());
        assert_eq!(infer_categories("LLM", &rules), vec!["llm"]);
    }

    #[test]
    fn pattern_without_docs_prefix_never_matches() {
        let rules = vec![rule("linux/**", &["linux"])];
        assert!(infer_categories("linux", &rules).is_empty());
    }
}
