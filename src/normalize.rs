//! Label and question canonicalization.
//!
//! DBpedia resource names arrive in several shapes: full URIs, underscore
//! separated local names, names carrying a disambiguation suffix. Questions
//! carry trailing question marks and stray commas. Before any scoring both
//! sides are pushed through the same [`Normalizer`]:
//!
//! ```text
//! http://dbpedia.org/resource/François_Hollande_(politician)
//!   │ remove resource prefix
//!   ▼
//! François_Hollande_(politician)
//!   │ strip disambiguation, punctuation, separators
//!   ▼
//! François Hollande
//!   │ canonical decomposition, drop combining marks
//!   ▼
//! Francois Hollande
//! ```
//!
//! The rule table is owned by the normalizer value. [`normalize`] uses a
//! shared, immutable default instance.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

/// Prefix removed from DBpedia resource URIs.
pub const DBPEDIA_RESOURCE_PREFIX: &str = "http://dbpedia.org/resource/";

static DEFAULT: Lazy<Normalizer> = Lazy::new(Normalizer::new);

/// Normalize a label or question with the default rule table.
///
/// # Examples
///
/// ```
/// use el_mention::normalize::normalize;
///
/// assert_eq!(normalize("TNT_(TV_channel)"), "TNT");
/// assert_eq!(normalize("http://dbpedia.org/resource/Côte_d'Ivoire"), "Cote d'Ivoire");
/// assert_eq!(normalize("Who wrote Dune?"), "Who wrote Dune");
/// ```
#[must_use]
pub fn normalize(s: &str) -> String {
    DEFAULT.normalize(s)
}

/// A single rewrite rule: every match of `pattern` becomes `replacement`.
#[derive(Debug, Clone)]
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("normalization rule should be a valid regex"),
            replacement,
        }
    }

    fn apply(&self, s: &str) -> String {
        self.pattern.replace_all(s, self.replacement).into_owned()
    }
}

/// Canonicalizes DBpedia labels and question text.
///
/// Steps, in order:
///
/// 1. remove every occurrence of [`DBPEDIA_RESOURCE_PREFIX`]
/// 2. drop a trailing `_(...)` disambiguation suffix
/// 3. drop one trailing `?`
/// 4. drop one leading `,`
/// 5. drop one trailing `,`
/// 6. drop one trailing `.`
/// 7. turn `-` and `_` into spaces
/// 8. collapse whitespace runs
/// 9. trim
/// 10. canonical decomposition, combining marks removed
///
/// A single pass can expose new material for an earlier step (`"x.."`
/// loses one dot per pass), so the pass is repeated until the text stops
/// changing. For ordinary labels one pass is already stable.
#[derive(Debug, Clone)]
pub struct Normalizer {
    rules: Vec<Rule>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Build the DBpedia rule table.
    #[must_use]
    pub fn new() -> Self {
        let rules = vec![
            Rule::new(r"_\([^)]+\)$", ""),
            Rule::new(r"\?$", ""),
            Rule::new(r"^,", ""),
            Rule::new(r",$", ""),
            Rule::new(r"\.$", ""),
            Rule::new(r"-", " "),
            Rule::new(r"_", " "),
            Rule::new(r"\s+", " "),
        ];
        Self { rules }
    }

    /// Normalize `s`. Idempotent.
    #[must_use]
    pub fn normalize(&self, s: &str) -> String {
        let mut current = self.pass(s);
        loop {
            let next = self.pass(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    fn pass(&self, s: &str) -> String {
        // Anywhere in the string, not only at the start
        let mut out = s.replace(DBPEDIA_RESOURCE_PREFIX, "");
        for rule in &self.rules {
            out = rule.apply(&out);
        }

        strip_accents(out.trim())
    }
}

/// Canonically decompose `s` and drop every combining mark.
///
/// `"François"` becomes `"Francois"`, `"Zürich"` becomes `"Zurich"`.
#[must_use]
pub fn strip_accents(s: &str) -> String {
    s.nfd()
        .filter(|&c| canonical_combining_class(c) == 0)
        .collect()
}
