use super::domain::Candidate;
use std::sync::OnceLock;

/// Keywords identifying the ethnic communities that receive ranking priority.
pub const STANDARD_MINORITY_KEYWORDS: [&str; 7] = [
    "indigena",
    "afrocolombiano",
    "raizal",
    "palenquero",
    "rom",
    "gitano",
    "judio",
];

/// Keyword table deciding whether a declared ethnicity belongs to a minority
/// community.
///
/// Keywords and ethnicities are compared after trimming, lower-casing and
/// folding accents, so "Indígena" and "indigena" are equivalent. A match is a
/// substring match against the normalized ethnicity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinorityPolicy {
    keywords: Vec<String>,
}

impl MinorityPolicy {
    pub fn standard() -> Self {
        Self::from_keywords(STANDARD_MINORITY_KEYWORDS)
    }

    /// Build a policy from arbitrary keywords. Blank entries are dropped and
    /// duplicates collapse after normalization.
    pub fn from_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = normalize_ethnicity(keyword.as_ref());
            if !keyword.is_empty() && !normalized.contains(&keyword) {
                normalized.push(keyword);
            }
        }
        Self {
            keywords: normalized,
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn matches(&self, ethnicity: Option<&str>) -> bool {
        let Some(ethnicity) = ethnicity else {
            return false;
        };
        let normalized = normalize_ethnicity(ethnicity);
        if normalized.is_empty() {
            return false;
        }
        self.keywords
            .iter()
            .any(|keyword| normalized.contains(keyword.as_str()))
    }

    pub fn is_minority(&self, candidate: &Candidate) -> bool {
        self.matches(candidate.ethnicity.as_deref())
    }
}

impl Default for MinorityPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

/// Minority check against the standard keyword table.
pub fn is_minority(candidate: &Candidate) -> bool {
    static STANDARD: OnceLock<MinorityPolicy> = OnceLock::new();
    STANDARD
        .get_or_init(MinorityPolicy::standard)
        .is_minority(candidate)
}

pub(crate) fn normalize_ethnicity(value: &str) -> String {
    value
        .trim()
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| !is_combining_mark(*c))
        .map(fold_accent)
        .collect()
}

// Combining diacritical marks block, present when input arrives decomposed.
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
