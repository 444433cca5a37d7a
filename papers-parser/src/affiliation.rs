//! Affiliation classification
//!
//! A best-effort lexical heuristic that separates commercial affiliations
//! (companies, biotechs, pharmaceutical firms) from academic ones. False
//! positives and negatives are expected.

use std::sync::OnceLock;

use regex::Regex;

/// Lower-case fragments that suggest a commercial entity.
///
/// Matching is plain substring containment, so short entries such as `sa`
/// also hit inside unrelated words.
pub const COMMERCIAL_KEYWORDS: &[&str] = &[
    "inc",
    "ltd",
    "corp",
    "gmbh",
    "sa",
    "pty",
    "biotech",
    "pharmaceuticals",
    "research and development",
];

/// Lower-case fragments that veto the commercial keywords.
pub const ACADEMIC_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "institute",
    "school",
    "department",
    "center",
    "laboratory",
    "hospital",
];

/// Email domain fragments that belong to academic or public institutions.
pub const INSTITUTIONAL_DOMAINS: &[&str] = &[".edu", ".ac.", ".gov", ".mil"];

/// Decide whether an affiliation looks non-academic
///
/// The checks run in order:
///
/// 1. An empty affiliation is academic.
/// 2. Any commercial keyword with no academic keyword is non-academic.
/// 3. An embedded `@` with no institutional email domain is non-academic.
/// 4. Everything else is academic.
///
/// # Example
///
/// ```
/// use papers_parser::is_non_academic;
///
/// assert!(is_non_academic("Genentech Biotech, South San Francisco"));
/// assert!(!is_non_academic("Department of Biology, University of X"));
/// ```
pub fn is_non_academic(affiliation: &str) -> bool {
    if affiliation.is_empty() {
        return false;
    }

    let lower = affiliation.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if contains_any(COMMERCIAL_KEYWORDS) && !contains_any(ACADEMIC_KEYWORDS) {
        return true;
    }

    lower.contains('@') && !contains_any(INSTITUTIONAL_DOMAINS)
}

/// Extract a company name from an affiliation string
///
/// Looks for the first segment, starting at the beginning of the string or
/// after a comma, that ends in one of the suffixes `Inc`, `Ltd`, `Corp`,
/// `GmbH`, `SA`, `Pty`, `Biotech` or `Pharmaceuticals`. The suffix is matched
/// case-sensitively and must end on a word boundary. Within a segment the
/// longest run ending in a suffix wins.
///
/// # Example
///
/// ```
/// use papers_parser::extract_company;
///
/// assert_eq!(
///     extract_company("Acme Pharmaceuticals Inc").as_deref(),
///     Some("Acme Pharmaceuticals Inc")
/// );
/// assert_eq!(
///     extract_company("Oncology Unit, Novo Biotech, Copenhagen").as_deref(),
///     Some("Novo Biotech")
/// );
/// assert_eq!(extract_company("Independent consultant"), None);
/// ```
pub fn extract_company(affiliation: &str) -> Option<String> {
    static COMPANY_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = COMPANY_REGEX.get_or_init(|| {
        Regex::new(
            r"(?:^|,\s*)([A-Za-z0-9\s&'()*+\-.]+(?:Inc|Ltd|Corp|GmbH|SA|Pty|Biotech|Pharmaceuticals))\b",
        )
        .expect("Failed to compile company regex")
    });

    re.captures(affiliation)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
}
