//! Console rendering of papers

use papers_parser::Paper;

/// Printed after every paper block
pub const DIVIDER: &str = "--------------------";

const HEADING: &str = "Found the following relevant papers:";

fn or_none(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("None")
}

/// Render the console report for a non-empty list of papers
pub fn render_console(papers: &[Paper]) -> String {
    let mut out = format!("\n{}\n", HEADING);
    for paper in papers {
        out.push_str(&format!("  PubmedID: {}\n", or_none(&paper.pubmed_id)));
        out.push_str(&format!("  Title: {}\n", or_none(&paper.title)));
        out.push_str(&format!(
            "  Publication Date: {}\n",
            or_none(&paper.publication_date)
        ));
        out.push_str(&format!(
            "  Non-academic Author(s): {}\n",
            paper.non_academic_authors_joined()
        ));
        out.push_str(&format!(
            "  Company Affiliation(s): {}\n",
            paper.company_affiliations_joined()
        ));
        out.push_str(&format!(
            "  Corresponding Author Email: {}\n",
            or_none(&paper.corresponding_author_email)
        ));
        out.push_str(DIVIDER);
        out.push('\n');
    }
    out
}
