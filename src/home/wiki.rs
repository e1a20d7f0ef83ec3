use serde::{Deserialize, Serialize};

/// A page in the household wiki
///
/// Titles are unique case-insensitively; uniqueness is enforced when a
/// page is added to the data container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiPage {
    pub title: String,
    /// Markdown body text
    #[serde(default)]
    pub body: String,
    /// Actor that created the page
    pub created_by: String,
    /// Actor that last edited the page
    pub updated_by: String,
}

impl WikiPage {
    /// Check if any keyword is a case-insensitive substring of the title or body
    ///
    /// Keywords are expected to be lowercased already (see
    /// `assistant::context::question_keywords`).
    pub fn matches_any(&self, keywords: &[String]) -> bool {
        let title = self.title.to_lowercase();
        let body = self.body.to_lowercase();
        keywords
            .iter()
            .any(|kw| title.contains(kw.as_str()) || body.contains(kw.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(title: &str, body: &str) -> WikiPage {
        WikiPage {
            title: title.to_string(),
            body: body.to_string(),
            created_by: "local".to_string(),
            updated_by: "local".to_string(),
        }
    }

    #[test]
    fn test_matches_title_case_insensitively() {
        let p = page("Furnace Manual", "");
        assert!(p.matches_any(&["furnace".to_string()]));
    }

    #[test]
    fn test_matches_body_substring() {
        let p = page("HVAC", "The filter size is 16x25x1.");
        assert!(p.matches_any(&["filter".to_string()]));
        assert!(!p.matches_any(&["thermostat".to_string()]));
    }

    #[test]
    fn test_no_keywords_never_matches() {
        let p = page("Furnace Manual", "Reset instructions");
        assert!(!p.matches_any(&[]));
    }
}
