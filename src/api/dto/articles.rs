//! Query parsing for the article listing endpoint.

use url::form_urlencoded;

/// Category filter extracted from a raw query string.
///
/// Accepts repeated plain or bracketed keys:
///
/// ```text
/// ?categories=Casual&categories=Formal
/// ?categories[]=Casual&categories[]=Formal
/// ```
///
/// Each value is one category name, commas included. Blank entries are dropped. An absent or empty filter selects every article.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    pub categories: Vec<String>,
}

impl ArticleQuery {
    pub fn from_query_string(query: Option<&str>) -> Self {
        let Some(query) = query else {
            return Self::default();
        };

        let categories = form_urlencoded::parse(query.as_bytes())
            .filter(|(key, _)| key == "categories" || key == "categories[]")
            .map(|(_, value)| value.into_owned())
            .filter(|c| !c.trim().is_empty())
            .collect();

        Self { categories }
    }
}
