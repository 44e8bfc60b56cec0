use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entities::Portfolio;

/// Which fields a search term is matched against.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// Name, title or bio.
    #[default]
    All,
    /// Any entry of any skill list.
    Skills,
    /// Title only.
    Title,
}

/// Case-insensitive substring match. An empty term matches everything.
pub fn matches(portfolio: &Portfolio, term: &str, scope: SearchScope) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    match scope {
        SearchScope::Skills => portfolio.skills.iter_all().any(|skill| contains(skill)),
        SearchScope::Title => contains(&portfolio.personal_info.title),
        SearchScope::All => {
            contains(&portfolio.personal_info.name)
                || contains(&portfolio.personal_info.title)
                || contains(&portfolio.bio)
        }
    }
}

pub fn filter_portfolios<'a>(
    portfolios: &'a [Portfolio],
    term: &str,
    scope: SearchScope,
) -> Vec<&'a Portfolio> {
    portfolios
        .iter()
        .filter(|portfolio| matches(portfolio, term, scope))
        .collect()
}
