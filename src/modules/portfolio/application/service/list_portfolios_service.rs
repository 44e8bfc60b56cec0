use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::portfolio::application::collection::PortfolioCollection;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    ListPortfoliosUseCase, ListingState, PortfolioListing, PortfolioSearch,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioStorage;
use crate::modules::portfolio::domain::search::filter_portfolios;

pub struct ListPortfoliosService<S>
where
    S: PortfolioStorage,
{
    collection: Arc<PortfolioCollection<S>>,
}

impl<S> ListPortfoliosService<S>
where
    S: PortfolioStorage,
{
    pub fn new(collection: Arc<PortfolioCollection<S>>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl<S> ListPortfoliosUseCase for ListPortfoliosService<S>
where
    S: PortfolioStorage,
{
    async fn execute(&self, search: PortfolioSearch) -> PortfolioListing {
        if self.collection.is_loading() {
            return PortfolioListing::new(ListingState::Loading, 0, Vec::new());
        }

        let all = self.collection.all().await;
        if all.is_empty() {
            return PortfolioListing::new(ListingState::Empty, 0, Vec::new());
        }

        let found: Vec<_> = filter_portfolios(&all, &search.term, search.scope)
            .into_iter()
            .cloned()
            .collect();

        let state = if found.is_empty() {
            ListingState::NoResults
        } else {
            ListingState::Results
        };

        PortfolioListing::new(state, all.len(), found)
    }
}
