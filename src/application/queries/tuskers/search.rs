use super::TuskerQueryService;
use crate::application::{dto::TuskerDto, error::ApplicationResult};

pub struct TuskersByNameQuery {
    pub name: String,
}

pub struct TuskersByCategoryQuery {
    pub category: String,
}

impl TuskerQueryService {
    pub async fn tuskers_by_name(
        &self,
        query: TuskersByNameQuery,
    ) -> ApplicationResult<Vec<TuskerDto>> {
        let tuskers = self.read_repo.search_by_name(&query.name).await?;
        Ok(tuskers.into_iter().map(Into::into).collect())
    }

    pub async fn tuskers_by_category(
        &self,
        query: TuskersByCategoryQuery,
    ) -> ApplicationResult<Vec<TuskerDto>> {
        let tuskers = self.read_repo.search_by_category(&query.category).await?;
        Ok(tuskers.into_iter().map(Into::into).collect())
    }
}
