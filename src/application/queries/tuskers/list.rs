use super::TuskerQueryService;
use crate::application::{dto::TuskerDto, error::ApplicationResult};

const DEFAULT_RANDOM_LIMIT: u32 = 4;
const MAX_RANDOM_LIMIT: u32 = 20;

pub struct RandomTuskersQuery {
    pub limit: Option<u32>,
}

impl TuskerQueryService {
    pub async fn list_tuskers(&self) -> ApplicationResult<Vec<TuskerDto>> {
        let tuskers = self.read_repo.list().await?;
        Ok(tuskers.into_iter().map(Into::into).collect())
    }

    /// Random sample used by the "featured tuskers" widget.
    pub async fn random_tuskers(
        &self,
        query: RandomTuskersQuery,
    ) -> ApplicationResult<Vec<TuskerDto>> {
        let limit = query
            .limit
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_RANDOM_LIMIT)
            .min(MAX_RANDOM_LIMIT);
        let tuskers = self.read_repo.list_random(limit).await?;
        Ok(tuskers.into_iter().map(Into::into).collect())
    }
}
