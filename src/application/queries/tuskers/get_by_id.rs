use super::TuskerQueryService;
use crate::{
    application::{
        dto::TuskerDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::tusker::TuskerId,
};

pub struct GetTuskerByIdQuery {
    pub id: i64,
}

impl TuskerQueryService {
    pub async fn get_tusker_by_id(&self, query: GetTuskerByIdQuery) -> ApplicationResult<TuskerDto> {
        let id = TuskerId::new(query.id)?;
        let tusker = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tusker not found"))?;
        Ok(tusker.into())
    }
}
