use super::TuskerQueryService;
use crate::{
    application::{
        dto::TuskerDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct GetTuskerBySlugQuery {
    pub slug: String,
}

impl TuskerQueryService {
    pub async fn get_tusker_by_slug(
        &self,
        query: GetTuskerBySlugQuery,
    ) -> ApplicationResult<TuskerDto> {
        let slug = Slug::new(query.slug)?;
        let tusker = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tusker not found"))?;
        Ok(tusker.into())
    }
}
