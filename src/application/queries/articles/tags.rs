use super::ArticleQueryService;
use crate::application::error::ApplicationResult;

impl ArticleQueryService {
    pub async fn list_tags(&self) -> ApplicationResult<Vec<String>> {
        Ok(self.read_repo.list_tags().await?)
    }
}
