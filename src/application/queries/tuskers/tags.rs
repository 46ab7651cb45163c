use super::TuskerQueryService;
use crate::application::error::ApplicationResult;

impl TuskerQueryService {
    pub async fn list_tags(&self) -> ApplicationResult<Vec<String>> {
        Ok(self.read_repo.list_tags().await?)
    }
}
