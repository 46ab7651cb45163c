// src/application/queries/tuskers/service.rs
use std::sync::Arc;

use crate::domain::tusker::TuskerReadRepository;

pub struct TuskerQueryService {
    pub(super) read_repo: Arc<dyn TuskerReadRepository>,
}

impl TuskerQueryService {
    pub fn new(read_repo: Arc<dyn TuskerReadRepository>) -> Self {
        Self { read_repo }
    }
}
