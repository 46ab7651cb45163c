// src/application/commands/tuskers/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::tusker::{TuskerReadRepository, TuskerWriteRepository},
};

pub struct TuskerCommandService {
    pub(super) write_repo: Arc<dyn TuskerWriteRepository>,
    pub(super) read_repo: Arc<dyn TuskerReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TuskerCommandService {
    pub fn new(
        write_repo: Arc<dyn TuskerWriteRepository>,
        read_repo: Arc<dyn TuskerReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }
}
