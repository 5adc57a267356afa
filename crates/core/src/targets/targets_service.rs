use log::debug;
use std::sync::Arc;

use super::targets_model::{NewTarget, Target, TargetStatus};
use super::targets_traits::{TargetRepositoryTrait, TargetServiceTrait};
use crate::errors::{Error, Result};

pub struct TargetService {
    repository: Arc<dyn TargetRepositoryTrait>,
}

impl TargetService {
    pub fn new(repository: Arc<dyn TargetRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl TargetServiceTrait for TargetService {
    fn create_target(&self, new_target: NewTarget) -> Result<Target> {
        new_target.validate()?;
        self.repository.create(new_target)
    }

    fn list_targets(
        &self,
        portfolio_id: &str,
        status: Option<TargetStatus>,
    ) -> Result<Vec<Target>> {
        self.repository.list_by_portfolio(portfolio_id, status)
    }

    fn update_status(&self, target_id: &str, status: TargetStatus) -> Result<Target> {
        if self.repository.get_by_id(target_id)?.is_none() {
            return Err(Error::NotFound(format!("Target {}", target_id)));
        }
        debug!("Target {} -> {}", target_id, status);
        self.repository.update_status(target_id, status)
    }

    fn delete_target(&self, target_id: &str) -> Result<()> {
        if self.repository.delete(target_id)? == 0 {
            return Err(Error::NotFound(format!("Target {}", target_id)));
        }
        Ok(())
    }
}
