use super::targets_model::{NewTarget, Target, TargetStatus};
use crate::errors::Result;

pub trait TargetRepositoryTrait: Send + Sync {
    fn create(&self, new_target: NewTarget) -> Result<Target>;

    fn get_by_id(&self, target_id: &str) -> Result<Option<Target>>;

    /// Newest first, optionally filtered by status.
    fn list_by_portfolio(
        &self,
        portfolio_id: &str,
        status: Option<TargetStatus>,
    ) -> Result<Vec<Target>>;

    fn update_status(&self, target_id: &str, status: TargetStatus) -> Result<Target>;

    fn delete(&self, target_id: &str) -> Result<usize>;
}

pub trait TargetServiceTrait: Send + Sync {
    fn create_target(&self, new_target: NewTarget) -> Result<Target>;

    fn list_targets(&self, portfolio_id: &str, status: Option<TargetStatus>)
        -> Result<Vec<Target>>;

    fn update_status(&self, target_id: &str, status: TargetStatus) -> Result<Target>;

    fn delete_target(&self, target_id: &str) -> Result<()>;
}
