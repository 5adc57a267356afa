//! Targets module - price targets and stops a user sets on a stock.

mod targets_model;
mod targets_service;
mod targets_traits;

pub use targets_model::{NewTarget, Target, TargetStatus};
pub use targets_service::TargetService;
pub use targets_traits::{TargetRepositoryTrait, TargetServiceTrait};
