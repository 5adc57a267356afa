//! Positions module - the Position aggregate, its repository and service.

mod positions_model;
mod positions_service;
mod positions_traits;

#[cfg(test)]
mod positions_model_tests;

#[cfg(test)]
mod positions_service_tests;

pub use positions_model::{Position, PositionBuilder};
pub use positions_service::PositionService;
pub use positions_traits::{PositionRepositoryTrait, PositionServiceTrait};
