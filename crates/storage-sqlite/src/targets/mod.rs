mod model;
mod repository;

pub use model::TargetDB;
pub use repository::TargetRepository;
