use diesel::prelude::*;
use std::sync::Arc;

use super::model::TargetDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::targets;
use stockbook_core::errors::{Error, Result};
use stockbook_core::targets::{NewTarget, Target, TargetRepositoryTrait, TargetStatus};

pub struct TargetRepository {
    pool: Arc<DbPool>,
}

impl TargetRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl TargetRepositoryTrait for TargetRepository {
    fn create(&self, new_target: NewTarget) -> Result<Target> {
        let mut conn = get_connection(&self.pool)?;
        let target_db: TargetDB = new_target.into();

        diesel::insert_into(targets::table)
            .values(&target_db)
            .execute(&mut conn)
            .map_err(StorageError::from)?;

        Ok(Target::try_from(target_db)?)
    }

    fn get_by_id(&self, target_id: &str) -> Result<Option<Target>> {
        let mut conn = get_connection(&self.pool)?;
        let found = targets::table
            .find(target_id)
            .select(TargetDB::as_select())
            .first::<TargetDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(found.map(Target::try_from).transpose()?)
    }

    fn list_by_portfolio(
        &self,
        portfolio_id: &str,
        status: Option<TargetStatus>,
    ) -> Result<Vec<Target>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = targets::table
            .filter(targets::portfolio_id.eq(portfolio_id))
            .into_boxed();
        if let Some(status) = status {
            query = query.filter(targets::status.eq(status.as_str()));
        }

        let rows = query
            .select(TargetDB::as_select())
            .order((targets::created_at.desc(), targets::id.desc()))
            .load::<TargetDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter()
            .map(|row| Target::try_from(row).map_err(Error::from))
            .collect()
    }

    fn update_status(&self, target_id: &str, status: TargetStatus) -> Result<Target> {
        let mut conn = get_connection(&self.pool)?;
        let updated = diesel::update(targets::table.find(target_id))
            .set((
                targets::status.eq(status.as_str()),
                targets::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .returning(TargetDB::as_returning())
            .get_result::<TargetDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .ok_or_else(|| Error::NotFound(format!("Target {} not found", target_id)))?;
        Ok(Target::try_from(updated)?)
    }

    fn delete(&self, target_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(targets::table.find(target_id))
            .execute(&mut conn)
            .map_err(StorageError::from)?)
    }
}
