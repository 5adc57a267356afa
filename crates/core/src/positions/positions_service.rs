use log::{debug, info};
use std::sync::Arc;

use super::positions_model::Position;
use super::positions_traits::{PositionRepositoryTrait, PositionServiceTrait};
use crate::config::CoreConfig;
use crate::errors::{DomainError, Error, Result};
use crate::money::{Money, Quantity};

/// Applies share movements to positions and persists the result.
pub struct PositionService {
    repository: Arc<dyn PositionRepositoryTrait>,
    config: Arc<CoreConfig>,
}

impl PositionService {
    pub fn new(repository: Arc<dyn PositionRepositoryTrait>, config: Arc<CoreConfig>) -> Self {
        Self { repository, config }
    }

    fn load_existing(&self, portfolio_id: &str, stock_id: &str) -> Result<Position> {
        self.repository
            .get_by_portfolio_and_stock(portfolio_id, stock_id)?
            .ok_or_else(|| {
                DomainError::PositionNotFound {
                    portfolio_id: portfolio_id.to_string(),
                    stock_id: stock_id.to_string(),
                }
                .into()
            })
    }

    /// The position as it would be after a buy, and whether it is new.
    fn plan_buy(
        &self,
        portfolio_id: &str,
        stock_id: &str,
        quantity: Quantity,
        price: Money,
    ) -> Result<(Position, bool)> {
        let (mut position, opened) = match self
            .repository
            .get_by_portfolio_and_stock(portfolio_id, stock_id)?
        {
            Some(position) => (position, false),
            None => {
                let position = Position::builder()
                    .portfolio_id(portfolio_id)
                    .stock_id(stock_id)
                    .quantity(Quantity::zero())
                    .average_cost(Money::zero())
                    .build()?;
                (position, true)
            }
        };
        position.add_shares(quantity, price)?;
        Ok((position, opened))
    }
}

impl PositionServiceTrait for PositionService {
    fn get_positions(&self, portfolio_id: &str) -> Result<Vec<Position>> {
        self.repository.get_by_portfolio(portfolio_id)
    }

    fn get_position(&self, portfolio_id: &str, stock_id: &str) -> Result<Option<Position>> {
        self.repository.get_by_portfolio_and_stock(portfolio_id, stock_id)
    }

    fn apply_buy(
        &self,
        portfolio_id: &str,
        stock_id: &str,
        quantity: Quantity,
        price: Money,
    ) -> Result<Position> {
        let (position, opened) = self.plan_buy(portfolio_id, stock_id, quantity, price)?;
        if opened {
            info!(
                "Opening position in stock {} for portfolio {}",
                stock_id, portfolio_id
            );
            self.repository.create(&position)
        } else {
            self.repository.update(&position)
        }
    }

    fn check_buy(
        &self,
        portfolio_id: &str,
        stock_id: &str,
        quantity: Quantity,
        price: Money,
    ) -> Result<()> {
        let (position, _) = self.plan_buy(portfolio_id, stock_id, quantity, price)?;
        debug!(
            "Purchase of {} @ {} into position {} is representable",
            quantity,
            price,
            position.id()
        );
        Ok(())
    }

    fn apply_sell(
        &self,
        portfolio_id: &str,
        stock_id: &str,
        quantity: Quantity,
    ) -> Result<Position> {
        let mut position = self.load_existing(portfolio_id, stock_id)?;
        position.remove_shares(quantity)?;

        if position.is_closed() && self.config.remove_closed_positions {
            info!(
                "Position {} closed, removing it (portfolio {}, stock {})",
                position.id(),
                portfolio_id,
                stock_id
            );
            self.repository.delete(position.id())?;
            return Ok(position);
        }

        self.repository.update(&position)
    }

    fn check_sell(&self, portfolio_id: &str, stock_id: &str, quantity: Quantity) -> Result<()> {
        let mut position = self.load_existing(portfolio_id, stock_id)?;
        position.remove_shares(quantity)?;
        debug!(
            "Sale of {} from position {} is covered",
            quantity,
            position.id()
        );
        Ok(())
    }

    fn delete_position(&self, position_id: &str) -> Result<()> {
        if !self.repository.delete(position_id)? {
            return Err(Error::NotFound(format!("Position {}", position_id)));
        }
        Ok(())
    }
}
