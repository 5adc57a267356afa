#[cfg(test)]
mod tests {
    use crate::config::CoreConfig;
    use crate::errors::{DomainError, Error, Result};
    use crate::money::{Money, Quantity};
    use crate::positions::{
        Position, PositionRepositoryTrait, PositionService, PositionServiceTrait,
    };
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    // --- Mock PositionRepository ---
    #[derive(Default)]
    struct MockPositionRepository {
        positions: Mutex<Vec<Position>>,
    }

    impl MockPositionRepository {
        fn count(&self) -> usize {
            self.positions.lock().unwrap().len()
        }
    }

    impl PositionRepositoryTrait for MockPositionRepository {
        fn create(&self, position: &Position) -> Result<Position> {
            let mut positions = self.positions.lock().unwrap();
            if positions.iter().any(|p| {
                p.portfolio_id() == position.portfolio_id() && p.stock_id() == position.stock_id()
            }) {
                return Err(Error::ConstraintViolation(format!(
                    "Position for portfolio {} and stock {} already exists",
                    position.portfolio_id(),
                    position.stock_id()
                )));
            }
            positions.push(position.clone());
            Ok(position.clone())
        }

        fn update(&self, position: &Position) -> Result<Position> {
            let mut positions = self.positions.lock().unwrap();
            let slot = positions
                .iter_mut()
                .find(|p| p.id() == position.id())
                .ok_or_else(|| Error::NotFound(position.id().to_string()))?;
            *slot = position.clone();
            Ok(position.clone())
        }

        fn get_by_id(&self, position_id: &str) -> Result<Option<Position>> {
            let positions = self.positions.lock().unwrap();
            Ok(positions.iter().find(|p| p.id() == position_id).cloned())
        }

        fn get_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Position>> {
            let positions = self.positions.lock().unwrap();
            Ok(positions
                .iter()
                .filter(|p| p.portfolio_id() == portfolio_id)
                .cloned()
                .collect())
        }

        fn get_by_portfolio_and_stock(
            &self,
            portfolio_id: &str,
            stock_id: &str,
        ) -> Result<Option<Position>> {
            let positions = self.positions.lock().unwrap();
            Ok(positions
                .iter()
                .find(|p| p.portfolio_id() == portfolio_id && p.stock_id() == stock_id)
                .cloned())
        }

        fn delete(&self, position_id: &str) -> Result<bool> {
            let mut positions = self.positions.lock().unwrap();
            let before = positions.len();
            positions.retain(|p| p.id() != position_id);
            Ok(positions.len() != before)
        }

        fn delete_by_portfolio_and_stock(&self, portfolio_id: &str, stock_id: &str) -> Result<bool> {
            let mut positions = self.positions.lock().unwrap();
            let before = positions.len();
            positions.retain(|p| !(p.portfolio_id() == portfolio_id && p.stock_id() == stock_id));
            Ok(positions.len() != before)
        }
    }

    fn service(remove_closed: bool) -> (PositionService, Arc<MockPositionRepository>) {
        let repo = Arc::new(MockPositionRepository::default());
        let config = CoreConfig::default().with_remove_closed_positions(remove_closed);
        (
            PositionService::new(repo.clone(), Arc::new(config)),
            repo,
        )
    }

    fn q(s: &str) -> Quantity {
        Quantity::new(s).unwrap()
    }

    fn m(s: &str) -> Money {
        Money::new(s).unwrap()
    }

    #[test]
    fn test_first_buy_opens_position() {
        let (service, repo) = service(true);
        let position = service.apply_buy("pf-1", "AAPL", q("100"), m("150")).unwrap();
        assert_eq!(position.quantity().value(), dec!(100));
        assert_eq!(position.average_cost().amount(), dec!(150.00));
        assert!(position.last_transaction_date().is_some());
        assert_eq!(repo.count(), 1);
    }

    #[test]
    fn test_second_buy_updates_average() {
        let (service, repo) = service(true);
        service.apply_buy("pf-1", "AAPL", q("100"), m("150")).unwrap();
        let position = service.apply_buy("pf-1", "AAPL", q("100"), m("170")).unwrap();
        assert_eq!(position.quantity().value(), dec!(200));
        assert_eq!(position.average_cost().amount(), dec!(160.00));
        assert_eq!(repo.count(), 1);
    }

    #[test]
    fn test_sell_without_position_is_domain_error() {
        let (service, _) = service(true);
        let err = service.apply_sell("pf-1", "AAPL", q("1")).unwrap_err();
        assert!(matches!(
            err,
            Error::Domain(DomainError::PositionNotFound { .. })
        ));
        assert!(service.check_sell("pf-1", "AAPL", q("1")).is_err());
    }

    #[test]
    fn test_oversell_leaves_stored_position() {
        let (service, _) = service(true);
        service.apply_buy("pf-1", "AAPL", q("10"), m("5")).unwrap();
        assert!(service.check_sell("pf-1", "AAPL", q("11")).is_err());
        assert!(service.apply_sell("pf-1", "AAPL", q("11")).is_err());

        let stored = service.get_position("pf-1", "AAPL").unwrap().unwrap();
        assert_eq!(stored.quantity().value(), dec!(10));
    }

    #[test]
    fn test_partial_sell_keeps_average_cost() {
        let (service, _) = service(true);
        service.apply_buy("pf-1", "AAPL", q("100"), m("150")).unwrap();
        let position = service.apply_sell("pf-1", "AAPL", q("30")).unwrap();
        assert_eq!(position.quantity().value(), dec!(70));
        assert_eq!(position.average_cost().amount(), dec!(150.00));
    }

    #[test]
    fn test_full_exit_removes_position_when_configured() {
        let (service, repo) = service(true);
        service.apply_buy("pf-1", "AAPL", q("10"), m("5")).unwrap();
        let closed = service.apply_sell("pf-1", "AAPL", q("10")).unwrap();
        assert!(closed.is_closed());
        assert_eq!(repo.count(), 0);
    }

    #[test]
    fn test_full_exit_keeps_zero_position_when_configured() {
        let (service, repo) = service(false);
        service.apply_buy("pf-1", "AAPL", q("10"), m("5")).unwrap();
        service.apply_sell("pf-1", "AAPL", q("10")).unwrap();
        assert_eq!(repo.count(), 1);
        let stored = service.get_position("pf-1", "AAPL").unwrap().unwrap();
        assert!(stored.is_closed());
    }

    #[test]
    fn test_positions_are_scoped_to_portfolio() {
        let (service, _) = service(true);
        service.apply_buy("pf-1", "AAPL", q("1"), m("1")).unwrap();
        service.apply_buy("pf-1", "MSFT", q("1"), m("1")).unwrap();
        service.apply_buy("pf-2", "AAPL", q("1"), m("1")).unwrap();
        assert_eq!(service.get_positions("pf-1").unwrap().len(), 2);
        assert_eq!(service.get_positions("pf-2").unwrap().len(), 1);
    }

    #[test]
    fn test_delete_missing_position_is_not_found() {
        let (service, _) = service(true);
        let err = service.delete_position("nope").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
