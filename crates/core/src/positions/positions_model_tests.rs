//! Tests for the Position aggregate and its builder.

#[cfg(test)]
mod tests {
    use crate::errors::{DomainError, Error, ValidationError};
    use crate::money::{Money, Quantity};
    use crate::positions::Position;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn money(s: &str) -> Money {
        Money::new(s).unwrap()
    }

    fn qty(s: &str) -> Quantity {
        Quantity::new(s).unwrap()
    }

    fn open_position(quantity: &str, average_cost: &str) -> Position {
        Position::builder()
            .portfolio_id("pf-1")
            .stock_id("stk-1")
            .quantity(qty(quantity))
            .average_cost(money(average_cost))
            .build()
            .unwrap()
    }

    // ==================== Builder ====================

    #[test]
    fn test_builder_requires_average_cost() {
        let err = Position::builder()
            .portfolio_id("pf-1")
            .stock_id("stk-1")
            .quantity(qty("10"))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("Average cost is required"));
        assert!(matches!(err, Error::Validation(ValidationError::Required(_))));
    }

    #[test]
    fn test_builder_keeps_explicit_id() {
        let position = Position::builder()
            .id("pos-1")
            .portfolio_id("pf-1")
            .stock_id("stk-1")
            .quantity(qty("10"))
            .average_cost(money("12.50"))
            .build()
            .unwrap();
        assert_eq!(position.id(), "pos-1");
        assert!(position.last_transaction_date().is_none());
    }

    #[test]
    fn test_builder_generates_id_when_absent() {
        let a = open_position("1", "1");
        let b = open_position("1", "1");
        assert!(!a.id().is_empty());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_builder_names_each_missing_field() {
        let err = Position::builder().build().unwrap_err();
        assert!(err.to_string().contains("Portfolio ID is required"));

        let err = Position::builder().portfolio_id("pf-1").build().unwrap_err();
        assert!(err.to_string().contains("Stock ID is required"));

        let err = Position::builder()
            .portfolio_id("pf-1")
            .stock_id("stk-1")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("Quantity is required"));
    }

    #[test]
    fn test_builder_rejects_empty_ids() {
        let err = Position::builder()
            .portfolio_id("")
            .stock_id("stk-1")
            .quantity(Quantity::zero())
            .average_cost(Money::zero())
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::EmptyField(_))
        ));

        let err = Position::builder()
            .portfolio_id("pf-1")
            .stock_id("   ")
            .quantity(Quantity::zero())
            .average_cost(Money::zero())
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("Stock ID cannot be empty"));
    }

    #[test]
    fn test_builder_rehydrates_last_transaction_date() {
        let stamp = Utc.with_ymd_and_hms(2024, 3, 1, 15, 30, 0).unwrap();
        let position = Position::builder()
            .id("pos-9")
            .portfolio_id("pf-1")
            .stock_id("stk-1")
            .quantity(qty("3"))
            .average_cost(money("7"))
            .last_transaction_date(stamp)
            .build()
            .unwrap();
        assert_eq!(position.last_transaction_date(), Some(stamp));
    }

    // ==================== Valuation ====================

    #[test]
    fn test_total_cost_and_current_value() {
        let position = open_position("10", "150.25");
        assert_eq!(position.calculate_total_cost().unwrap().amount(), dec!(1502.50));
        assert_eq!(
            position.calculate_current_value(money("160")).unwrap().amount(),
            dec!(1600.00)
        );
    }

    #[test]
    fn test_total_cost_rounds_once_for_fractional_shares() {
        let position = open_position("0.333", "10.01");
        // 3.33333 -> 3.33
        assert_eq!(position.calculate_total_cost().unwrap().amount(), dec!(3.33));
    }

    #[test]
    fn test_gain_loss_is_signed() {
        let position = open_position("10", "100");
        assert_eq!(
            position.calculate_gain_loss(money("90")).unwrap().amount(),
            dec!(-100.00)
        );
        assert_eq!(
            position.calculate_gain_loss(money("112.5")).unwrap().amount(),
            dec!(125.00)
        );
    }

    #[test]
    fn test_gain_loss_percentage() {
        let position = open_position("10", "100");
        assert_eq!(
            position
                .calculate_gain_loss_percentage(money("125"))
                .unwrap(),
            dec!(25)
        );
        assert_eq!(
            position.calculate_gain_loss_percentage(money("80")).unwrap(),
            dec!(-20)
        );
    }

    #[test]
    fn test_gain_loss_percentage_with_zero_cost_fails() {
        let position = open_position("0", "100");
        let err = position
            .calculate_gain_loss_percentage(money("100"))
            .unwrap_err();
        assert!(matches!(err, Error::Domain(DomainError::DivisionByZero(_))));

        let free_shares = open_position("5", "0");
        assert!(free_shares
            .calculate_gain_loss_percentage(money("10"))
            .is_err());
    }

    #[test]
    fn test_breakeven_is_not_profitable() {
        let position = open_position("10", "100");
        assert!(!position.is_profitable(money("100")).unwrap());
        assert!(position.is_profitable(money("100.01")).unwrap());
        assert!(!position.is_profitable(money("99.99")).unwrap());
    }

    #[test]
    fn test_valuation_overflow_is_an_error() {
        let position = open_position("1000", "100");
        let huge = money("1e27");

        for result in [
            position.calculate_current_value(huge),
            position.calculate_gain_loss(huge),
        ] {
            assert!(matches!(
                result.unwrap_err(),
                Error::Domain(DomainError::Overflow(_))
            ));
        }
        assert!(position.is_profitable(huge).is_err());
        assert!(position.calculate_gain_loss_percentage(huge).is_err());

        let costly = open_position("1000", "1e27");
        assert!(costly.calculate_total_cost().is_err());
    }

    #[test]
    fn test_add_shares_overflow_leaves_position_unchanged() {
        let mut position = open_position("50000000000000000000000000000", "1");
        let before = position.clone();
        let err = position
            .add_shares(qty("50000000000000000000000000000"), money("1"))
            .unwrap_err();
        assert!(matches!(err, Error::Domain(DomainError::Overflow(_))));
        assert_eq!(position, before);
    }

    // ==================== add_shares ====================

    #[test]
    fn test_add_shares_weighted_average() {
        let mut position = open_position("100", "150");
        position.add_shares(qty("50"), money("180")).unwrap();
        // (100*150 + 50*180) / 150 = 160
        assert_eq!(position.quantity().value(), dec!(150));
        assert_eq!(position.average_cost().amount(), dec!(160.00));
        assert!(position.last_transaction_date().is_some());
    }

    #[test]
    fn test_add_shares_repeated_partial_buys() {
        let mut position = open_position("0", "0");
        position.add_shares(qty("3"), money("10")).unwrap();
        position.add_shares(qty("3"), money("10.01")).unwrap();
        position.add_shares(qty("3"), money("10.01")).unwrap();
        // (30 + 30.03) / 6 = 10.005 -> 10.01, then (60.06 + 30.03) / 9 = 10.01
        assert_eq!(position.quantity().value(), dec!(9));
        assert_eq!(position.average_cost().amount(), dec!(10.01));
    }

    #[test]
    fn test_add_shares_to_empty_position_takes_price() {
        let mut position = open_position("0", "0");
        position.add_shares(qty("2.5"), money("40.10")).unwrap();
        assert_eq!(position.average_cost().amount(), dec!(40.10));
        assert_eq!(position.quantity().value(), dec!(2.5));
    }

    #[test]
    fn test_add_zero_shares_is_noop() {
        let mut position = open_position("10", "100");
        let before = position.clone();
        position.add_shares(Quantity::zero(), money("999")).unwrap();
        assert_eq!(position, before);
        assert!(position.last_transaction_date().is_none());
    }

    // ==================== remove_shares ====================

    #[test]
    fn test_remove_shares_keeps_average_cost() {
        let mut position = open_position("100", "150");
        position.remove_shares(qty("30")).unwrap();
        assert_eq!(position.quantity().value(), dec!(70));
        assert_eq!(position.average_cost().amount(), dec!(150.00));
        assert!(position.last_transaction_date().is_some());
    }

    #[test]
    fn test_remove_all_shares_closes_position() {
        let mut position = open_position("12.5", "20");
        position.remove_shares(qty("12.5")).unwrap();
        assert!(position.is_closed());
        assert_eq!(position.average_cost().amount(), dec!(20.00));
    }

    #[test]
    fn test_remove_more_than_held_fails_and_leaves_position() {
        let mut position = open_position("10", "100");
        let before = position.clone();
        let err = position.remove_shares(qty("10.0001")).unwrap_err();
        assert!(matches!(
            err,
            Error::Domain(DomainError::InsufficientQuantity { .. })
        ));
        assert_eq!(position, before);
    }

    #[test]
    fn test_remove_zero_shares_is_noop() {
        let mut position = open_position("10", "100");
        let before = position.clone();
        position.remove_shares(Quantity::zero()).unwrap();
        assert_eq!(position, before);
    }

    #[test]
    fn test_serializes_camel_case() {
        let position = Position::builder()
            .id("pos-1")
            .portfolio_id("pf-1")
            .stock_id("stk-1")
            .quantity(qty("4"))
            .average_cost(money("2.5"))
            .build()
            .unwrap();
        let json = serde_json::to_value(&position).unwrap();
        assert_eq!(json["portfolioId"], "pf-1");
        assert_eq!(json["averageCost"], 2.5);
        assert!(json["lastTransactionDate"].is_null());
    }
}
