#[cfg(test)]
mod tests {
    use crate::balances::*;
    use crate::config::CoreConfig;
    use crate::errors::Result;
    use crate::money::Money;
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    // --- Mock BalanceRepository with upsert semantics ---
    #[derive(Default)]
    struct MockBalanceRepository {
        rows: Mutex<Vec<PortfolioBalance>>,
        last_limit: Mutex<Option<i64>>,
    }

    impl BalanceRepositoryTrait for MockBalanceRepository {
        fn upsert(&self, balance: NewPortfolioBalance) -> Result<PortfolioBalance> {
            let mut rows = self.rows.lock().unwrap();
            let now = Utc::now().naive_utc();
            if let Some(existing) = rows.iter_mut().find(|r| {
                r.portfolio_id == balance.portfolio_id && r.balance_date == balance.balance_date
            }) {
                existing.final_balance = balance.final_balance;
                existing.withdrawals = balance.withdrawals;
                existing.deposits = balance.deposits;
                existing.index_change = balance.index_change;
                existing.updated_at = now;
                return Ok(existing.clone());
            }
            let row = PortfolioBalance {
                id: format!("bal-{}", rows.len()),
                portfolio_id: balance.portfolio_id,
                balance_date: balance.balance_date,
                final_balance: balance.final_balance,
                withdrawals: balance.withdrawals,
                deposits: balance.deposits,
                index_change: balance.index_change,
                created_at: now,
                updated_at: now,
            };
            rows.push(row.clone());
            Ok(row)
        }

        fn get_history(&self, portfolio_id: &str, limit: i64) -> Result<Vec<PortfolioBalance>> {
            *self.last_limit.lock().unwrap() = Some(limit);
            let mut rows: Vec<PortfolioBalance> = self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.portfolio_id == portfolio_id)
                .cloned()
                .collect();
            rows.sort_by(|a, b| b.balance_date.cmp(&a.balance_date));
            rows.truncate(limit as usize);
            Ok(rows)
        }

        fn get_by_date(
            &self,
            portfolio_id: &str,
            date: NaiveDate,
        ) -> Result<Option<PortfolioBalance>> {
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .find(|r| r.portfolio_id == portfolio_id && r.balance_date == date)
                .cloned())
        }

        fn delete(&self, balance_id: &str) -> Result<usize> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|r| r.id != balance_id);
            Ok(before - rows.len())
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn setup() -> (BalanceService, Arc<MockBalanceRepository>) {
        let repo = Arc::new(MockBalanceRepository::default());
        let config = CoreConfig::default().with_balance_history_limit(2);
        (BalanceService::new(repo.clone(), Arc::new(config)), repo)
    }

    #[test]
    fn test_second_record_for_same_day_overwrites() {
        let (service, repo) = setup();
        service
            .record_balance(NewPortfolioBalance::new("pf-1", day(3), Money::new(1000).unwrap()))
            .unwrap();
        let second = service
            .record_balance(NewPortfolioBalance::new("pf-1", day(3), Money::new(1250).unwrap()))
            .unwrap();

        assert_eq!(repo.rows.lock().unwrap().len(), 1);
        assert_eq!(second.final_balance.amount(), dec!(1250.00));
        let stored = service.get_balance("pf-1", day(3)).unwrap().unwrap();
        assert_eq!(stored.final_balance.amount(), dec!(1250.00));
    }

    #[test]
    fn test_history_uses_configured_default_limit() {
        let (service, repo) = setup();
        for d in 1..=4 {
            service
                .record_balance(NewPortfolioBalance::new("pf-1", day(d), Money::new(d).unwrap()))
                .unwrap();
        }
        let history = service.get_history("pf-1", None).unwrap();
        assert_eq!(*repo.last_limit.lock().unwrap(), Some(2));
        assert_eq!(
            history.iter().map(|b| b.balance_date).collect::<Vec<_>>(),
            vec![day(4), day(3)]
        );

        service.get_history("pf-1", Some(0)).unwrap();
        assert_eq!(*repo.last_limit.lock().unwrap(), Some(2));
        assert_eq!(service.get_history("pf-1", Some(10)).unwrap().len(), 4);
    }

    #[test]
    fn test_negative_cash_flows_are_rejected() {
        let (service, repo) = setup();
        let mut balance = NewPortfolioBalance::new("pf-1", day(1), Money::new(10).unwrap());
        balance.withdrawals = Money::new(-5).unwrap();
        balance.deposits = Money::new(-1).unwrap();
        let err = service.record_balance(balance).unwrap_err();
        let fields = err.field_errors().unwrap();
        assert_eq!(fields.get("withdrawals"), Some("Withdrawals cannot be negative"));
        assert_eq!(fields.get("deposits"), Some("Deposits cannot be negative"));
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[test]
    fn test_cash_flows_and_index_change_are_kept() {
        let (service, _) = setup();
        let mut balance = NewPortfolioBalance::new("pf-1", day(7), Money::new("5120.40").unwrap());
        balance.deposits = Money::new(500).unwrap();
        balance.withdrawals = Money::new("120.40").unwrap();
        balance.index_change = Some(dec!(-0.8721));
        let stored = service.record_balance(balance).unwrap();
        assert_eq!(stored.net_flow().amount(), dec!(379.60));
        assert_eq!(stored.index_change, Some(dec!(-0.8721)));
    }

    #[test]
    fn test_missing_cash_flows_default_to_zero() {
        let balance: NewPortfolioBalance = serde_json::from_str(
            r#"{"portfolioId":"pf-1","balanceDate":"2024-06-01","finalBalance":100.5}"#,
        )
        .unwrap();
        assert!(balance.withdrawals.is_zero());
        assert!(balance.deposits.is_zero());
        assert_eq!(balance.index_change, None);
    }
}
