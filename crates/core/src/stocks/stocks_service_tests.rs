#[cfg(test)]
mod tests {
    use crate::config::CoreConfig;
    use crate::errors::{Error, Result};
    use crate::stocks::{
        NewStock, Stock, StockGrade, StockRepositoryTrait, StockService, StockServiceTrait,
        StockUpdate,
    };
    use crate::utils::time_utils::now_naive_utc;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MockStockRepository {
        stocks: Mutex<Vec<Stock>>,
    }

    impl StockRepositoryTrait for MockStockRepository {
        fn create(&self, new_stock: NewStock) -> Result<Stock> {
            let mut stocks = self.stocks.lock().unwrap();
            if stocks.iter().any(|s| s.symbol == new_stock.symbol) {
                return Err(Error::ConstraintViolation(format!(
                    "Stock with symbol {} already exists",
                    new_stock.symbol
                )));
            }
            let now = now_naive_utc();
            let stock = Stock {
                id: new_stock
                    .id
                    .unwrap_or_else(|| format!("stk-{}", new_stock.symbol.to_lowercase())),
                symbol: new_stock.symbol,
                name: new_stock.name,
                industry: new_stock.industry,
                grade: new_stock.grade,
                notes: new_stock.notes,
                created_at: now,
                updated_at: now,
            };
            stocks.push(stock.clone());
            Ok(stock)
        }

        fn update(&self, stock_update: StockUpdate) -> Result<Stock> {
            let mut stocks = self.stocks.lock().unwrap();
            let stock = stocks
                .iter_mut()
                .find(|s| s.id == stock_update.id)
                .ok_or_else(|| Error::NotFound(stock_update.id.clone()))?;
            stock.name = stock_update.name;
            stock.industry = stock_update.industry;
            stock.grade = stock_update.grade;
            stock.notes = stock_update.notes;
            Ok(stock.clone())
        }

        fn get_by_id(&self, stock_id: &str) -> Result<Option<Stock>> {
            let stocks = self.stocks.lock().unwrap();
            Ok(stocks.iter().find(|s| s.id == stock_id).cloned())
        }

        fn get_by_symbol(&self, symbol: &str) -> Result<Option<Stock>> {
            let stocks = self.stocks.lock().unwrap();
            Ok(stocks.iter().find(|s| s.symbol == symbol).cloned())
        }

        fn list(&self) -> Result<Vec<Stock>> {
            let mut stocks = self.stocks.lock().unwrap().clone();
            stocks.sort_by(|a, b| a.symbol.cmp(&b.symbol));
            Ok(stocks)
        }

        fn delete(&self, stock_id: &str) -> Result<usize> {
            let mut stocks = self.stocks.lock().unwrap();
            let before = stocks.len();
            stocks.retain(|s| s.id != stock_id);
            Ok(before - stocks.len())
        }
    }

    fn service() -> StockService {
        StockService::new(
            Arc::new(MockStockRepository::default()),
            Arc::new(CoreConfig::default()),
        )
    }

    fn new_stock(symbol: &str, name: &str) -> NewStock {
        NewStock {
            id: None,
            symbol: symbol.to_string(),
            name: name.to_string(),
            industry: Some("Technology".to_string()),
            grade: Some(StockGrade::A),
            notes: None,
        }
    }

    #[test]
    fn test_create_normalizes_symbol() {
        let service = service();
        let stock = service.create_stock(new_stock(" msft ", " Microsoft ")).unwrap();
        assert_eq!(stock.symbol, "MSFT");
        assert_eq!(stock.name, "Microsoft");
        assert!(service.find_by_symbol("msft").unwrap().is_some());
    }

    #[test]
    fn test_create_rejects_bad_symbol_and_duplicates() {
        let service = service();
        assert!(matches!(
            service.create_stock(new_stock("12AB", "Numbers")),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            service.create_stock(new_stock("ABCDEFGHIJK", "Too long")),
            Err(Error::Validation(_))
        ));

        service.create_stock(new_stock("AAPL", "Apple")).unwrap();
        assert!(matches!(
            service.create_stock(new_stock("AAPL", "Apple again")),
            Err(Error::ConstraintViolation(_))
        ));
    }

    #[test]
    fn test_list_is_sorted_by_symbol() {
        let service = service();
        for symbol in ["TSLA", "AAPL", "MSFT"] {
            service.create_stock(new_stock(symbol, symbol)).unwrap();
        }
        let symbols: Vec<String> = service
            .list_stocks()
            .unwrap()
            .into_iter()
            .map(|s| s.symbol)
            .collect();
        assert_eq!(symbols, vec!["AAPL", "MSFT", "TSLA"]);
    }

    #[test]
    fn test_get_and_delete_missing_stock() {
        let service = service();
        assert!(matches!(service.get_stock("nope"), Err(Error::NotFound(_))));
        assert!(matches!(service.delete_stock("nope"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_update_changes_grade() {
        let service = service();
        let stock = service.create_stock(new_stock("AAPL", "Apple")).unwrap();
        let updated = service
            .update_stock(StockUpdate {
                id: stock.id.clone(),
                name: "Apple Inc.".to_string(),
                industry: None,
                grade: Some(StockGrade::C),
                notes: Some("downgraded".to_string()),
            })
            .unwrap();
        assert_eq!(updated.grade, Some(StockGrade::C));
        assert_eq!(service.get_stock(&stock.id).unwrap().name, "Apple Inc.");
    }
}
