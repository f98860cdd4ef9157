use chrono::{DateTime, Utc};
use serde::Serialize;

/// One classified mention of the product on the fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductStatus {
    pub title: String,
    pub snippet: String,
    /// `Some(true)` in stock, `Some(false)` out of stock, `None` undetermined.
    pub in_stock: Option<bool>,
}

impl ProductStatus {
    pub fn label(&self) -> &'static str {
        match self.in_stock {
            Some(true) => "likely in stock",
            Some(false) => "out of stock or needs confirmation",
            None => "undetermined",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    InStock,
    NoneInStock,
    NotFound,
}

impl Outcome {
    pub fn from_statuses(statuses: &[ProductStatus]) -> Self {
        if statuses.is_empty() {
            Outcome::NotFound
        } else if statuses.iter().any(|s| s.in_stock == Some(true)) {
            Outcome::InStock
        } else {
            Outcome::NoneInStock
        }
    }

    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::InStock => 0,
            Outcome::NoneInStock => 1,
            Outcome::NotFound => 2,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StockReport {
    pub keyword: String,
    pub url: String,
    pub checked_at: DateTime<Utc>,
    pub outcome: Outcome,
    pub statuses: Vec<ProductStatus>,
}

impl StockReport {
    pub fn new(keyword: String, url: String, statuses: Vec<ProductStatus>) -> Self {
        Self {
            keyword,
            url,
            checked_at: Utc::now(),
            outcome: Outcome::from_statuses(&statuses),
            statuses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(in_stock: Option<bool>) -> ProductStatus {
        ProductStatus {
            title: "X100VI".to_string(),
            snippet: "X100VI".to_string(),
            in_stock,
        }
    }

    #[test]
    fn test_outcome_from_statuses() {
        assert_eq!(Outcome::from_statuses(&[]), Outcome::NotFound);
        assert_eq!(
            Outcome::from_statuses(&[status(None), status(Some(false))]),
            Outcome::NoneInStock
        );
        assert_eq!(
            Outcome::from_statuses(&[status(Some(false)), status(Some(true))]),
            Outcome::InStock
        );
    }

    #[test]
    fn test_outcome_exit_codes() {
        assert_eq!(Outcome::InStock.exit_code(), 0);
        assert_eq!(Outcome::NoneInStock.exit_code(), 1);
        assert_eq!(Outcome::NotFound.exit_code(), 2);
    }
}
