use async_trait::async_trait;
use rust_decimal::Decimal;

// ============================================================================
// Price Lookup - Pricing Collaborator Boundary
// ============================================================================
//
// Resolves a product identifier to a unit price. The mock below stands in
// for a real pricing service; a future client implementation replaces it
// behind the same trait without touching the order service.
//
// ============================================================================

#[async_trait]
pub trait PriceLookup: Send + Sync {
    /// Unit price for a product. Total over all product identifiers; a real
    /// backend may fail, the mock never does.
    async fn unit_price(&self, product_id: i64) -> Decimal;
}

/// Deterministic mock pricing: 1000 + product_id * 100.
pub struct MockPriceLookup;

#[async_trait]
impl PriceLookup for MockPriceLookup {
    async fn unit_price(&self, product_id: i64) -> Decimal {
        Decimal::from(1000) + Decimal::from(product_id) * Decimal::from(100)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_mock_price_formula() {
        let pricing = MockPriceLookup;

        assert_eq!(pricing.unit_price(0).await, dec!(1000));
        assert_eq!(pricing.unit_price(1).await, dec!(1100));
        assert_eq!(pricing.unit_price(2).await, dec!(1200));
        assert_eq!(pricing.unit_price(42).await, dec!(5200));
    }

    #[tokio::test]
    async fn test_mock_price_is_deterministic() {
        let pricing = MockPriceLookup;

        let first = pricing.unit_price(7).await;
        let second = pricing.unit_price(7).await;
        assert_eq!(first, second);
    }
}
