use std::time::{SystemTime, UNIX_EPOCH};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("system clock is before the unix epoch")]
    Clock,
    #[error("inventory source unavailable: {0}")]
    Unavailable(String),
}

/// Where the remaining-unit count comes from.
///
/// The production run is fixed; only the remaining count is queried.
#[async_trait]
pub trait InventorySource: Send + Sync {
    async fn remaining(&self) -> Result<u32, InventoryError>;
}

/// Placeholder inventory that "sells" one unit per 100 seconds of wall
/// clock, cycling through the run.  Stands in for a real provider-side
/// inventory query.
#[derive(Debug, Clone, Copy)]
pub struct ClockInventory {
    pub total: u32,
}

#[async_trait]
impl InventorySource for ClockInventory {
    async fn remaining(&self) -> Result<u32, InventoryError> {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| InventoryError::Clock)?
            .as_millis() as u64;
        let sold = (millis / 100_000) % (u64::from(self.total) + 1);
        Ok(self.total.saturating_sub(sold as u32))
    }
}

/// Inventory pinned to a constant count.  Test double.
#[derive(Debug, Clone, Copy)]
pub struct FixedInventory(pub u32);

#[async_trait]
impl InventorySource for FixedInventory {
    async fn remaining(&self) -> Result<u32, InventoryError> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clock_inventory_stays_within_the_run() {
        let source = ClockInventory { total: 50 };
        let remaining = source.remaining().await.unwrap();
        assert!(remaining <= 50);
    }

    #[tokio::test]
    async fn clock_inventory_survives_the_largest_run() {
        // The modulus is total + 1; computing it in u64 keeps a
        // u32::MAX run from wrapping to a zero divisor.
        let source = ClockInventory { total: u32::MAX };
        let remaining = source.remaining().await.unwrap();
        assert!(remaining <= u32::MAX);
    }

    #[tokio::test]
    async fn fixed_inventory_reports_its_count() {
        assert_eq!(FixedInventory(7).remaining().await.unwrap(), 7);
        assert_eq!(FixedInventory(0).remaining().await.unwrap(), 0);
    }
}
