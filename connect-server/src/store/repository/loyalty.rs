//! Loyalty Repository
//!
//! One row per customer. Points move by signed delta - the caller decides
//! whether a change is an earn or a redeem - and the stored level is
//! recomputed from the fixed bronze/silver/gold thresholds on every write.

use shared::models::{LoyaltyLevel, LoyaltyPoints};

use crate::store::MemStore;

#[derive(Clone)]
pub struct LoyaltyRepository {
    store: MemStore,
}

impl LoyaltyRepository {
    pub fn new(store: MemStore) -> Self {
        Self { store }
    }

    /// Find the loyalty account of a customer
    pub fn find_by_customer(&self, customer_id: i64) -> Option<LoyaltyPoints> {
        self.store.inner.loyalty.get(&customer_id).map(|l| l.clone())
    }

    /// Add a signed delta to a customer's points
    ///
    /// Creates the row with `delta` as the initial balance when the customer
    /// has none yet (registration seeds it with a delta of 0).
    pub fn add_points(&self, customer_id: i64, delta: i64) -> LoyaltyPoints {
        let inner = &self.store.inner;
        let mut entry = inner
            .loyalty
            .entry(customer_id)
            .or_insert_with(|| LoyaltyPoints {
                id: inner.ids.loyalty.next(),
                customer_id,
                points: 0,
                level: LoyaltyLevel::Bronze,
            });
        entry.points += delta;
        entry.level = LoyaltyLevel::from_points(entry.points);
        entry.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_delta_creates_the_account() {
        let repo = LoyaltyRepository::new(MemStore::new());
        assert!(repo.find_by_customer(5).is_none());

        let account = repo.add_points(5, 0);
        assert_eq!(account.points, 0);
        assert_eq!(account.level, LoyaltyLevel::Bronze);
    }

    #[test]
    fn level_recomputed_on_every_write() {
        let repo = LoyaltyRepository::new(MemStore::new());
        assert_eq!(repo.add_points(1, 1999).level, LoyaltyLevel::Bronze);
        assert_eq!(repo.add_points(1, 1).level, LoyaltyLevel::Silver);
        assert_eq!(repo.add_points(1, 2999).level, LoyaltyLevel::Silver);
        assert_eq!(repo.add_points(1, 1).level, LoyaltyLevel::Gold);
    }

    #[test]
    fn redeem_can_drop_the_level() {
        let repo = LoyaltyRepository::new(MemStore::new());
        repo.add_points(1, 5200);
        let account = repo.add_points(1, -4000);
        assert_eq!(account.points, 1200);
        assert_eq!(account.level, LoyaltyLevel::Bronze);
    }
}
