//! Traders shared between threads.
//!
//! A bulk sale reads the buyer's wishlist and both balances before moving
//! anything, so both traders stay locked for the whole sale. Locks are always
//! taken in ascending [`TraderId`] order; two threads selling in opposite
//! directions therefore queue up instead of deadlocking.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use super::entities::Item;
use super::pricing::{ListPrice, PricingRule};
use super::trader::{Trader, TraderId};

pub struct SharedTrader<I, P = ListPrice> {
    id: TraderId,
    inner: Arc<Mutex<Trader<I, P>>>,
}

impl<I, P> Clone for SharedTrader<I, P> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I, P> SharedTrader<I, P>
where
    I: Item,
    P: PricingRule<I>,
{
    pub fn new(trader: Trader<I, P>) -> Self {
        Self {
            id: trader.id(),
            inner: Arc::new(Mutex::new(trader)),
        }
    }

    pub fn id(&self) -> TraderId {
        self.id
    }

    pub fn lock(&self) -> MutexGuard<'_, Trader<I, P>> {
        self.inner.lock()
    }

    /// Locked bulk sale. Selling to yourself is a no-op.
    pub fn sell_to(&self, buyer: &Self) -> bool {
        if self.id == buyer.id {
            return false;
        }

        let (mut seller_guard, mut buyer_guard) = if self.id < buyer.id {
            let seller_guard = self.inner.lock();
            let buyer_guard = buyer.inner.lock();
            (seller_guard, buyer_guard)
        } else {
            let buyer_guard = buyer.inner.lock();
            let seller_guard = self.inner.lock();
            (seller_guard, buyer_guard)
        };

        seller_guard.sell_to(&mut buyer_guard)
    }

    pub fn buy_from(&self, seller: &Self) -> bool {
        seller.sell_to(self)
    }
}
