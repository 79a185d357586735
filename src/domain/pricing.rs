//! Selling-price rules a trader applies to the items it sells.

use serde::{Deserialize, Serialize};

use super::entities::{Drivable, Item, Money};

/// Computes what a trader asks for an item. `None` means the item cannot be sold.
pub trait PricingRule<I> {
    fn selling_price(&self, item: &I) -> Option<Money>;
}

/// The item's own price, unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPrice;

impl<I: Item> PricingRule<I> for ListPrice {
    fn selling_price(&self, item: &I) -> Option<Money> {
        item.price()
    }
}

/// Base price plus top speed. A fast vehicle with no price is still unpriced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedPremium;

impl<I: Drivable> PricingRule<I> for SpeedPremium {
    fn selling_price(&self, item: &I) -> Option<Money> {
        item.price()?.checked_add(Money::from(item.max_speed()))
    }
}

/// Adapts a plain function into a pricing rule.
#[derive(Clone, Copy, Debug)]
pub struct PriceFn<F>(pub F);

impl<I, F> PricingRule<I> for PriceFn<F>
where
    F: Fn(&I) -> Option<Money>,
{
    fn selling_price(&self, item: &I) -> Option<Money> {
        (self.0)(item)
    }
}
