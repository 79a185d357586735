//! Traders and the item-for-money exchange between two of them.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use super::entities::{Item, ItemId, Money, MISSING_PRICE};
use super::pricing::{ListPrice, PricingRule, SpeedPremium};

/// Identity of a trader. Shared traders are locked in ascending id order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraderId(pub Uuid);

impl TraderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TraderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TraderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a single exchange was refused. None of these change any balance.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExchangeError {
    #[error("item {item} has no selling price")]
    MissingPrice { item: ItemId },
    #[error("item {item} costs {price} but the buyer only has {available}")]
    InsufficientFunds {
        item: ItemId,
        price: Money,
        available: Money,
    },
    #[error("seller balance cannot hold the payment for item {item}")]
    BalanceOverflow { item: ItemId },
}

/// Outcome of one bulk sale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settlement {
    /// Ids of the items that changed hands, in the seller's inventory order.
    pub sold: Vec<ItemId>,
    pub revenue: Money,
    /// One entry per wishlisted item the buyer could not pay for.
    pub refusals: Vec<ExchangeError>,
}

impl Settlement {
    pub fn any_sold(&self) -> bool {
        !self.sold.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Trader<I, P = ListPrice> {
    id: TraderId,
    inventory: Vec<I>,
    wishlist: Vec<I>,
    money: Money,
    pricing: P,
}

/// A trader that sells at list price.
pub type BasicTrader<I> = Trader<I, ListPrice>;

/// A trader dealing in drivable items, charging price plus top speed.
pub type DrivableTrader<I> = Trader<I, SpeedPremium>;

impl<I, P> Trader<I, P>
where
    I: Item,
    P: PricingRule<I> + Default,
{
    pub fn new(inventory: Vec<I>, wishlist: Vec<I>, money: Money) -> Self {
        Self::with_pricing(inventory, wishlist, money, P::default())
    }

    /// A trader with money but nothing to sell and nothing wanted yet.
    pub fn with_money(money: Money) -> Self {
        Self::new(Vec::new(), Vec::new(), money)
    }

    pub fn from_snapshot(snapshot: TraderSnapshot<I>) -> Self {
        Self::new(snapshot.inventory, snapshot.wishlist, snapshot.money)
    }
}

impl<I, P> Trader<I, P>
where
    I: Item,
    P: PricingRule<I>,
{
    pub fn with_pricing(inventory: Vec<I>, wishlist: Vec<I>, money: Money, pricing: P) -> Self {
        Self {
            id: TraderId::new(),
            inventory,
            wishlist,
            money,
            pricing,
        }
    }

    pub fn id(&self) -> TraderId {
        self.id
    }

    pub fn inventory(&self) -> &[I] {
        &self.inventory
    }

    pub fn wishlist(&self) -> &[I] {
        &self.wishlist
    }

    pub fn money(&self) -> Money {
        self.money
    }

    pub fn pricing(&self) -> &P {
        &self.pricing
    }

    pub fn wants(&self, item: &I) -> bool {
        self.wishlist.contains(item)
    }

    pub fn add_to_wishlist(&mut self, item: I) {
        self.wishlist.push(item);
    }

    pub fn selling_price(&self, item: &I) -> Option<Money> {
        self.pricing.selling_price(item)
    }

    /// Selling price with [`MISSING_PRICE`] standing in for "cannot be priced".
    pub fn listed_price(&self, item: &I) -> i64 {
        self.selling_price(item)
            .and_then(|price| i64::try_from(price).ok())
            .unwrap_or(MISSING_PRICE)
    }

    /// Charges `buyer` this trader's selling price for `item`. Only money moves.
    pub fn try_exchange_money(
        &mut self,
        buyer: &mut Self,
        item: &I,
    ) -> Result<Money, ExchangeError> {
        let price = self
            .selling_price(item)
            .ok_or(ExchangeError::MissingPrice { item: item.id() })?;

        if buyer.money < price {
            return Err(ExchangeError::InsufficientFunds {
                item: item.id(),
                price,
                available: buyer.money,
            });
        }

        let credited = self
            .money
            .checked_add(price)
            .ok_or(ExchangeError::BalanceOverflow { item: item.id() })?;

        buyer.money -= price;
        self.money = credited;
        Ok(price)
    }

    pub fn exchange_money(&mut self, buyer: &mut Self, item: &I) -> bool {
        match self.try_exchange_money(buyer, item) {
            Ok(_) => true,
            Err(err) => {
                debug!(seller = %self.id, buyer = %buyer.id, "exchange refused: {err}");
                false
            }
        }
    }

    /// Sells `buyer` everything on its wishlist that it can afford, walking the
    /// inventory in order. Each payment happens before the next item is priced.
    pub fn settle_with(&mut self, buyer: &mut Self) -> Settlement {
        let mut settlement = Settlement::default();
        let mut kept = Vec::with_capacity(self.inventory.len());
        let mut sold = Vec::new();

        for item in std::mem::take(&mut self.inventory) {
            if !buyer.wants(&item) {
                kept.push(item);
                continue;
            }
            match self.try_exchange_money(buyer, &item) {
                Ok(price) => {
                    settlement.revenue = settlement.revenue.saturating_add(price);
                    settlement.sold.push(item.id());
                    sold.push(item);
                }
                Err(err) => {
                    debug!(seller = %self.id, buyer = %buyer.id, "exchange refused: {err}");
                    settlement.refusals.push(err);
                    kept.push(item);
                }
            }
        }

        self.inventory = kept;
        buyer.wishlist.retain(|wanted| !sold.contains(wanted));
        buyer.inventory.extend(sold);

        if settlement.any_sold() {
            info!(
                seller = %self.id,
                buyer = %buyer.id,
                sold = settlement.sold.len(),
                revenue = settlement.revenue,
                "bulk sale settled"
            );
        }
        settlement
    }

    /// True iff at least one item changed hands.
    pub fn sell_to(&mut self, buyer: &mut Self) -> bool {
        self.settle_with(buyer).any_sold()
    }

    pub fn buy_from(&mut self, seller: &mut Self) -> bool {
        seller.sell_to(self)
    }

    /// Hands over the first matching inventory entry for free.
    pub fn transfer_item(&mut self, recipient: &mut Self, item: &I) -> bool {
        let Some(index) = self.inventory.iter().position(|held| held == item) else {
            return false;
        };
        let moved = self.inventory.remove(index);
        recipient.wishlist.retain(|wanted| *wanted != moved);
        recipient.inventory.push(moved);
        true
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }

    pub fn to_snapshot(&self) -> TraderSnapshot<I>
    where
        I: Clone,
    {
        TraderSnapshot {
            inventory: self.inventory.clone(),
            wishlist: self.wishlist.clone(),
            money: self.money,
        }
    }

    /// Replaces holdings and balance, keeping identity and pricing.
    pub fn apply_snapshot(&mut self, snapshot: TraderSnapshot<I>) {
        self.inventory = snapshot.inventory;
        self.wishlist = snapshot.wishlist;
        self.money = snapshot.money;
    }
}

impl<I: fmt::Display, P> fmt::Display for Trader<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-- Inventory --")?;
        for item in &self.inventory {
            writeln!(f, "{item}")?;
        }
        writeln!(f, "-- Wishlist --")?;
        for item in &self.wishlist {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Serializable trader state, without identity or pricing rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "I: Deserialize<'de>"))]
pub struct TraderSnapshot<I> {
    #[serde(default)]
    pub inventory: Vec<I>,
    #[serde(default)]
    pub wishlist: Vec<I>,
    pub money: Money,
}
