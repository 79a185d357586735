//! Trading logic: items, pricing rules and the traders that exchange them.

pub mod entities;
pub mod pricing;
pub mod shared;
pub mod trader;

pub use entities::{Drivable, Good, Item, ItemId, Money, Vehicle, VehicleKind, MISSING_PRICE};
pub use pricing::{ListPrice, PriceFn, PricingRule, SpeedPremium};
pub use shared::SharedTrader;
pub use trader::{
    BasicTrader, DrivableTrader, ExchangeError, Settlement, Trader, TraderId, TraderSnapshot,
};
