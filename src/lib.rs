//! A small item-for-money trading simulation.
//!
//! [`domain::Trader`] holds an inventory, a wishlist and a balance, and sells
//! wishlisted items to another trader at the price its pricing rule asks.
//! [`domain::DrivableTrader`] deals in vehicles and charges price plus top speed.

pub mod domain;
pub mod util;
