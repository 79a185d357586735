use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Money balances and prices. Unsigned, so a balance can never go negative.
pub type Money = u64;

/// Sentinel reported by [`crate::domain::Trader::listed_price`] for items that cannot be priced.
pub const MISSING_PRICE: i64 = -1;

/// Identity of a single item. Two items with different ids are never the same item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything a trader can hold or wish for.
pub trait Item: fmt::Display + PartialEq {
    fn id(&self) -> ItemId;

    /// Base price, or `None` when the item is not for sale at any price.
    fn price(&self) -> Option<Money>;
}

/// Items with a top speed, which drivable traders add onto the price.
pub trait Drivable: Item {
    fn max_speed(&self) -> u32;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleKind {
    Car,
    Motorcycle,
    Bicycle,
    Horse,
}

impl VehicleKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Motorcycle => "Motorcycle",
            Self::Bicycle => "Bicycle",
            Self::Horse => "Horse",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: ItemId,
    pub kind: VehicleKind,
    pub name: String,
    /// Unpriced vehicles (family heirlooms, the neighbour's horse) never change hands.
    #[serde(default)]
    pub price: Option<Money>,
    pub max_speed: u32,
}

impl Vehicle {
    pub fn new(
        kind: VehicleKind,
        name: impl Into<String>,
        price: Option<Money>,
        max_speed: u32,
    ) -> Self {
        Self {
            id: ItemId::new(),
            kind,
            name: name.into(),
            price,
            max_speed,
        }
    }

    pub fn priced(
        kind: VehicleKind,
        name: impl Into<String>,
        price: Money,
        max_speed: u32,
    ) -> Self {
        Self::new(kind, name, Some(price), max_speed)
    }

    pub fn unpriced(kind: VehicleKind, name: impl Into<String>, max_speed: u32) -> Self {
        Self::new(kind, name, None, max_speed)
    }
}

impl Item for Vehicle {
    fn id(&self) -> ItemId {
        self.id
    }

    fn price(&self) -> Option<Money> {
        self.price
    }
}

impl Drivable for Vehicle {
    fn max_speed(&self) -> u32 {
        self.max_speed
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\" (price: ", self.kind.label(), self.name)?;
        match self.price {
            Some(price) => write!(f, "{price}")?,
            None => write!(f, "n/a")?,
        }
        write!(f, ", max speed: {})", self.max_speed)
    }
}

/// A plain tradable good with no capabilities beyond its price.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Good {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub price: Option<Money>,
}

impl Good {
    pub fn new(name: impl Into<String>, price: Option<Money>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            price,
        }
    }
}

impl Item for Good {
    fn id(&self) -> ItemId {
        self.id
    }

    fn price(&self) -> Option<Money> {
        self.price
    }
}

impl fmt::Display for Good {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.price {
            Some(price) => write!(f, "\"{}\" (price: {price})", self.name),
            None => write!(f, "\"{}\" (price: n/a)", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_display_includes_price_and_speed() {
        let car = Vehicle::priced(VehicleKind::Car, "Roadster", 10, 5);
        assert_eq!(car.to_string(), "Car \"Roadster\" (price: 10, max speed: 5)");

        let horse = Vehicle::unpriced(VehicleKind::Horse, "Bucephalus", 70);
        assert_eq!(horse.to_string(), "Horse \"Bucephalus\" (price: n/a, max speed: 70)");
    }

    #[test]
    fn good_display() {
        assert_eq!(Good::new("Anvil", Some(30)).to_string(), "\"Anvil\" (price: 30)");
        assert_eq!(Good::new("Rock", None).to_string(), "\"Rock\" (price: n/a)");
    }

    #[test]
    fn identical_looking_items_are_distinct() {
        let a = Vehicle::priced(VehicleKind::Bicycle, "BMX", 3, 30);
        let b = Vehicle::priced(VehicleKind::Bicycle, "BMX", 3, 30);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn vehicle_deserializes_without_price() {
        let json = r#"{
            "id": "9b2f7e4a-3c1d-4e5f-8a6b-7c8d9e0f1a2b",
            "kind": "Horse",
            "name": "Shadowfax",
            "max_speed": 90
        }"#;
        let horse: Vehicle = serde_json::from_str(json).unwrap();
        assert_eq!(horse.price(), None);
        assert_eq!(horse.max_speed(), 90);
        assert_eq!(horse.kind, VehicleKind::Horse);
    }
}
