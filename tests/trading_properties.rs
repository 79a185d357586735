//! Property and scenario tests for pricing and exchanges between traders.

use drivable_trader::domain::{
    DrivableTrader, ListPrice, Money, PricingRule, SpeedPremium, Vehicle, VehicleKind,
    MISSING_PRICE,
};
use proptest::prelude::*;

fn vehicle(price: Option<Money>, max_speed: u32) -> Vehicle {
    Vehicle::new(VehicleKind::Car, "Prop", price, max_speed)
}

mod scenarios {
    use super::*;

    #[test]
    fn affordable_car_changes_hands() {
        let x = vehicle(Some(10), 5);
        let mut seller = DrivableTrader::new(vec![x.clone()], Vec::new(), 0);
        let mut buyer = DrivableTrader::new(Vec::new(), vec![x.clone()], 20);

        assert!(seller.sell_to(&mut buyer));
        assert_eq!(buyer.money(), 5);
        assert_eq!(seller.money(), 15);
    }

    #[test]
    fn poor_buyer_pays_nothing() {
        let x = vehicle(Some(10), 5);
        let mut seller: DrivableTrader<Vehicle> = DrivableTrader::with_money(0);
        let mut buyer: DrivableTrader<Vehicle> = DrivableTrader::with_money(5);

        assert!(!seller.exchange_money(&mut buyer, &x));
        assert_eq!(buyer.money(), 5);
        assert_eq!(seller.money(), 0);
    }

    #[test]
    fn unpriced_wishlisted_item_is_skipped() {
        let x = vehicle(None, 120);
        let mut seller = DrivableTrader::new(vec![x.clone()], Vec::new(), 0);
        let mut buyer = DrivableTrader::new(Vec::new(), vec![x.clone()], 1_000);

        assert_eq!(seller.listed_price(&x), MISSING_PRICE);
        assert!(!seller.sell_to(&mut buyer));
        assert_eq!(seller.inventory(), &[x.clone()]);
        assert_eq!(buyer.wishlist(), &[x]);
    }

    #[test]
    fn only_affordable_prefix_transfers() {
        let x = vehicle(Some(10), 5);
        let y = vehicle(Some(10), 5);
        let mut seller = DrivableTrader::new(vec![x.clone(), y.clone()], Vec::new(), 0);
        let mut buyer = DrivableTrader::new(Vec::new(), vec![x.clone(), y.clone()], 20);

        assert!(seller.sell_to(&mut buyer));
        assert_eq!(buyer.inventory(), &[x]);
        assert_eq!(buyer.wishlist(), &[y.clone()]);
        assert_eq!(seller.inventory(), &[y]);
    }
}

mod property_tests {
    use super::*;

    fn arb_vehicle() -> impl Strategy<Value = Vehicle> {
        (proptest::option::of(0u64..500), 0u32..300)
            .prop_map(|(price, speed)| vehicle(price, speed))
    }

    proptest! {
        #[test]
        fn prop_unpriced_is_missing_under_every_rule(speed in any::<u32>()) {
            let item = vehicle(None, speed);
            prop_assert_eq!(ListPrice.selling_price(&item), None);
            prop_assert_eq!(SpeedPremium.selling_price(&item), None);
        }

        #[test]
        fn prop_speed_premium_is_price_plus_speed(
            price in 0u64..1_000_000,
            speed in any::<u32>(),
        ) {
            let item = vehicle(Some(price), speed);
            prop_assert_eq!(SpeedPremium.selling_price(&item), Some(price + u64::from(speed)));
        }

        #[test]
        fn prop_exchange_conserves_money(
            item in arb_vehicle(),
            seller_money in 0u64..10_000,
            buyer_money in 0u64..10_000,
        ) {
            let mut seller: DrivableTrader<Vehicle> = DrivableTrader::with_money(seller_money);
            let mut buyer: DrivableTrader<Vehicle> = DrivableTrader::with_money(buyer_money);

            let accepted = seller.exchange_money(&mut buyer, &item);

            prop_assert_eq!(seller.money() + buyer.money(), seller_money + buyer_money);
            match seller.selling_price(&item) {
                Some(price) if price <= buyer_money => {
                    prop_assert!(accepted);
                    prop_assert_eq!(buyer.money(), buyer_money - price);
                }
                _ => {
                    prop_assert!(!accepted);
                    prop_assert_eq!(buyer.money(), buyer_money);
                }
            }
        }

        #[test]
        fn prop_sold_items_end_up_with_buyer(
            stock in proptest::collection::vec(arb_vehicle(), 0..8),
            wanted in proptest::collection::vec(any::<bool>(), 8),
            buyer_money in 0u64..2_000,
        ) {
            let wishlist: Vec<Vehicle> = stock
                .iter()
                .zip(&wanted)
                .filter(|(_, want)| **want)
                .map(|(item, _)| item.clone())
                .collect();
            let mut seller = DrivableTrader::new(stock.clone(), Vec::new(), 0);
            let mut buyer = DrivableTrader::new(Vec::new(), wishlist, buyer_money);

            let settlement = seller.settle_with(&mut buyer);

            prop_assert_eq!(settlement.any_sold(), !settlement.sold.is_empty());
            prop_assert_eq!(seller.money() + buyer.money(), buyer_money);
            prop_assert_eq!(seller.money(), settlement.revenue);
            prop_assert_eq!(seller.inventory().len() + buyer.inventory().len(), stock.len());
            for id in &settlement.sold {
                prop_assert!(buyer.inventory().iter().any(|item| item.id == *id));
                prop_assert!(!buyer.wishlist().iter().any(|item| item.id == *id));
                prop_assert!(!seller.inventory().iter().any(|item| item.id == *id));
            }
        }

        #[test]
        fn prop_buy_from_matches_sell_to(
            stock in proptest::collection::vec(arb_vehicle(), 0..6),
            buyer_money in 0u64..1_500,
        ) {
            let seller = DrivableTrader::new(stock.clone(), Vec::new(), 7);
            let buyer = DrivableTrader::new(Vec::new(), stock, buyer_money);

            let (mut a_seller, mut a_buyer) = (seller.clone(), buyer.clone());
            let (mut b_seller, mut b_buyer) = (seller, buyer);

            let a = a_seller.sell_to(&mut a_buyer);
            let b = b_buyer.buy_from(&mut b_seller);

            prop_assert_eq!(a, b);
            prop_assert_eq!(a_seller, b_seller);
            prop_assert_eq!(a_buyer, b_buyer);
        }
    }
}
