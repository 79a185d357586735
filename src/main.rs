use drivable_trader::{
    domain::{DrivableTrader, Vehicle, VehicleKind},
    util::{
        logging,
        version::{version_label, APP_NAME},
    },
};
use tracing::info;

fn main() {
    logging::init();

    info!("{APP_NAME} {}", version_label());

    let roadster = Vehicle::priced(VehicleKind::Car, "Roadster", 10, 5);
    let ducati = Vehicle::priced(VehicleKind::Motorcycle, "Ducati", 8, 4);
    let bucephalus = Vehicle::unpriced(VehicleKind::Horse, "Bucephalus", 70);

    let mut dealer = DrivableTrader::new(
        vec![roadster.clone(), ducati.clone(), bucephalus.clone()],
        Vec::new(),
        0,
    );
    let mut collector: DrivableTrader<Vehicle> = DrivableTrader::with_money(20);
    collector.add_to_wishlist(roadster);
    collector.add_to_wishlist(ducati);
    collector.add_to_wishlist(bucephalus);

    let settlement = dealer.settle_with(&mut collector);
    for refusal in &settlement.refusals {
        info!("skipped: {refusal}");
    }

    println!("Dealer (money: {})", dealer.money());
    print!("{dealer}");
    println!();
    println!("Collector (money: {})", collector.money());
    print!("{collector}");
}
