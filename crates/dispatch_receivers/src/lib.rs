mod car_manager;
mod tesla_sales;

pub use car_manager::car_manager;
pub use tesla_sales::tesla_sales;

use dispatch_core::Receiver;

pub fn all_receivers() -> Vec<Receiver> {
    vec![car_manager(), tesla_sales()]
}

/// Returns the sample receiver with a given name.
pub fn receiver(name: &str) -> Option<Receiver> {
    all_receivers()
        .into_iter()
        .find(|receiver| receiver.name() == name)
}
