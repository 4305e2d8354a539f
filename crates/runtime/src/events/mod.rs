//! Event routing.

mod bus;

pub use bus::{BusSink, EventBus, Topic};
