pub mod api;
pub mod energy;
pub mod fruit;
pub mod weather;
