pub mod catalog;
pub mod energy_calculator;
pub mod planner;
pub mod recommendation;
pub mod result_aggregator;
pub mod scoring;
pub mod weather_service;
