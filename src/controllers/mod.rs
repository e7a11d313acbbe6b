pub mod api_error;
pub mod planner_controller;
