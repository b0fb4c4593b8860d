pub mod budget_service;
pub mod formatting_service;
pub mod scheduling_service;
pub mod scoring_service;
pub mod search_service;
pub mod travel_service;
pub mod trip_planning_service;
