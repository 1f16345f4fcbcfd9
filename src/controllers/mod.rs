pub mod car_controller;
pub mod location_controller;
