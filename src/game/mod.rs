pub mod camera_controller;
pub mod input_manager;
pub mod sim_clock;
pub mod state;
