pub mod app_state_builder;
pub mod auth_helper;
pub mod fixtures;
pub mod port_mocks;
pub mod stubs;
