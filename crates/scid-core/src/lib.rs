pub mod config;
pub mod logging;

pub mod controller;
pub mod resolve;
pub mod session;
pub mod transport;
pub mod view;
