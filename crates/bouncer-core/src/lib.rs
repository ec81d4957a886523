pub mod ball;
pub mod command;
pub mod config;
pub mod driver;
pub mod fps;
pub mod palette;
pub mod random;
pub mod simulator;
pub mod surface;
pub mod trail;
