pub mod app_config;
pub mod seed;
pub mod session;

pub use app_config::Config;
pub use session::Session;
