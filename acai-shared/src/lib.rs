pub mod models;

pub use models::events::{Notification, Severity};
