//! HTTP request handlers

pub mod health;
pub mod users;

pub use health::health_check;
pub use users::{create_user, delete_user, get_user_by_email, list_users, update_user};
