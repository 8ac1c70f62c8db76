pub mod list_active;
pub mod register;
pub mod update_active;
