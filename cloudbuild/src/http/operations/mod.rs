pub mod cancel;
pub mod get;
