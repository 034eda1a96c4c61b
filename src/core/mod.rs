pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod list;
pub mod update;
