pub mod add;
pub mod config;
pub mod day;
pub mod generate;
pub mod month;
pub mod reset;
pub mod show;
pub mod sports;
