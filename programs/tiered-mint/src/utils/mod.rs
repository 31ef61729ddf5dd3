pub mod cpi;
pub mod time;
