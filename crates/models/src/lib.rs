pub mod errors;
pub mod db;
pub mod coerce;
pub mod daily_sale;

#[cfg(test)]
mod tests;
