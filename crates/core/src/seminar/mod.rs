//! Seminar domain: form validation and date-time handling.

pub mod constants;
pub mod datetime;
pub mod form;

#[cfg(test)]
mod tests;
