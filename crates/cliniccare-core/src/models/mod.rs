pub mod appointment;
pub mod branch;
pub mod inventory;
pub mod patient;
pub mod staff;
pub mod stats;
