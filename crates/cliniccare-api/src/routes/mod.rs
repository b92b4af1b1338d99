pub mod appointments;
pub mod branches;
pub mod dashboard;
pub mod health;
pub mod inventory;
pub mod patients;
pub mod staff;
