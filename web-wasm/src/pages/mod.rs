pub mod home;
pub mod analyze;
pub mod recommendations;
