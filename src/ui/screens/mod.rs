//! Screen rendering

pub mod about;
pub mod contact;
pub mod experience;
pub mod help;
pub mod home;
pub mod projects;
pub mod sign_in;
pub mod skills;
