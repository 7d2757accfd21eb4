pub mod invite;
pub mod profile;
