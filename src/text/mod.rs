pub mod layout;
pub mod split;
