pub mod intensity;
pub mod session;
