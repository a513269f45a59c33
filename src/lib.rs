pub mod features;
pub mod session;
