pub mod carbon;
pub mod region;
pub mod solar;
