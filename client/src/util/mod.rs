//! Small pure helpers shared by pages and state.

pub mod password;
