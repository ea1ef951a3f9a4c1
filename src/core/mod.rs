pub mod cache;
pub mod daily;
pub mod inbound;
pub mod log;
pub mod lookup;
