pub mod quotes;
pub mod server;
