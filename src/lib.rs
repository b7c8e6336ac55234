pub mod bravia;
pub mod command;
pub mod config;
pub mod endpoint;
pub mod rpc;
pub mod tv;
