pub mod delivery;
mod http;
