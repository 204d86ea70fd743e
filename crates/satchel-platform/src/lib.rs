pub use env::{get_env, get_env_parsed, lookup_env};

pub mod env;
