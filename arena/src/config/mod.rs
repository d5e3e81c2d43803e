mod arena_config;

pub use arena_config::{ArenaConfig, MAX_ROUNDS, get_config_manager};
