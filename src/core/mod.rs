
pub mod canon;
pub mod character_gen;
pub mod errors;
pub mod export;
pub mod logging;
pub mod name_gen;
pub mod portrait;
pub mod sampler;
pub mod store;
pub mod wordlists;
