pub mod analysis;
pub mod cipher;
pub mod config;
pub mod consts;
pub mod error;
pub mod optimizer;
pub mod scorer;
pub mod text;
// cmd and reports are modules of the binary crate (main.rs).
