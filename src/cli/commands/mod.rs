//! One module per `sitevault` subcommand.

pub mod add;
pub mod export;
pub mod keygen;
pub mod list;
