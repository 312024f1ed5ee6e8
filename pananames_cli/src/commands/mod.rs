//! CLI subcommand implementations.

pub mod account;
pub mod domains;
pub mod nameservers;
pub mod tlds;
pub mod whois;
