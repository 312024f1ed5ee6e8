/// User agent sent when the caller does not configure one.
pub(crate) const DEFAULT_USER_AGENT: &str = concat!("pananames-rs/", env!("CARGO_PKG_VERSION"));
