pub mod authenticator;
pub mod credentials;
pub mod fleet;
pub mod manifest;
pub mod ordering;
pub mod report_builder;
pub mod roster_loader;
pub mod version_probe;

#[cfg(test)]
pub(crate) mod test_server;
