pub mod connection_provider;
