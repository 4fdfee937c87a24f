pub mod gateway_config;

pub use gateway_config::{
    AccountServiceConfig, BrokerConfig, OutboundConfig, ServerConfig, VerificationApiConfig,
};
