use crate::config::ServerConfig;
use reqwest::Client;
use std::time::Duration;

pub fn build_service_client(server: &ServerConfig) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(server.timeout_secs))
        .connect_timeout(Duration::from_secs(server.connect_timeout_secs))
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .build()
        .unwrap_or_else(|_| Client::new())
}
