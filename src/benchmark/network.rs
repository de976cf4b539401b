// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Best-effort network latency and throughput probe.
//!
//! Latency is the fastest TCP connect among the configured endpoints;
//! throughput is one timed HTTP download. Callers treat any error as
//! [`NetworkSample::unavailable`].

use std::io::Read;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::round_to;
use crate::config::NetworkConfig;
use crate::error::ProbeError;
use crate::hardware::Probe;

/// One network measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkSample {
    pub ping_ms: f64,
    pub download_mbps: f64,
}

impl NetworkSample {
    /// Reported when no server could be reached or the download failed.
    pub fn unavailable() -> Self {
        Self {
            ping_ms: 0.0,
            download_mbps: 0.0,
        }
    }
}

/// TCP-connect ping plus HTTP download timing.
pub struct HttpNetworkProbe {
    servers: Vec<String>,
    download_url: String,
    timeout: Duration,
}

impl HttpNetworkProbe {
    pub fn new(servers: Vec<String>, download_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            servers,
            download_url: download_url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &NetworkConfig) -> Self {
        Self::new(
            config.servers.clone(),
            config.download_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Connect to every server and keep the lowest latency.
    fn best_server_ping(&self) -> Result<(String, f64), ProbeError> {
        let mut best: Option<(String, f64)> = None;

        for server in &self.servers {
            match connect_latency_ms(server, self.timeout) {
                Ok(ms) => {
                    tracing::debug!(target: "rigcheck.benchmark", server = %server, ping_ms = ms, "server reachable");
                    let faster = match &best {
                        Some((_, fastest)) => ms < *fastest,
                        None => true,
                    };
                    if faster {
                        best = Some((server.clone(), ms));
                    }
                }
                Err(err) => {
                    tracing::debug!(target: "rigcheck.benchmark", server = %server, error = %err, "server unreachable");
                }
            }
        }

        best.ok_or_else(|| ProbeError::Unavailable("no test server reachable".to_string()))
    }

    fn download_mbps(&self) -> Result<f64, ProbeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| ProbeError::Unavailable(format!("http client: {}", err)))?;

        let start = Instant::now();
        let mut response = client
            .get(&self.download_url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .map_err(|err| ProbeError::Unavailable(format!("download request: {}", err)))?;

        let mut body = Vec::new();
        response
            .read_to_end(&mut body)
            .map_err(|err| ProbeError::Unavailable(format!("download body: {}", err)))?;

        throughput_mbps(body.len() as u64, start.elapsed())
    }
}

impl Probe<NetworkSample> for HttpNetworkProbe {
    fn name(&self) -> &'static str {
        "http"
    }

    fn read(&self) -> Result<NetworkSample, ProbeError> {
        let (server, ping_ms) = self.best_server_ping()?;
        let download_mbps = self.download_mbps()?;
        tracing::debug!(target: "rigcheck.benchmark", server = %server, ping_ms, download_mbps, "network sampled");
        Ok(NetworkSample {
            ping_ms,
            download_mbps,
        })
    }
}

fn connect_latency_ms(server: &str, timeout: Duration) -> Result<f64, ProbeError> {
    let addr: SocketAddr = server
        .to_socket_addrs()
        .map_err(|err| ProbeError::Unavailable(format!("resolve {}: {}", server, err)))?
        .next()
        .ok_or_else(|| ProbeError::Unavailable(format!("no address for {}", server)))?;

    let start = Instant::now();
    TcpStream::connect_timeout(&addr, timeout)
        .map_err(|err| ProbeError::Unavailable(format!("connect {}: {}", server, err)))?;
    Ok(round_to(start.elapsed().as_secs_f64() * 1000.0, 2))
}

/// Megabits per second for `bytes` received over `elapsed`.
pub(crate) fn throughput_mbps(bytes: u64, elapsed: Duration) -> Result<f64, ProbeError> {
    let secs = elapsed.as_secs_f64();
    if bytes == 0 || secs <= 0.0 {
        return Err(ProbeError::Unavailable("empty download".to_string()));
    }
    Ok(round_to(bytes as f64 * 8.0 / secs / 1_000_000.0, 2))
}
