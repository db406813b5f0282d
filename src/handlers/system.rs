//! Health and system-information handlers.
//!
//! Both endpoints snapshot live process and host state at call time and
//! tolerate probe failures silently: a degraded metrics source zero-fills
//! its fields, it never fails the response.

use axum::extract::State;
use serde::Serialize;

use crate::http::response::{rfc3339_now, ApiResponse};
use crate::http::server::{AppInfo, AppState};
use crate::system::probe::{self, ProcessMemory, SystemMemory};

/// Memory statistics in bytes; `percent` is RSS over total system memory.
#[derive(Debug, Serialize)]
pub struct MemoryInfo {
    pub rss: u64,
    pub vms: u64,
    pub percent: f64,
    pub available: u64,
    pub total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used: Option<u64>,
}

impl MemoryInfo {
    fn from_probes(process: ProcessMemory, system: SystemMemory) -> Self {
        Self {
            rss: process.rss.unwrap_or(0),
            vms: process.vms.unwrap_or(0),
            percent: probe::memory_percent(process.rss, system.total),
            available: system.available.unwrap_or(0),
            total: system.total.unwrap_or(0),
            used: None,
        }
    }

    fn with_used(mut self, used: Option<u64>) -> Self {
        self.used = used;
        self
    }
}

/// Readiness payload.
#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: &'static str,
    pub uptime: f64,
    pub timestamp: String,
    pub memory: MemoryInfo,
    pub version: String,
    pub environment: String,
}

/// Host and runtime details.
#[derive(Debug, Serialize)]
pub struct SystemInfo {
    pub platform: &'static str,
    pub platform_release: String,
    pub platform_version: String,
    pub architecture: &'static str,
    pub processor: String,
    pub uptime: f64,
    pub memory: MemoryInfo,
    pub cpu: CpuInfo,
}

#[derive(Debug, Serialize)]
pub struct CpuInfo {
    pub count: usize,
    pub percent: f64,
}

/// Configured environment values as surfaced by `/info`.
#[derive(Debug, Serialize)]
pub struct EnvironmentInfo {
    pub app_env: String,
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Serialize)]
pub struct InfoData {
    pub application: AppInfo,
    pub system: SystemInfo,
    pub environment: EnvironmentInfo,
}

/// `GET /healthz` — readiness signal with uptime and memory statistics.
pub async fn healthz(State(state): State<AppState>) -> ApiResponse<HealthData> {
    let memory = MemoryInfo::from_probes(probe::process_memory(), probe::system_memory());

    ApiResponse::new(HealthData {
        status: "healthy",
        uptime: state.uptime(),
        timestamp: rfc3339_now(),
        memory,
        version: state.app.version.clone(),
        environment: state.app.environment.clone(),
    })
}

/// `GET /info` — full application, host, and environment snapshot.
///
/// Computed fresh per request, never cached. The CPU sample blocks this
/// one request for its fixed sampling window.
pub async fn info(State(state): State<AppState>) -> ApiResponse<InfoData> {
    let process = probe::process_memory();
    let system_memory = probe::system_memory();
    let cpu = probe::cpu_sample().await;
    let host = probe::host_identity();

    let memory = MemoryInfo::from_probes(process, system_memory).with_used(system_memory.used);

    ApiResponse::new(InfoData {
        application: (*state.app).clone(),
        system: SystemInfo {
            platform: host.platform,
            platform_release: host.platform_release.unwrap_or_default(),
            platform_version: host.platform_version.unwrap_or_default(),
            architecture: host.architecture,
            processor: cpu.brand.unwrap_or_default(),
            uptime: state.uptime(),
            memory,
            cpu: CpuInfo {
                count: cpu.count.unwrap_or(0),
                percent: cpu.percent.unwrap_or(0.0) as f64,
            },
        },
        environment: EnvironmentInfo {
            app_env: state.config.environment.clone(),
            port: state.config.port,
            host: state.config.host.clone(),
        },
    })
}
