//! Best-effort process and host probes backed by `sysinfo`.
//!
//! Every field is collected independently and surfaces as an `Option`:
//! a probe that cannot be read yields `None` and the caller decides how
//! to zero-fill. Health and info responses must never fail because a
//! metrics source is degraded.

use std::time::Duration;

use sysinfo::System;

/// Fixed CPU sampling window for the info endpoint.
///
/// The call intentionally blocks its own request for this long.
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_millis(100);

/// Memory usage of the current process, in bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessMemory {
    pub rss: Option<u64>,
    pub vms: Option<u64>,
}

/// System-wide virtual memory totals, in bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMemory {
    pub total: Option<u64>,
    pub available: Option<u64>,
    pub used: Option<u64>,
}

/// CPU topology and a sampled usage percentage.
#[derive(Debug, Clone, Default)]
pub struct CpuSample {
    pub count: Option<usize>,
    pub percent: Option<f32>,
    pub brand: Option<String>,
}

/// Static host identity fields.
#[derive(Debug, Clone)]
pub struct HostIdentity {
    pub platform: &'static str,
    pub platform_release: Option<String>,
    pub platform_version: Option<String>,
    pub architecture: &'static str,
}

/// Snapshot RSS and virtual memory size of this process.
pub fn process_memory() -> ProcessMemory {
    let Ok(pid) = sysinfo::get_current_pid() else {
        return ProcessMemory::default();
    };

    let mut sys = System::new();
    if !sys.refresh_process(pid) {
        return ProcessMemory::default();
    }

    match sys.process(pid) {
        Some(proc) => ProcessMemory {
            rss: Some(proc.memory()),
            vms: Some(proc.virtual_memory()),
        },
        None => ProcessMemory::default(),
    }
}

/// Snapshot system-wide memory totals.
pub fn system_memory() -> SystemMemory {
    let mut sys = System::new();
    sys.refresh_memory();

    // sysinfo reports 0 on platforms where a value is unavailable;
    // treat that the same as a failed probe.
    let non_zero = |v: u64| (v > 0).then_some(v);
    SystemMemory {
        total: non_zero(sys.total_memory()),
        available: non_zero(sys.available_memory()),
        used: non_zero(sys.used_memory()),
    }
}

/// Sample global CPU usage over [`CPU_SAMPLE_WINDOW`].
///
/// Two refreshes bracket an async sleep; sysinfo ignores refreshes closer
/// together than its own minimum interval, so the sleep is clamped up to
/// that minimum.
pub async fn cpu_sample() -> CpuSample {
    let mut sys = System::new();
    sys.refresh_cpu_usage();
    tokio::time::sleep(CPU_SAMPLE_WINDOW.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL)).await;
    sys.refresh_cpu_usage();

    let cpus = sys.cpus();
    CpuSample {
        count: (!cpus.is_empty()).then_some(cpus.len()),
        percent: Some(sys.global_cpu_info().cpu_usage()),
        brand: cpus.first().map(|cpu| cpu.brand().to_string()),
    }
}

/// Read static host identity fields.
pub fn host_identity() -> HostIdentity {
    HostIdentity {
        platform: std::env::consts::OS,
        platform_release: System::kernel_version(),
        platform_version: System::os_version(),
        architecture: std::env::consts::ARCH,
    }
}

/// RSS as a percentage of total system memory.
///
/// Contract: when total memory cannot be determined the percentage is 0,
/// never a division fault. Uses a floating-point ratio rather than
/// truncating integer arithmetic.
pub fn memory_percent(rss: Option<u64>, total: Option<u64>) -> f64 {
    match (rss, total) {
        (Some(rss), Some(total)) if total > 0 => rss as f64 * 100.0 / total as f64,
        _ => 0.0,
    }
}
