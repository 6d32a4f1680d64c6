// Linux-specific helpers: cpufreq sysfs, /proc/diskstats, /proc pid listing,
// utmp sessions, interface state.

use crate::models::{CpuFrequency, DiskIoStat, SessionStat};

/// Read current/min/max CPU clocks from cpufreq sysfs (values are in kHz).
pub(super) fn read_cpu_freq_linux() -> Option<CpuFrequency> {
    #[cfg(target_os = "linux")]
    {
        let read_khz = |file: &str| -> Option<f64> {
            let path = format!("/sys/devices/system/cpu/cpu0/cpufreq/{}", file);
            let khz: f64 = std::fs::read_to_string(path).ok()?.trim().parse().ok()?;
            if khz > 0.0 { Some(khz / 1000.0) } else { None }
        };
        let current_mhz = read_khz("scaling_cur_freq")?;
        return Some(CpuFrequency {
            current_mhz,
            min_mhz: read_khz("cpuinfo_min_freq"),
            max_mhz: read_khz("cpuinfo_max_freq"),
        });
    }
    #[allow(unreachable_code)]
    None
}

/// Sum /proc/diskstats over whole disks (names present in /sys/block), so
/// partition rows are not double counted. Sector counts are 512-byte units.
pub(super) fn read_disk_io_linux() -> Option<DiskIoStat> {
    #[cfg(target_os = "linux")]
    {
        let whole_disks: std::collections::HashSet<String> = std::fs::read_dir("/sys/block")
            .ok()?
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();

        let content = std::fs::read_to_string("/proc/diskstats").ok()?;
        let mut io = DiskIoStat {
            read_bytes: 0,
            write_bytes: 0,
            read_ops: 0,
            write_ops: 0,
        };
        for line in content.lines() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 10 || !whole_disks.contains(fields[2]) {
                continue;
            }
            let col = |i: usize| fields[i].parse::<u64>().unwrap_or(0);
            io.read_ops += col(3);
            io.read_bytes += col(5) * 512;
            io.write_ops += col(7);
            io.write_bytes += col(9) * 512;
        }
        return Some(io);
    }
    #[allow(unreachable_code)]
    None
}

/// Count numeric entries under /proc, independently of the process table.
pub(super) fn read_pid_count_linux() -> Option<u32> {
    #[cfg(target_os = "linux")]
    {
        let count = std::fs::read_dir("/proc")
            .ok()?
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .is_some_and(|n| n.bytes().all(|b| b.is_ascii_digit()))
            })
            .count();
        return Some(count as u32);
    }
    #[allow(unreachable_code)]
    None
}

/// Parse login sessions from /var/run/utmp. `None` when the file is absent
/// or unreadable (common in containers), not an error.
pub(super) fn read_sessions_linux() -> Option<Vec<SessionStat>> {
    #[cfg(target_os = "linux")]
    {
        let data = std::fs::read("/var/run/utmp").ok()?;
        return Some(parse_utmp(&data));
    }
    #[allow(unreachable_code)]
    None
}

#[cfg(target_os = "linux")]
fn parse_utmp(data: &[u8]) -> Vec<SessionStat> {
    // utmp record layout on glibc: 384 bytes, USER_PROCESS entries are logins.
    const UTMP_RECORD_SIZE: usize = 384;
    const UTMP_USER_PROCESS: i16 = 7;

    let cstr_field = |bytes: &[u8]| -> Option<String> {
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        let s = String::from_utf8_lossy(&bytes[..end]).into_owned();
        if s.is_empty() { None } else { Some(s) }
    };

    let mut sessions = Vec::new();
    for rec in data.chunks_exact(UTMP_RECORD_SIZE) {
        let ut_type = i16::from_ne_bytes([rec[0], rec[1]]);
        if ut_type != UTMP_USER_PROCESS {
            continue;
        }
        let Some(user) = cstr_field(&rec[44..76]) else {
            continue;
        };
        let tv_sec = i32::from_ne_bytes([rec[340], rec[341], rec[342], rec[343]]);
        sessions.push(SessionStat {
            user,
            terminal: cstr_field(&rec[8..40]),
            host: cstr_field(&rec[76..332]),
            started_secs: tv_sec.max(0) as u64,
        });
    }
    sessions
}

/// Interface operational state from /sys/class/net/<interface>/operstate.
/// Loopback and virtual interfaces report "unknown" while carrying traffic,
/// so only an explicit "down" counts as down.
pub(super) fn read_interface_is_up(interface_name: &str) -> Option<bool> {
    #[cfg(target_os = "linux")]
    {
        let path = format!("/sys/class/net/{}/operstate", interface_name);
        let state = std::fs::read_to_string(path).ok()?;
        return Some(state.trim() != "down");
    }
    #[allow(unreachable_code)]
    None
}

/// Network interface link speed from /sys/class/net/<interface>/speed,
/// in bits per second, or 0 if unavailable.
pub(super) fn read_interface_speed(interface_name: &str) -> u64 {
    #[cfg(target_os = "linux")]
    {
        let path = format!("/sys/class/net/{}/speed", interface_name);
        if let Ok(content) = std::fs::read_to_string(&path)
            && let Ok(mbps) = content.trim().parse::<i64>()
            && mbps > 0
        {
            return (mbps as u64) * 1_000_000;
        }
    }
    0
}
