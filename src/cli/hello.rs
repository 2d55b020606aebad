//! Console output for the `hello` subcommand

use crate::heartbeat::GREETING;

/// Host name from `HOSTNAME`, then `/etc/hostname`
pub fn host_name() -> String {
    std::env::var("HOSTNAME")
        .ok()
        .filter(|h| !h.trim().is_empty())
        .or_else(|| {
            std::fs::read_to_string("/etc/hostname")
                .ok()
                .map(|h| h.trim().to_string())
                .filter(|h| !h.is_empty())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn banner(host: &str) -> String {
    let rule = "=".repeat(40);
    format!(
        "{GREETING}\n{rule}\nThis program is running on:\n{} version: {}\nHost: {host}\n{rule}\n\nIMPORTANT: This is running in the SSH terminal ONLY!\nNobody can see this except you in this terminal.\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )
}
