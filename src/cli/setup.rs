//! Console output for the `setup` subcommand

use crate::storage::{FallbackReason, Resolution, SetupResult, StorageRole};

const RULE_WIDTH: usize = 60;

pub fn header() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\n  STORAGE SETUP\n{rule}\n")
}

/// Notice describing where storage landed and whether it persists
pub fn resolution_notice(resolution: &Resolution) -> String {
    let root = resolution.root.display();
    let primary = resolution.primary.display();
    match resolution.fallback {
        None => format!(
            "✅ Using volume at: {root}\n   This storage will PERSIST across container restarts!\n"
        ),
        Some(FallbackReason::PrimaryNotWritable) => format!(
            "⚠️  Can't write to {primary} (permission denied)\n   Using home directory instead: {root}\n   Note: This is still in the container, so it's temporary!\n   Tip: Run the setup as a user that owns {primary}\n"
        ),
        Some(FallbackReason::PrimaryMissing) => format!(
            "⚠️  No {primary} volume found\n   Using home directory: {root}\n   Note: Data will be lost on container restart!\n   Tip: Attach a volume mounted at {primary}\n"
        ),
    }
}

/// Full summary printed after a successful setup
pub fn summary(result: &SetupResult) -> String {
    let mut out = resolution_notice(&result.resolution);

    out.push_str("\n📁 Directories:\n");
    for (role, path) in result.directories.entries() {
        out.push_str(&format!("  ✅ {}: {}\n", role.dir_name(), path.display()));
    }
    out.push_str(&format!(
        "\n✅ Setup complete! Configuration saved to: {}\n",
        result.manifest_path.display()
    ));

    let rule = "=".repeat(RULE_WIDTH);
    out.push_str(&format!("\n{rule}\n  LAYOUT\n{rule}\n"));
    out.push_str(&format!("Storage root: {}\n", result.resolution.root.display()));
    for role in StorageRole::ALL {
        let dir = format!("{}/", role.dir_name());
        out.push_str(&format!("  - {:<14} {}\n", dir, role.description()));
    }

    out.push_str(&format!("\n💡 PRO TIPS:\n{}\n", "─".repeat(RULE_WIDTH)));
    let root = result.resolution.root.display();
    if result.resolution.persistent {
        out.push_str(&format!("• Files under {root} PERSIST across restarts\n"));
    } else {
        out.push_str(&format!("• Files under {root} are TEMPORARY (lost on restart)\n"));
    }
    out.push_str("• Use logs/ for debugging - you can tail them in real-time\n");
    out.push_str("• Use cache/ for data that can be regenerated\n");
    out.push_str("• Back up uploads/ regularly if it contains user data\n");
    out.push_str(&"─".repeat(RULE_WIDTH));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn resolution(fallback: Option<FallbackReason>) -> Resolution {
        Resolution {
            root: PathBuf::from("/home/u/persistent_data"),
            persistent: fallback.is_none(),
            fallback,
            primary: PathBuf::from("/data"),
        }
    }

    #[test]
    fn test_summary_lists_every_directory() {
        let res = resolution(Some(FallbackReason::PrimaryMissing));
        let directories = crate::storage::DirectorySet::under(&res.root);
        let result = SetupResult {
            manifest_path: res.root.join("config.txt"),
            resolution: res,
            directories,
        };

        let text = summary(&result);
        for role in StorageRole::ALL {
            assert!(text.contains(&format!(
                "  ✅ {}: /home/u/persistent_data/{}\n",
                role.dir_name(),
                role.dir_name()
            )));
        }
        assert!(text.contains("Configuration saved to: /home/u/persistent_data/config.txt\n"));
        assert!(text.contains("are TEMPORARY"));
    }

    #[test]
    fn test_notice_variants() {
        assert!(resolution_notice(&resolution(None)).contains("PERSIST"));
        assert!(
            resolution_notice(&resolution(Some(FallbackReason::PrimaryNotWritable)))
                .contains("permission denied")
        );
        assert!(
            resolution_notice(&resolution(Some(FallbackReason::PrimaryMissing)))
                .contains("No /data volume found")
        );
    }
}
