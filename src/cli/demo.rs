//! The `demo` subcommand: a scripted walk through the volume store

use chrono::Local;
use serde_json::{Value, json};

use crate::cli::hello::host_name;
use crate::error::StoreError;
use crate::kv::{Listing, PrepareResult, StorePaths, VolumeStore};

const RULE_WIDTH: usize = 60;

/// Everything the demo observed, for rendering
#[derive(Debug, Clone)]
pub struct DemoReport {
    pub paths: StorePaths,
    pub prepared: PrepareResult,
    pub startup_count: u64,
    pub saved: Vec<(String, Value)>,
    pub loaded: Vec<(String, Option<Value>)>,
    pub listing: Listing,
}

/// Run the demo against `store`
pub fn run_demo(store: &VolumeStore) -> Result<DemoReport, StoreError> {
    let prepared = store.prepare()?;
    let startup_count = store.record_startup()?;
    store.write_log(&format!("Application started (startup #{startup_count})"))?;

    let samples = vec![
        ("user_name".to_string(), json!("Sameir")),
        (
            "last_login".to_string(),
            json!(Local::now().format("%Y-%m-%d %H:%M:%S").to_string()),
        ),
        ("counter".to_string(), json!(startup_count)),
    ];
    for (key, value) in &samples {
        store.save(key, value.clone())?;
    }

    let loaded = samples
        .iter()
        .map(|(key, _)| store.load(key).map(|v| (key.clone(), v)))
        .collect::<Result<Vec<_>, _>>()?;

    let listing = store.list()?;

    Ok(DemoReport {
        paths: store.paths().clone(),
        prepared,
        startup_count,
        saved: samples,
        loaded,
        listing,
    })
}

pub fn render(report: &DemoReport) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let volume = report.paths.volume_path.display();
    let mut out = String::new();

    out.push_str(&format!("{rule}\n  🗄️  VOLUME DEMO - PERSISTENT STORAGE\n{rule}\n\n"));
    out.push_str(&format!("📁 Setting up storage at: {volume}\n"));
    if report.prepared.volume_existed {
        out.push_str(&format!("✅ Volume path exists: {volume}\n"));
    } else {
        out.push_str(&format!("⚠️  Volume path didn't exist: {volume} (created)\n"));
    }
    out.push_str(&format!("✅ Data directory: {}\n", report.paths.data_dir.display()));
    out.push_str(&format!("✅ Upload directory: {}\n", report.paths.upload_dir.display()));
    out.push_str(&format!("✅ Log file: {}\n", report.paths.log_file.display()));

    if report.startup_count > 1 {
        out.push_str(&format!(
            "\n🔄 Container restarted! Previous startups: {}\n",
            report.startup_count - 1
        ));
    } else {
        out.push_str("\n🆕 First startup detected!\n");
    }

    out.push_str("\n📝 Saved:\n");
    for (key, value) in &report.saved {
        out.push_str(&format!("  💾 {key} = {value}\n"));
    }

    out.push_str("\n📖 Loaded back:\n");
    for (key, value) in &report.loaded {
        match value {
            Some(v) => out.push_str(&format!("  📖 {key} = {v}\n")),
            None => out.push_str(&format!("  ❌ Key not found: {key}\n")),
        }
    }

    let small_rule = "=".repeat(50);
    out.push_str(&format!("\n{small_rule}\n📂 Files in Persistent Storage:\n{small_rule}\n"));
    if report.listing.files.is_empty() {
        out.push_str("  (no files yet)\n");
    }
    for name in &report.listing.files {
        out.push_str(&format!("  • {name}\n"));
    }
    if let Some(size) = report.listing.log_size {
        let name = report
            .paths
            .log_file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        out.push_str(&format!("\n📄 Log file: {name} ({size} bytes)\n"));
    }

    out.push_str(&format!("\n{rule}\n  💡 PERSISTENCE INFORMATION\n{rule}\n"));
    out.push_str(&format!("Volume Path: {volume}\n"));
    out.push_str(&format!("Container ID: {}\n", host_name()));
    out.push_str(&format!("Startup Count: {}\n", report.startup_count));
    out.push_str(&format!(
        "\n✅ All files in {volume} will PERSIST across restarts if it is a mounted volume!\n"
    ));
    out.push_str("⚠️  Files outside this path are TEMPORARY and will be deleted!\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_demo_counts_restarts() {
        let dir = TempDir::new().unwrap();
        let store = VolumeStore::new(StorePaths::under(&dir.path().join("vol")));

        let first = run_demo(&store).unwrap();
        assert_eq!(first.startup_count, 1);
        assert!(!first.prepared.volume_existed);
        assert!(render(&first).contains("First startup detected"));

        let second = run_demo(&store).unwrap();
        assert_eq!(second.startup_count, 2);
        assert_eq!(second.loaded[2], ("counter".to_string(), Some(json!(2))));
        assert!(render(&second).contains("Previous startups: 1"));
    }

    #[test]
    fn test_demo_lists_saved_documents() {
        let dir = TempDir::new().unwrap();
        let store = VolumeStore::new(StorePaths::under(dir.path()));

        let report = run_demo(&store).unwrap();
        assert_eq!(
            report.listing.files,
            vec![
                "counter.json",
                "last_login.json",
                "startup_count.json",
                "user_name.json"
            ]
        );
        assert!(report.listing.log_size.unwrap() > 0);
    }
}
