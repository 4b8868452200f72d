use std::fs;
use std::process::Command;

use image::{Rgba, RgbaImage};

fn iconset() -> Command {
    Command::new(env!("CARGO_BIN_EXE_iconset"))
}

#[test]
fn missing_source_exits_non_zero_without_outputs() {
    let dir = tempfile::tempdir().unwrap();

    let output = iconset().current_dir(dir.path()).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: "), "{}", stderr);
    let icons: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("icon") && name.ends_with(".png"))
        .collect();
    assert!(icons.is_empty(), "{:?}", icons);
}

#[test]
fn default_run_writes_fixed_icon_set() {
    let dir = tempfile::tempdir().unwrap();
    RgbaImage::from_pixel(512, 512, Rgba([10, 200, 30, 255]))
        .save(dir.path().join("icon512.png"))
        .unwrap();

    let output = iconset().current_dir(dir.path()).output().unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    for (name, side) in [("icon16.png", 16), ("icon48.png", 48), ("icon128.png", 128)] {
        let img = image::open(dir.path().join(name)).unwrap();
        assert_eq!((img.width(), img.height()), (side, side), "{}", name);
    }
}

#[test]
fn json_report_lists_outputs() {
    let dir = tempfile::tempdir().unwrap();
    RgbaImage::new(64, 64).save(dir.path().join("src.png")).unwrap();

    let output = iconset()
        .current_dir(dir.path())
        .args(["-i", "src.png", "-s", "24", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["source"]["width"], 64);
    assert_eq!(report["outputs"][0]["width"], 24);
    assert_eq!(report["outputs"][0]["color"], "Rgba8");
}
