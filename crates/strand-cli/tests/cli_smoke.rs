use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;

fn png_size(bytes: &[u8]) -> (u32, u32) {
    let decoder = png::Decoder::new(bytes);
    let reader = decoder.read_info().expect("png header");
    let info = reader.info();
    (info.width, info.height)
}

#[test]
fn cli_renders_png_smoke() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("out.png");

    let exe = assert_cmd::cargo_bin!("strand-cli");
    Command::new(exe)
        .args([
            "render",
            "--format",
            "png",
            "--width",
            "200",
            "--height",
            "120",
            "--out",
            out.to_string_lossy().as_ref(),
            "abcabc",
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read png");
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "output is not a PNG"
    );
    assert_eq!(png_size(&bytes), (200, 120));
}

#[test]
fn cli_renders_png_with_default_out_path() {
    let tmp = tempfile::tempdir().expect("tempdir");

    let exe = assert_cmd::cargo_bin!("strand-cli");
    Command::new(exe)
        .current_dir(tmp.path())
        .args(["render", "--format", "png", "--scale", "0.5"])
        .assert()
        .success();

    let bytes = fs::read(tmp.path().join("generative_art.png")).expect("read png");
    assert_eq!(png_size(&bytes), (400, 300));
}

#[test]
fn cli_renders_svg_to_stdout_by_default() {
    let exe = assert_cmd::cargo_bin!("strand-cli");
    let output = Command::new(exe)
        .args(["hello"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let svg = String::from_utf8(output.stdout).expect("utf8");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(">HELLO</text>"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn cli_no_label_drops_the_text_element() {
    let exe = assert_cmd::cargo_bin!("strand-cli");
    let output = Command::new(exe)
        .args(["render", "--no-label", "--id", "demo", "hello"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let svg = String::from_utf8(output.stdout).expect("utf8");
    assert!(!svg.contains("<text"));
    assert!(svg.contains("id=\"demo\""));
}

#[test]
fn cli_reports_validation_errors_with_exit_code_3() {
    let exe = assert_cmd::cargo_bin!("strand-cli");
    let output = Command::new(exe)
        .args(["generate", "abc1"])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid sequence"), "stderr: {stderr}");
    assert!(stderr.contains("position 3"), "stderr: {stderr}");
}

#[test]
fn cli_reports_usage_errors_with_exit_code_2() {
    let exe = assert_cmd::cargo_bin!("strand-cli");
    Command::new(exe)
        .args(["render", "--format", "gif", "abc"])
        .assert()
        .code(2);

    let exe = assert_cmd::cargo_bin!("strand-cli");
    Command::new(exe)
        .args(["--bogus"])
        .assert()
        .code(2);
}

#[test]
fn cli_generate_prints_chain_json() {
    let exe = assert_cmd::cargo_bin!("strand-cli");
    let output = Command::new(exe)
        .args(["generate", "--width", "100", "--height", "100", "Abc"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["sequence"], "abc");
    assert_eq!(value["seed"], 97 + 98 + 99);
    assert_eq!(value["chain"]["nodes"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["chain"]["surface"], serde_json::json!([100.0, 100.0]));
}

#[test]
fn cli_reads_sequence_from_stdin() {
    let exe = assert_cmd::cargo_bin!("strand-cli");
    let output = assert_cmd::Command::new(exe)
        .args(["generate", "-"])
        .write_stdin("xyz\n")
        .output()
        .expect("run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["sequence"], "xyz");
}

#[test]
fn cli_scene_applies_palette_file_and_flag_overrides() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let palette = tmp.path().join("palette.json");
    fs::write(
        &palette,
        r##"{ "foreground": "#112233", "background": "#445566" }"##,
    )
    .expect("write palette");

    let exe = assert_cmd::cargo_bin!("strand-cli");
    let output = Command::new(exe)
        .args([
            "scene",
            "--palette",
            palette.to_string_lossy().as_ref(),
            "--background",
            "#000",
            "a",
        ])
        .output()
        .expect("run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let commands = value["commands"].as_array().expect("commands");
    assert_eq!(commands[0]["kind"], "clear");
    assert_eq!(commands[0]["color"], "#000000");
    assert_eq!(commands[1]["kind"], "polyline");
    assert_eq!(commands[1]["stroke"]["color"], "#112233");
}

#[test]
fn cli_rejects_bad_palette_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let palette = tmp.path().join("palette.json");
    fs::write(&palette, r#"{ "stroke": "red" }"#).expect("write palette");

    let exe = assert_cmd::cargo_bin!("strand-cli");
    let output = Command::new(exe)
        .args(["scene", "--palette", palette.to_string_lossy().as_ref(), "a"])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("palette error"));
}
