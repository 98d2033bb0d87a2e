use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn renders_the_default_view_to_png() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("mset.png");
    Command::cargo_bin("mset")
        .unwrap()
        .args(&["-o", output.to_str().unwrap(), "-s", "40x30", "-t", "1"])
        .assert()
        .success();
    let image = image::open(&output).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (40, 30));
}

#[test]
fn replays_clicks_and_honours_the_format_flag() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("zoomed.img");
    Command::cargo_bin("mset")
        .unwrap()
        .args(&[
            "-o",
            output.to_str().unwrap(),
            "-s",
            "20x20",
            "-f",
            "bmp",
            "-c",
            "in:10,10",
            "-c",
            "out:3,4",
            "-i",
            "-50",
        ])
        .assert()
        .success();
    let image = image::io::Reader::open(&output)
        .unwrap()
        .with_guessed_format()
        .unwrap()
        .decode()
        .unwrap()
        .to_rgb8();
    // Replaying drove the cap to -50; nothing iterates, so all is black.
    assert!(image.pixels().all(|p| p.0 == [0, 0, 0]));
}

#[test]
fn rejects_a_malformed_size() {
    Command::cargo_bin("mset")
        .unwrap()
        .args(&["-o", "never.png", "-s", "wide"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("image size"));
}

#[test]
fn rejects_a_malformed_click() {
    Command::cargo_bin("mset")
        .unwrap()
        .args(&["-o", "never.png", "-c", "sideways:1,2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("in:X,Y"));
}

#[test]
fn reports_an_unknown_output_format() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("mset.unknown");
    Command::cargo_bin("mset")
        .unwrap()
        .args(&["-o", output.to_str().unwrap(), "-s", "4x4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown image format"));
}
