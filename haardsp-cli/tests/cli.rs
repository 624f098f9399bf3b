use assert_cmd::Command;
use hound::{SampleFormat, WavSpec, WavWriter};

fn haardsp() -> Command {
    Command::cargo_bin("haardsp").unwrap()
}

#[test]
fn reference_signal_roundtrip() {
    let out = haardsp().args(["--level", "1"]).assert().success();
    let stdout = String::from_utf8(out.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Maximum level = 3"));
    assert!(stdout.contains("This is level 1 DWT computation."));
    assert!(stdout.contains("value at index 0 = 7.07"));
    assert!(stdout.contains("This is level 1 IDWT computation."));
}

#[test]
fn rejects_non_power_of_two() {
    let out = haardsp()
        .args(["1", "2", "3", "4", "5", "6"])
        .assert()
        .failure();
    let stderr = String::from_utf8(out.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("length of array is not a power of 2"));
}

#[test]
fn out_of_range_level_fails_unless_clamped() {
    haardsp().args(["--level", "9", "1", "-2"]).assert().failure();
    let out = haardsp()
        .args(["--level", "9", "--clamp", "1", "-2"])
        .assert()
        .success();
    let stdout = String::from_utf8(out.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("This is level 1 DWT computation."));
}

#[test]
fn reads_wav_input() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("tone.wav");
    let spec = WavSpec {
        channels: 1,
        sample_rate: 8000,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(&path, spec).unwrap();
    for i in 0..16i16 {
        writer.write_sample(i * 100).unwrap();
    }
    writer.finalize().unwrap();

    let out = haardsp()
        .arg("--input")
        .arg(&path)
        .assert()
        .success();
    let stdout = String::from_utf8(out.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Maximum level = 4"));
    assert!(stdout.contains("value at index 15"));
}
