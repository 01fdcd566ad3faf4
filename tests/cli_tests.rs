use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn rdgen<S: AsRef<OsStr>>(args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rdgen"))
        .args(args)
        .output()
        .expect("run failed")
}

/// Hex elements of the emitted array, in order.
fn array_elements(source: &str) -> Vec<u8> {
    source
        .lines()
        .filter(|l| l.starts_with("    0x"))
        .flat_map(|l| l.trim().split_terminator(','))
        .map(|h| u8::from_str_radix(h.trim_start_matches("0x"), 16).unwrap())
        .collect()
}

#[test]
fn zeros_compress_and_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nvm.img");
    let output = dir.path().join("ramdisk.c");
    fs::write(&input, vec![0u8; 4096]).unwrap();

    let out = rdgen(&[&input, &output]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("rdgen: Compress NVM image into RLE encoded RamDisk format\n\n"));
    assert!(stdout.contains("Original size:           4096 bytes"));
    assert!(stdout.contains("Compressed size:           38 bytes (0.9277%)"));

    let source = fs::read_to_string(&output).unwrap();
    assert!(source.contains("// Original was 4096 bytes, now just 38 bytes (0.9277%)"));
    let elements = array_elements(&source);
    assert_eq!(elements.len(), 38);
    assert_eq!(&elements[..4], &[0x00, 0x10, 0x00, 0x00]);
    assert!(source.ends_with("size_t RAMDISK_IMAGE_SIZE = sizeof(RAMDISK_IMAGE);\n"));
}

#[test]
fn random_data_may_expand() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("noise.img");
    let output = dir.path().join("ramdisk.c");
    let mut data: Vec<u8> = (0..=255u8).collect();
    data.shuffle(&mut StdRng::seed_from_u64(0x5eed));
    fs::write(&input, &data).unwrap();

    let out = rdgen(&[&input, &output]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let source = fs::read_to_string(&output).unwrap();
    assert!(source.contains("// Original was 256 bytes, now just 516 bytes (201.5625%)"));
    assert_eq!(array_elements(&source).len(), 516);
}

#[test]
fn missing_input_fails_without_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("ramdisk.c");

    let out = rdgen(&[Path::new("/no/such/file"), output.as_path()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("FATAL: File '/no/such/file' cannot be accessed. Does it exist?"));
    assert!(stderr.contains("Exiting."));
    assert!(!output.exists());
}

#[test]
fn empty_input_emits_header_only_payload() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.img");
    let output = dir.path().join("ramdisk.c");
    fs::write(&input, b"").unwrap();

    let out = rdgen(&[&input, &output]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let source = fs::read_to_string(&output).unwrap();
    assert!(source.contains("// Original was 0 bytes, now just 4 bytes (0.0000%)"));
    assert_eq!(array_elements(&source), vec![0, 0, 0, 0]);
}

#[test]
fn unwritable_output_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nvm.img");
    fs::write(&input, b"abc").unwrap();
    let output = dir.path().join("missing").join("ramdisk.c");

    let out = rdgen(&[&input, &output]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("FATAL:"));
    assert!(stderr.contains("Create the output directory"), "{stderr}");
    assert!(!output.exists());
}

#[test]
fn wrong_argument_count_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a");

    for args in [vec![], vec![a.as_path()], vec![a.as_path(), a.as_path(), a.as_path()]] {
        let out = rdgen(&args);
        assert!(out.status.success());
        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(stdout.contains("Usage:"), "{stdout}");
        assert!(stdout.contains("<nvm> <img>"));
    }
    assert!(!a.exists());
}

#[test]
fn hyphen_leading_paths_are_converted() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("-nvm.img"), vec![0x5a; 64]).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_rdgen"))
        .args(["-nvm.img", "-ramdisk.c"])
        .current_dir(dir.path())
        .output()
        .expect("run failed");
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(!String::from_utf8_lossy(&out.stdout).contains("Usage:"));

    let source = fs::read_to_string(dir.path().join("-ramdisk.c")).unwrap();
    assert!(source.contains("// Original was 64 bytes, now just 6 bytes (9.3750%)"));
}

#[cfg(unix)]
#[test]
fn published_source_honours_umask() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nvm.img");
    let output = dir.path().join("ramdisk.c");
    fs::write(&input, b"abc").unwrap();

    let out = rdgen(&[&input, &output]);
    assert!(out.status.success());

    let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode(&output), mode(&input));
}
