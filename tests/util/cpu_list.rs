// Integration tests for util/cpu_list.rs — raw CPU listing

use std::fs;

use cpu_cores::util::{parse_cpu_listing, raw_cpu_count, read_cpu_listing};
use tempfile::TempDir;

// Abridged /proc/cpuinfo from an arm64 runner: per-CPU records followed by a
// machine-wide trailer that must not be counted.
const ARM64_CPUINFO: &str = "\
processor\t: 0
BogoMIPS\t: 50.00
Features\t: fp asimd evtstrm aes pmull sha1 sha2 crc32
CPU implementer\t: 0x41

processor\t: 1
BogoMIPS\t: 50.00
Features\t: fp asimd evtstrm aes pmull sha1 sha2 crc32
CPU implementer\t: 0x41

Hardware\t: BCM2835
Model\t\t: Raspberry Pi 4 Model B Rev 1.4
";

#[test]
fn arm64_listing() {
    assert_eq!(parse_cpu_listing(ARM64_CPUINFO), 2);
}

#[test]
fn crlf_listing() {
    assert_eq!(parse_cpu_listing("processor : 0\r\nprocessor : 1\r\n"), 2);
}

#[test]
fn s390x_listing() {
    let text = "processor 0: version = 00,  identification = 2BD3E8,  machine = 3906\n\
                processor 1: version = 00,  identification = 2BD3E8,  machine = 3906\n\
                processor 2: version = 00,  identification = 2BD3E8,  machine = 3906\n";
    assert_eq!(parse_cpu_listing(text), 3);
}

#[test]
fn read_listing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cpuinfo");
    fs::write(&path, ARM64_CPUINFO).unwrap();
    assert_eq!(read_cpu_listing(&path).unwrap(), 2);
}

#[test]
fn read_listing_directory_is_error() {
    let dir = TempDir::new().unwrap();
    assert!(read_cpu_listing(dir.path()).is_err());
}

#[test]
fn raw_count_is_positive() {
    assert!(raw_cpu_count().unwrap() >= 1);
}
