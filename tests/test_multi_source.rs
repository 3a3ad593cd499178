//! Multi-file extraction through the async pipeline.

use phone_extractor::{Config, Extractor, SourceError, UnreadablePolicy};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_files(dir: &TempDir, files: &[(&str, &str)]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|(name, content)| {
            let path = dir.path().join(name);
            fs::write(&path, content).expect("write input file");
            path
        })
        .collect()
}

#[tokio::test]
async fn test_first_listed_file_wins() {
    let dir = TempDir::new().expect("temp dir");
    let paths = write_files(
        &dir,
        &[("a.txt", "8 912 000 00 01"), ("b.txt", "+7 912 000 00 01")],
    );

    let extractor = Extractor::default();
    let set = extractor.extract_files(&paths).await.unwrap();

    assert_eq!(set.to_strings(), vec!["+7(912)000-00-01"]);
    assert_eq!(extractor.metrics().sources_loaded_total(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_order_follows_input_not_completion() {
    let dir = TempDir::new().expect("temp dir");

    // A large first file finishes scanning after the small ones.
    let mut big = "lorem ipsum dolor sit amet ".repeat(20_000);
    big.push_str("+7 999 000 00 09");
    let files: Vec<(String, String)> = std::iter::once(("0.txt".to_string(), big))
        .chain((1..8).map(|i| (format!("{}.txt", i), format!("8 912 000 00 0{}", i))))
        .collect();
    let borrowed: Vec<(&str, &str)> = files
        .iter()
        .map(|(n, c)| (n.as_str(), c.as_str()))
        .collect();
    let paths = write_files(&dir, &borrowed);

    let config = Config {
        max_concurrent_reads: 8,
        ..Config::default()
    };
    let set = Extractor::new(&config).extract_files(&paths).await.unwrap();

    let mut expected = vec!["+7(999)000-00-09".to_string()];
    expected.extend((1..8).map(|i| format!("+7(912)000-00-0{}", i)));
    assert_eq!(set.to_strings(), expected);
}

#[tokio::test]
async fn test_concurrency_window_of_one_gives_same_result() {
    let dir = TempDir::new().expect("temp dir");
    let paths = write_files(
        &dir,
        &[
            ("a.txt", "+7(903) 456 78 90, 8 495 123 45 67"),
            ("b.txt", "84951234567 then 8 (912) 345-67-89"),
        ],
    );

    let serial = Extractor::new(&Config {
        max_concurrent_reads: 1,
        ..Config::default()
    });
    let parallel = Extractor::default();

    let a = serial.extract_files(&paths).await.unwrap();
    let b = parallel.extract_files(&paths).await.unwrap();
    assert_eq!(a, b);
    assert_eq!(
        a.to_strings(),
        vec!["+7(903)456-78-90", "+7(495)123-45-67", "+7(912)345-67-89"]
    );
}

#[tokio::test]
async fn test_missing_file_skipped_by_default() {
    let dir = TempDir::new().expect("temp dir");
    let mut paths = write_files(&dir, &[("a.txt", "89120000001")]);
    paths.insert(0, dir.path().join("missing.txt"));

    let extractor = Extractor::default();
    let set = extractor.extract_files(&paths).await.unwrap();

    assert_eq!(set.to_strings(), vec!["+7(912)000-00-01"]);
    assert_eq!(extractor.metrics().sources_failed_total(), 1);
}

#[tokio::test]
async fn test_missing_file_aborts_when_configured() {
    let dir = TempDir::new().expect("temp dir");
    let mut paths = write_files(&dir, &[("a.txt", "89120000001")]);
    paths.push(dir.path().join("missing.txt"));

    let extractor = Extractor::new(&Config {
        on_unreadable: UnreadablePolicy::Abort,
        ..Config::default()
    });
    let err = extractor.extract_files(&paths).await.unwrap_err();

    match err {
        SourceError::Read { path, .. } => assert!(path.ends_with("missing.txt")),
        other => panic!("Expected Read error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_non_utf8_file_is_unreadable() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("binary.bin");
    fs::write(&path, [0xff, 0xfe, 0x38, 0x39]).expect("write binary");

    let extractor = Extractor::new(&Config {
        on_unreadable: UnreadablePolicy::Abort,
        ..Config::default()
    });
    assert!(extractor.extract_files(&[path]).await.is_err());
}
