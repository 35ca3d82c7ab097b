use std::fs;
use std::path::Path;

use kernel_bridge::MockKernel;
use part_types::FeatureKind;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dataset_cli::{run_basic, run_random, run_single, BatchConfig};

fn config(dir: &Path, count: u32, format: &str) -> BatchConfig {
    BatchConfig {
        count,
        raw_format: format.to_string(),
        out_dir: dir.to_path_buf(),
    }
}

fn files_with_extension(dir: &Path, ext: &str) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(&format!(".{}", ext)))
        .collect();
    names.sort();
    names
}

#[test]
fn random_batch_writes_three_files_per_part() {
    let dir = tempfile::tempdir().unwrap();
    let mut kernel = MockKernel::new();
    let mut rng = StdRng::seed_from_u64(5);

    run_random(&mut kernel, &mut rng, &config(dir.path(), 3, "json")).unwrap();

    assert_eq!(files_with_extension(dir.path(), "step").len(), 3);
    assert_eq!(files_with_extension(dir.path(), "stl").len(), 3);
    let labels = files_with_extension(dir.path(), "json");
    assert_eq!(
        labels,
        [
            "boxfraunhofer_part_1.json",
            "boxfraunhofer_part_2.json",
            "boxfraunhofer_part_3.json"
        ]
    );
}

#[test]
fn random_labels_always_carry_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let mut kernel = MockKernel::new();
    let mut rng = StdRng::seed_from_u64(5);

    run_random(&mut kernel, &mut rng, &config(dir.path(), 5, "json")).unwrap();

    for name in files_with_extension(dir.path(), "json") {
        let text = fs::read_to_string(dir.path().join(&name)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let root = value.as_object().unwrap();

        let keys: Vec<&String> = root.keys().collect();
        assert_eq!(keys[0], "dimensions", "First entry must be dimensions");
        assert!(root["dimensions"]["length"].as_f64().unwrap() >= 20.0);
        // 1 to 3 features besides the dimensions entry.
        assert!((2..=4).contains(&root.len()));
    }
}

#[test]
fn unknown_format_skips_labels_but_keeps_geometry() {
    let dir = tempfile::tempdir().unwrap();
    let mut kernel = MockKernel::new();
    let mut rng = StdRng::seed_from_u64(5);

    run_random(&mut kernel, &mut rng, &config(dir.path(), 3, "yaml")).unwrap();

    let total = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(total, 6, "3 step + 3 stl, no labels");
}

#[test]
fn basic_batch_names_files_after_the_shape() {
    let dir = tempfile::tempdir().unwrap();
    let mut kernel = MockKernel::new();
    let mut rng = StdRng::seed_from_u64(9);

    run_basic(&mut kernel, &mut rng, &config(dir.path(), 4, "xml")).unwrap();

    let steps = files_with_extension(dir.path(), "step");
    assert_eq!(steps.len(), 4);
    for name in &steps {
        assert!(
            name.contains("_basicshape_fraunhofer"),
            "unexpected name {}",
            name
        );
    }
    assert_eq!(files_with_extension(dir.path(), "xml").len(), 4);

    // Each xml label carries the Type element.
    for name in files_with_extension(dir.path(), "xml") {
        let text = fs::read_to_string(dir.path().join(&name)).unwrap();
        assert!(text.contains("<Type>"));
    }
}

#[test]
fn single_hole_excel_writes_xlsx_labels() {
    let dir = tempfile::tempdir().unwrap();
    let mut kernel = MockKernel::new();
    let mut rng = StdRng::seed_from_u64(13);

    run_single(
        &mut kernel,
        &mut rng,
        &config(dir.path(), 2, "excel"),
        FeatureKind::Hole,
    )
    .unwrap();

    let labels = files_with_extension(dir.path(), "xlsx");
    assert_eq!(labels, ["boxfraunhofer_part_1.xlsx", "boxfraunhofer_part_2.xlsx"]);
    for name in labels {
        assert!(fs::metadata(dir.path().join(name)).unwrap().len() > 0);
    }
}

#[test]
fn single_label_holds_only_the_forced_feature() {
    let dir = tempfile::tempdir().unwrap();
    let mut kernel = MockKernel::new();
    let mut rng = StdRng::seed_from_u64(13);

    run_single(
        &mut kernel,
        &mut rng,
        &config(dir.path(), 1, "json"),
        FeatureKind::Slot,
    )
    .unwrap();

    let text = fs::read_to_string(dir.path().join("boxfraunhofer_part_1.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let root = value.as_object().unwrap();

    assert_eq!(root.len(), 1);
    assert!(root["slot"]["length"].as_f64().unwrap() >= 5.0);
    assert!(root["slot"]["width"].as_f64().unwrap() <= 3.0);
}

#[test]
fn failed_fillet_leaves_an_empty_single_label() {
    let dir = tempfile::tempdir().unwrap();
    let mut kernel = MockKernel::new();
    kernel.fail_fillet = true;
    let mut rng = StdRng::seed_from_u64(13);

    run_single(
        &mut kernel,
        &mut rng,
        &config(dir.path(), 1, "json"),
        FeatureKind::Fillet,
    )
    .unwrap();

    // Geometry still written, label empty.
    assert!(dir.path().join("boxfraunhofer_part_1.step").exists());
    assert!(dir.path().join("boxfraunhofer_part_1.stl").exists());

    let text = fs::read_to_string(dir.path().join("boxfraunhofer_part_1.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(value.as_object().unwrap().is_empty());
}

#[test]
fn seeded_runs_are_reproducible() {
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();

    for dir in [dir_a.path(), dir_b.path()] {
        let mut kernel = MockKernel::new();
        let mut rng = StdRng::seed_from_u64(21);
        run_random(&mut kernel, &mut rng, &config(dir, 2, "json")).unwrap();
    }

    for name in files_with_extension(dir_a.path(), "json") {
        let a = fs::read_to_string(dir_a.path().join(&name)).unwrap();
        let b = fs::read_to_string(dir_b.path().join(&name)).unwrap();
        assert_eq!(a, b, "Label {} must match across runs", name);
    }
}
