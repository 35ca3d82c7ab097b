use kernel_bridge::{Kernel, MockKernel};
use part_types::{
    BoxDims, FeatureRecord, FeatureSpec, PocketProfile, PocketSpec, ShapeKind, ShapeSpec,
};
use part_builder::{apply_features, build_primitive, BuildError};

fn dims() -> BoxDims {
    BoxDims::new(60.0, 80.0, 40.0)
}

#[test]
fn builds_each_primitive_kind() {
    let mut kernel = MockKernel::new();

    let spec = ShapeSpec::new(
        ShapeKind::Box,
        &[("length", 4.0), ("width", 5.0), ("height", 6.0)],
    );
    let handle = build_primitive(&mut kernel, &spec).unwrap();
    assert_eq!(kernel.ops(&handle), ["box(4,5,6)"]);

    let spec = ShapeSpec::new(ShapeKind::Cylinder, &[("radius", 2.0), ("height", 7.0)]);
    let handle = build_primitive(&mut kernel, &spec).unwrap();
    assert_eq!(kernel.ops(&handle), ["cylinder(2,7)"]);

    let spec = ShapeSpec::new(ShapeKind::Hexagon, &[("radius", 3.0), ("height", 8.0)]);
    let handle = build_primitive(&mut kernel, &spec).unwrap();
    assert_eq!(kernel.ops(&handle), ["hexagon(3,8)"]);

    let spec = ShapeSpec::new(ShapeKind::Sphere, &[("radius", 2.5)]);
    let handle = build_primitive(&mut kernel, &spec).unwrap();
    assert_eq!(kernel.ops(&handle), ["sphere(2.5)"]);
}

#[test]
fn missing_dimension_is_an_error() {
    let mut kernel = MockKernel::new();
    let spec = ShapeSpec::new(ShapeKind::Cylinder, &[("radius", 2.0)]);
    let result = build_primitive(&mut kernel, &spec);
    assert!(matches!(
        result,
        Err(BuildError::MissingDimension { name: "height", .. })
    ));
}

#[test]
fn applies_features_in_order_and_records_them() {
    let mut kernel = MockKernel::new();
    let d = dims();
    let base = kernel.make_box(&d).unwrap();

    let features = vec![
        FeatureSpec::Hole { diameter: 12.0 },
        FeatureSpec::Slot {
            length: 20.0,
            width: 2.0,
        },
        FeatureSpec::Pocket(PocketSpec {
            profile: PocketProfile::Circle { diameter: 10.0 },
            depth: 8.0,
        }),
    ];

    let mut record = FeatureRecord::with_dimensions(d.length, d.width, d.height);
    let result = apply_features(&mut kernel, base, &d, &features, &mut record).unwrap();

    let ops = kernel.ops(&result);
    assert_eq!(ops.len(), 4);
    assert!(ops[1].starts_with("hole("));
    assert!(ops[2].starts_with("slot("));
    assert!(ops[3].starts_with("pocket(circle"));

    let names: Vec<&str> = record.iter().map(|(n, _)| n).collect();
    assert_eq!(names, ["dimensions", "hole", "slot", "pocket"]);
}

#[test]
fn failed_fillet_is_skipped_and_left_out_of_the_label() {
    let mut kernel = MockKernel::new();
    kernel.fail_fillet = true;
    let d = dims();
    let base = kernel.make_box(&d).unwrap();

    let features = vec![
        FeatureSpec::Fillet { radius: 4.0 },
        FeatureSpec::Hole { diameter: 12.0 },
    ];

    let mut record = FeatureRecord::new();
    let result = apply_features(&mut kernel, base, &d, &features, &mut record).unwrap();

    // The fillet never ran; the hole applied to the unmodified box.
    let ops = kernel.ops(&result);
    assert_eq!(ops.len(), 2);
    assert!(ops[1].starts_with("hole("));

    assert!(record.get("fillet").is_none());
    assert!(record.get("hole").is_some());
}

#[test]
fn failed_revolve_is_recoverable() {
    let mut kernel = MockKernel::new();
    kernel.fail_revolve = true;
    let d = dims();
    let base = kernel.make_box(&d).unwrap();

    let features = vec![FeatureSpec::Revolved {
        profile_width: 8.0,
        profile_height: 15.0,
    }];

    let mut record = FeatureRecord::new();
    let result = apply_features(&mut kernel, base, &d, &features, &mut record).unwrap();

    assert_eq!(kernel.ops(&result).len(), 1, "Solid is unchanged");
    assert!(record.is_empty());
}

#[test]
fn boolean_failure_aborts_the_part() {
    let mut kernel = MockKernel::new();
    kernel.fail_booleans = true;
    let d = dims();
    let base = kernel.make_box(&d).unwrap();

    let features = vec![FeatureSpec::Cutout {
        length: 20.0,
        width: 15.0,
    }];

    let mut record = FeatureRecord::new();
    let result = apply_features(&mut kernel, base, &d, &features, &mut record);
    assert!(matches!(result, Err(BuildError::Kernel(_))));
}

#[test]
fn oversized_chamfer_skips_but_in_range_one_lands() {
    let mut kernel = MockKernel::new();
    let d = BoxDims::new(60.0, 80.0, 8.0);
    let base = kernel.make_box(&d).unwrap();

    // 2 * 5 >= min_dim 8: rejected by the kernel, recovered by the builder.
    let features = vec![
        FeatureSpec::Chamfer { size: 5.0 },
        FeatureSpec::Chamfer { size: 1.5 },
    ];

    let mut record = FeatureRecord::new();
    let result = apply_features(&mut kernel, base, &d, &features, &mut record).unwrap();

    let ops = kernel.ops(&result);
    assert_eq!(ops.len(), 2);
    assert!(ops[1].starts_with("chamfer(1.5"));
    assert_eq!(record.len(), 1);
}
