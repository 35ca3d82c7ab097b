//! Batch loops for the three dataset variants.
//!
//! Each variant runs sampler, builder, exporter and label writer per part,
//! printing one progress line per file. Geometry failures abort the batch;
//! files already written stay on disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use kernel_bridge::{Kernel, SolidHandle};
use part_types::{FeatureKind, FeatureRecord, LabelFormat};
use part_builder::{apply_features, build_primitive};
use file_export::{write_feature_label, write_shape_label, write_step, write_stl};
use rand::Rng;
use sampling::dims::{random_shape_kind, sample_shape_spec};
use sampling::{sample_box_dims, sample_feature, sample_feature_set, FEATURE_BOX_RANGE};

/// Chord tolerance for STL tessellation.
const MESH_TOLERANCE: f64 = 0.01;

pub struct BatchConfig {
    pub count: u32,
    /// Label format exactly as the user gave it. Unknown values keep the
    /// batch running without label output.
    pub raw_format: String,
    pub out_dir: PathBuf,
}

impl BatchConfig {
    pub fn label_format(&self) -> Option<LabelFormat> {
        LabelFormat::parse(&self.raw_format)
    }
}

/// Standalone primitives with random dimensions.
pub fn run_basic<R: Rng>(
    kernel: &mut dyn Kernel,
    rng: &mut R,
    config: &BatchConfig,
) -> Result<()> {
    let format = config.label_format();
    for i in 1..=config.count {
        let kind = random_shape_kind(rng);
        let spec = sample_shape_spec(rng, kind);
        let solid = build_primitive(kernel, &spec)
            .with_context(|| format!("building {} {}", kind, i))?;

        let stem = format!("{}{}_basicshape_fraunhofer", kind.name(), i);
        export_geometry(kernel, &solid, &config.out_dir, &stem)?;

        match format {
            Some(format) => {
                let path = label_path(&config.out_dir, &stem, format);
                write_shape_label(&spec, format, &path)
                    .with_context(|| format!("writing label for {}", stem))?;
                println!("Wrote {}", path.display());
            }
            None => println!("Unknown data format: {}", config.raw_format),
        }
    }
    Ok(())
}

/// Boxes carrying 1 to 3 random machining features.
pub fn run_random<R: Rng>(
    kernel: &mut dyn Kernel,
    rng: &mut R,
    config: &BatchConfig,
) -> Result<()> {
    for i in 1..=config.count {
        let dims = sample_box_dims(rng, FEATURE_BOX_RANGE);
        let features = sample_feature_set(rng, &dims);
        let mut record = FeatureRecord::with_dimensions(dims.length, dims.width, dims.height);

        let base = kernel
            .make_box(&dims)
            .with_context(|| format!("building base box {}", i))?;
        let solid = apply_features(kernel, base, &dims, &features, &mut record)
            .with_context(|| format!("applying features to part {}", i))?;

        finish_box_part(kernel, &solid, &record, config, i)?;
    }
    Ok(())
}

/// Boxes carrying one fixed feature kind with random parameters.
pub fn run_single<R: Rng>(
    kernel: &mut dyn Kernel,
    rng: &mut R,
    config: &BatchConfig,
    kind: FeatureKind,
) -> Result<()> {
    for i in 1..=config.count {
        let dims = sample_box_dims(rng, FEATURE_BOX_RANGE);
        let feature = sample_feature(rng, kind, &dims);
        let mut record = FeatureRecord::new();

        let base = kernel
            .make_box(&dims)
            .with_context(|| format!("building base box {}", i))?;
        let solid = apply_features(kernel, base, &dims, &[feature], &mut record)
            .with_context(|| format!("applying {} to part {}", kind, i))?;

        finish_box_part(kernel, &solid, &record, config, i)?;
    }
    Ok(())
}

fn finish_box_part(
    kernel: &mut dyn Kernel,
    solid: &SolidHandle,
    record: &FeatureRecord,
    config: &BatchConfig,
    index: u32,
) -> Result<()> {
    let stem = format!("boxfraunhofer_part_{}", index);
    export_geometry(kernel, solid, &config.out_dir, &stem)?;

    match config.label_format() {
        Some(format) => {
            let path = label_path(&config.out_dir, &stem, format);
            write_feature_label(record, format, &path)
                .with_context(|| format!("writing label for {}", stem))?;
            println!("Wrote {}", path.display());
        }
        None => log::warn!(
            "unknown label format '{}', skipping label for {}",
            config.raw_format,
            stem
        ),
    }
    Ok(())
}

fn export_geometry(
    kernel: &mut dyn Kernel,
    solid: &SolidHandle,
    out_dir: &Path,
    stem: &str,
) -> Result<()> {
    let step_path = out_dir.join(format!("{}.step", stem));
    write_step(&*kernel, solid, &step_path)
        .with_context(|| format!("writing {}", step_path.display()))?;
    println!("Wrote {}", step_path.display());

    let mesh = kernel
        .tessellate(solid, MESH_TOLERANCE)
        .with_context(|| format!("tessellating {}", stem))?;
    let stl_path = out_dir.join(format!("{}.stl", stem));
    write_stl(&mesh, &stl_path).with_context(|| format!("writing {}", stl_path.display()))?;
    println!("Wrote {}", stl_path.display());
    Ok(())
}

fn label_path(out_dir: &Path, stem: &str, format: LabelFormat) -> PathBuf {
    out_dir.join(format!("{}.{}", stem, format.extension()))
}
