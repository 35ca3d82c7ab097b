//! Tool solids for feature operations.
//!
//! Every machining feature is realized as a boolean between the base box and
//! a tool solid built here: cuts subtract the tool, bosses unite it. Through
//! cutters overshoot both faces so the boolean never has to split coincident
//! surfaces.

use std::f64::consts::{FRAC_PI_2, PI};

use part_types::BoxDims;
use truck_modeling::builder;
use truck_modeling::geometry::{Curve, Line};
use truck_modeling::topology::{Edge, Solid, Wire};
use truck_modeling::{InnerSpace, Point3, Rad, Vector3};

use crate::primitives::{make_box, make_cylinder};

/// Overshoot for through cutters and embedded boss bases.
pub(crate) const PAD: f64 = 0.5;

fn line_edge(p: Point3, q: Point3) -> Edge {
    Edge::new(
        &builder::vertex(p),
        &builder::vertex(q),
        Curve::Line(Line(p, q)),
    )
}

/// Through-hole cutter: cylinder centered on the box, spanning full height.
pub fn through_cylinder(dims: &BoxDims, diameter: f64) -> Solid {
    let tool = make_cylinder(diameter / 2.0, dims.height + 2.0 * PAD);
    builder::translated(
        &tool,
        Vector3::new(dims.length / 2.0, dims.width / 2.0, -PAD),
    )
}

/// Cutout cutter: centered rectangular prism spanning full height.
pub fn through_rect(dims: &BoxDims, length: f64, width: f64) -> Solid {
    let tool = make_box(length, width, dims.height + 2.0 * PAD);
    builder::translated(
        &tool,
        Vector3::new(
            (dims.length - length) / 2.0,
            (dims.width - width) / 2.0,
            -PAD,
        ),
    )
}

/// Slot cutter: obround profile (two semicircular caps joined by straight
/// edges) centered on the box, extruded through the full height.
pub fn slot_prism(dims: &BoxDims, length: f64, width: f64) -> Solid {
    let r = width / 2.0;
    let half_span = (length - width) / 2.0;
    let cx = dims.length / 2.0;
    let cy = dims.width / 2.0;
    let z0 = -PAD;

    let right_center = Point3::new(cx + half_span, cy, z0);
    let left_center = Point3::new(cx - half_span, cy, z0);

    let v_right = builder::vertex(Point3::new(cx + half_span, cy - r, z0));
    let right_arc = builder::rsweep(&v_right, right_center, Vector3::unit_z(), Rad(PI));

    let v_left = builder::vertex(Point3::new(cx - half_span, cy + r, z0));
    let left_arc = builder::rsweep(&v_left, left_center, Vector3::unit_z(), Rad(PI));

    let mut edges: Vec<Edge> = Vec::new();
    for edge in right_arc.edge_iter() {
        edges.push(edge.clone());
    }
    edges.push(line_edge(
        Point3::new(cx + half_span, cy + r, z0),
        Point3::new(cx - half_span, cy + r, z0),
    ));
    for edge in left_arc.edge_iter() {
        edges.push(edge.clone());
    }
    edges.push(line_edge(
        Point3::new(cx - half_span, cy - r, z0),
        Point3::new(cx + half_span, cy - r, z0),
    ));
    let wire = Wire::from_iter(edges);

    let face = builder::try_attach_plane(&[wire]).expect("Failed to create slot face");
    builder::tsweep(&face, Vector3::new(0.0, 0.0, dims.height + 2.0 * PAD))
}

/// Circular pocket cutter: blind cylinder from the top face down `depth`.
pub fn pocket_cylinder(dims: &BoxDims, diameter: f64, depth: f64) -> Solid {
    let tool = make_cylinder(diameter / 2.0, depth + PAD);
    builder::translated(
        &tool,
        Vector3::new(
            dims.length / 2.0,
            dims.width / 2.0,
            dims.height - depth,
        ),
    )
}

/// Rectangular pocket cutter: blind prism from the top face down `depth`.
pub fn pocket_rect(dims: &BoxDims, length: f64, width: f64, depth: f64) -> Solid {
    let tool = make_box(length, width, depth + PAD);
    builder::translated(
        &tool,
        Vector3::new(
            (dims.length - length) / 2.0,
            (dims.width - width) / 2.0,
            dims.height - depth,
        ),
    )
}

/// Extruded-boss tool: centered rectangular prism rising `height` above the
/// top face, with its base sunk into the box for a robust union.
pub fn boss_rect(dims: &BoxDims, length: f64, width: f64, height: f64) -> Solid {
    let tool = make_box(length, width, height + PAD);
    builder::translated(
        &tool,
        Vector3::new(
            (dims.length - length) / 2.0,
            (dims.width - width) / 2.0,
            dims.height - PAD,
        ),
    )
}

/// Revolved-boss tool: a cylinder lying in the top-face plane, axis along Y,
/// centered on the box. Radius is half the revolved profile width, length is
/// the profile height.
pub fn lying_cylinder(dims: &BoxDims, profile_width: f64, profile_height: f64) -> Solid {
    let radius = profile_width / 2.0;
    let cx = dims.length / 2.0;
    let y0 = dims.width / 2.0 - profile_height / 2.0;
    let z = dims.height;

    let center = Point3::new(cx, y0, z);
    let v = builder::vertex(Point3::new(cx + radius, y0, z));
    let wire = builder::rsweep(&v, center, Vector3::unit_y(), Rad(2.0 * PI));
    let face = builder::try_attach_plane(&[wire]).expect("Failed to create disc face");
    builder::tsweep(&face, Vector3::new(0.0, profile_height, 0.0))
}

/// One of the twelve outer edges of the base box, described by its corner
/// point, the two unit directions pointing into the adjacent faces, and the
/// sweep direction along the edge. `a × b` always points along `sweep`.
struct BoxEdge {
    corner: Point3,
    a: Vector3,
    b: Vector3,
    sweep: Vector3,
    length: f64,
}

fn oriented(corner: Point3, u: Vector3, v: Vector3, sweep: Vector3, length: f64) -> BoxEdge {
    if u.cross(v).dot(sweep) >= 0.0 {
        BoxEdge {
            corner,
            a: u,
            b: v,
            sweep,
            length,
        }
    } else {
        BoxEdge {
            corner,
            a: v,
            b: u,
            sweep,
            length,
        }
    }
}

fn box_edges(dims: &BoxDims) -> Vec<BoxEdge> {
    let (l, w, h) = (dims.length, dims.width, dims.height);
    let sign = |at_zero: bool| if at_zero { 1.0 } else { -1.0 };
    let mut edges = Vec::with_capacity(12);

    // Vertical edges
    for &(x, y) in &[(0.0, 0.0), (l, 0.0), (l, w), (0.0, w)] {
        edges.push(oriented(
            Point3::new(x, y, 0.0),
            Vector3::new(sign(x == 0.0), 0.0, 0.0),
            Vector3::new(0.0, sign(y == 0.0), 0.0),
            Vector3::unit_z(),
            h,
        ));
    }
    // Edges along X
    for &(y, z) in &[(0.0, 0.0), (w, 0.0), (0.0, h), (w, h)] {
        edges.push(oriented(
            Point3::new(0.0, y, z),
            Vector3::new(0.0, sign(y == 0.0), 0.0),
            Vector3::new(0.0, 0.0, sign(z == 0.0)),
            Vector3::unit_x(),
            l,
        ));
    }
    // Edges along Y
    for &(x, z) in &[(0.0, 0.0), (l, 0.0), (0.0, h), (l, h)] {
        edges.push(oriented(
            Point3::new(x, 0.0, z),
            Vector3::new(sign(x == 0.0), 0.0, 0.0),
            Vector3::new(0.0, 0.0, sign(z == 0.0)),
            Vector3::unit_y(),
            w,
        ));
    }
    edges
}

/// Chamfer cutters: one triangular wedge prism per box edge.
pub fn chamfer_cutters(dims: &BoxDims, size: f64) -> Vec<Solid> {
    box_edges(dims)
        .iter()
        .map(|e| {
            let p0 = e.corner - e.sweep * PAD;
            let pa = p0 + e.a * size;
            let pb = p0 + e.b * size;
            let wire = Wire::from_iter(vec![
                line_edge(p0, pa),
                line_edge(pa, pb),
                line_edge(pb, p0),
            ]);
            let face =
                builder::try_attach_plane(&[wire]).expect("Failed to create chamfer profile");
            builder::tsweep(&face, e.sweep * (e.length + 2.0 * PAD))
        })
        .collect()
}

/// Fillet cutters: one corner-square-minus-quarter-disc prism per box edge.
/// The arc bulges toward the edge, so subtracting the prism leaves a round.
pub fn fillet_cutters(dims: &BoxDims, radius: f64) -> Vec<Solid> {
    box_edges(dims)
        .iter()
        .map(|e| {
            let p0 = e.corner - e.sweep * PAD;
            let pa = p0 + e.a * radius;
            let pb = p0 + e.b * radius;
            let center = p0 + e.a * radius + e.b * radius;

            // Quarter arc from pb to pa around the sweep axis.
            let v_start = builder::vertex(pb);
            let arc = builder::rsweep(&v_start, center, e.sweep, Rad(FRAC_PI_2));

            let mut edges: Vec<Edge> = vec![line_edge(p0, pb)];
            for edge in arc.edge_iter() {
                edges.push(edge.clone());
            }
            edges.push(line_edge(pa, p0));
            let wire = Wire::from_iter(edges);

            let face =
                builder::try_attach_plane(&[wire]).expect("Failed to create fillet profile");
            builder::tsweep(&face, e.sweep * (e.length + 2.0 * PAD))
        })
        .collect()
}
