//! Primitive builders on top of truck's sweep API.
//!
//! truck has no built-in box/cylinder/sphere; everything is successive sweeps.

use std::f64::consts::PI;
use truck_modeling::builder;
use truck_modeling::geometry::{Curve, Line};
use truck_modeling::topology::{Edge, Solid, Wire};
use truck_modeling::{EuclideanSpace, Point3, Rad, Vector3};

/// Create a box solid via successive translational sweeps.
/// Origin at (0,0,0), extends to (w,h,d).
pub fn make_box(w: f64, h: f64, d: f64) -> Solid {
    let v = builder::vertex(Point3::new(0.0, 0.0, 0.0));
    let edge = builder::tsweep(&v, Vector3::new(w, 0.0, 0.0));
    let face = builder::tsweep(&edge, Vector3::new(0.0, h, 0.0));
    builder::tsweep(&face, Vector3::new(0.0, 0.0, d))
}

/// Create a cylinder solid: circle wire → face → translational sweep.
/// Base centered at origin in the XY plane, extending along +Z.
pub fn make_cylinder(radius: f64, height: f64) -> Solid {
    let v = builder::vertex(Point3::new(radius, 0.0, 0.0));
    let wire = builder::rsweep(&v, Point3::origin(), Vector3::unit_z(), Rad(2.0 * PI));
    let face = builder::try_attach_plane(&[wire]).expect("Failed to create circular face");
    builder::tsweep(&face, Vector3::new(0.0, 0.0, height))
}

/// Create a hexagonal prism: six-vertex polygon wire → face → sweep.
/// `radius` is the circumradius; base centered at origin, extending along +Z.
pub fn make_hexagon_prism(radius: f64, height: f64) -> Solid {
    let points: Vec<Point3> = (0..6)
        .map(|i| {
            let angle = PI / 3.0 * i as f64;
            Point3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
        })
        .collect();

    let vertices: Vec<_> = points.iter().map(|&p| builder::vertex(p)).collect();
    let mut edges: Vec<Edge> = Vec::new();
    for i in 0..6 {
        let j = (i + 1) % 6;
        edges.push(Edge::new(
            &vertices[i],
            &vertices[j],
            Curve::Line(Line(points[i], points[j])),
        ));
    }
    let wire = Wire::from_iter(edges);

    let face = builder::try_attach_plane(&[wire]).expect("Failed to create hexagonal face");
    builder::tsweep(&face, Vector3::new(0.0, 0.0, height))
}

/// Create a sphere solid: semicircle face → rotational sweep 2π.
/// Centered at origin.
pub fn make_sphere(radius: f64) -> Solid {
    // Semicircle arc in the XZ plane: rotate (r,0,0) around Y by π,
    // giving a wire from (r,0,0) through (0,0,r) to (-r,0,0).
    let v_right = builder::vertex(Point3::new(radius, 0.0, 0.0));
    let arc_wire = builder::rsweep(&v_right, Point3::origin(), Vector3::unit_y(), Rad(PI));

    // Close with a line from (-r,0,0) back to (r,0,0)
    let v_left = builder::vertex(Point3::new(-radius, 0.0, 0.0));
    let line_edge: Edge = builder::tsweep(&v_left, Vector3::new(2.0 * radius, 0.0, 0.0));

    let mut edges: Vec<Edge> = Vec::new();
    for edge in arc_wire.edge_iter() {
        edges.push(edge.clone());
    }
    edges.push(line_edge);
    let closed_wire = Wire::from_iter(edges);

    let face = builder::try_attach_plane(&[closed_wire]).expect("Failed to create semicircle face");

    builder::rsweep(&face, Point3::origin(), Vector3::unit_z(), Rad(2.0 * PI))
}
