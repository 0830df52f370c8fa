//! Brickprint footprint demo: projects a small gabled house and a flat
//! annex into their top-down footprints and sums them into a scene print.
//!
//! Usage:
//! ```text
//! cargo run --example footprint
//! RUST_LOG=brickprint=debug cargo run --example footprint
//! ```

use brickprint::math::Point3;
use brickprint::mesh::{Brick, Facet, DEFAULT_EPSG};
use brickprint::operations::{orthoproject, scene_print};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default: INFO for brickprint. Override with RUST_LOG.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("brickprint=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let scene = vec![gabled_house(), annex()];
    let projections = orthoproject(&scene)?;

    for footprint in &projections {
        println!(
            "{:>8}: {} prints, area {:.2} m², circumference {:.2} m",
            footprint.name(),
            footprint.len(),
            footprint.area(),
            footprint.circumference()?
        );
    }

    let combined = scene_print("scene", projections)?;
    println!(
        "{:>8}: {} prints, area {:.2} m², circumference {:.2} m",
        combined.name(),
        combined.len(),
        combined.area(),
        combined.circumference()?
    );
    Ok(())
}

/// A 4x2 m house with a gabled roof: floor, two roof slopes, two gable
/// walls. The walls are vertical and vanish from the footprint; the roof
/// occludes the floor.
fn gabled_house() -> Brick {
    let mut brick = Brick::new("house", Point3::origin(), DEFAULT_EPSG);
    for loop_points in [
        // Floor.
        vec![p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0), p(4.0, 2.0, 0.0), p(0.0, 2.0, 0.0)],
        // South roof slope, eave at z=2 up to the ridge at z=3.
        vec![p(0.0, 0.0, 2.0), p(4.0, 0.0, 2.0), p(4.0, 1.0, 3.0), p(0.0, 1.0, 3.0)],
        // North roof slope.
        vec![p(0.0, 1.0, 3.0), p(4.0, 1.0, 3.0), p(4.0, 2.0, 2.0), p(0.0, 2.0, 2.0)],
        // Gable walls.
        vec![p(0.0, 0.0, 0.0), p(0.0, 2.0, 0.0), p(0.0, 1.0, 3.0)],
        vec![p(4.0, 0.0, 0.0), p(4.0, 2.0, 0.0), p(4.0, 1.0, 3.0)],
    ] {
        if let Ok(facet) = Facet::new(loop_points) {
            brick.add_facet(facet);
        }
    }
    brick
}

/// A flat-roofed annex sharing the house's east wall line.
fn annex() -> Brick {
    let mut brick = Brick::new("annex", Point3::origin(), DEFAULT_EPSG);
    if let Ok(facet) = Facet::new(vec![
        p(4.0, 0.0, 1.5),
        p(6.0, 0.0, 1.5),
        p(6.0, 2.0, 1.5),
        p(4.0, 2.0, 1.5),
    ]) {
        brick.add_facet(facet);
    }
    brick
}

fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}
