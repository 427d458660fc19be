//! Carves a 2x2x2 puzzle out of a cube and prints per-piece statistics.
//!
//! Run with `RUST_LOG=mould=debug` to watch the cuts.

use mould::math::Vector3;
use mould::operations::creation::MakeCube;
use mould::operations::offset::Bevel;
use mould::operations::query::{CheckClosed, EnclosedVolume, RotationCuts};
use mould::tessellation::{TessellateMould, TriangleMesh};
use mould::{Mould, Plane};

const BEVEL: f64 = 0.03;

fn main() -> mould::Result<()> {
    // Default: WARN for everything, INFO for mould.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("mould=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut mould = Mould::new(MakeCube::new(1.0).execute()?);
    for (tag, axis) in [(1, Vector3::x()), (2, Vector3::y()), (3, Vector3::z())] {
        mould.cut(Plane::new(axis, 0.0)?, tag)?;
    }

    for (id, piece) in mould.pieces() {
        let twists = RotationCuts::new(piece).execute()?;
        println!(
            "{id:?}: {} faces, volume {:.4}, {} twist planes",
            piece.faces().len(),
            EnclosedVolume::new(piece).execute(),
            twists.len(),
        );
    }

    for piece in mould.volumes_mut() {
        *piece = Bevel::new(BEVEL).execute(std::mem::take(piece))?;
        CheckClosed::new(piece).execute()?;
    }

    let meshes = TessellateMould::new(&mould).execute()?;
    let triangles: usize = meshes.iter().map(TriangleMesh::triangle_count).sum();
    println!("{} pieces, {triangles} triangles after bevelling", meshes.len());
    Ok(())
}
