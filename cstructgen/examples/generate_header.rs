//! Generates a C header for a small particle system and prints it.
//!
//! Run with: `cargo run --example generate_header`

use cstructgen::prelude::*;

#[derive(CShape)]
struct Vec3 {
    x: f32,
    y: f32,
    z: f32,
}

#[derive(CShape)]
struct Particle {
    id: u64,
    position: Vec3,
    velocity: Vec3,
    alive: bool,
    tag: [u8; 16],
    user_data: *mut core::ffi::c_void,
}

fn main() -> Result<(), CodegenError> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut generator = Generator::new(GeneratorOptions::default());
    generator.add_type::<Particle>()?;

    let out = std::env::temp_dir().join("particle_gen.h");
    generator.write_to(&out, "PARTICLE_GEN_H")?;

    println!("wrote {}", out.display());
    print!("{}", generator.render("PARTICLE_GEN_H"));
    Ok(())
}
