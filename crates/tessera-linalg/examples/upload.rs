//! Fills a uniform buffer through aliasing matrix and vector views, as one would before handing
//! it to a GPU.
//!
//! Run with `RUST_LOG=trace` to see the library's diagnostics.

use std::f32::consts::FRAC_PI_4;

use anyhow::Context;
use log::LevelFilter;
use tessera_linalg::*;

const MODEL: usize = 0;
const VIEW: usize = 16;
const MODEL_VIEW: usize = 32;
const NORMAL: usize = 48;
const LIGHT: usize = 57;
const LEN: usize = 61;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .parse_default_env()
        .try_init()
        .ok();

    let mut buffer = [0.0f32; LEN];
    let cells = shared_cells(&mut buffer);

    let mut model = BufferMatrix::<f32, 4>::new(cells, MODEL);
    let mut view = BufferMatrix::<f32, 4>::new(cells, VIEW);
    let mut model_view = BufferMatrix::<f32, 4>::new(cells, MODEL_VIEW);
    let mut normal = BufferMatrix::<f32, 3>::new(cells, NORMAL);
    let mut light = BufferVector::<f32, 4>::new(cells, LIGHT);

    // Rotate, then move the object away from the origin.
    let rotation = Quat::from_axis_angle(vec3(1.0, 1.0, 0.0), FRAC_PI_4);
    make_rotation_matrix4(rotation, &mut model)?;
    let translated = Mat4f::from_translation(vec3(0.0, 0.0, -5.0)) * model.to_matrix()?;
    model.set_all(translated)?;

    // The camera sits at (0, 2, 3); the view matrix is the inverse of its placement.
    let camera = Mat4f::from_translation(vec3(0.0, 2.0, 3.0));
    inverse_into(&camera, &mut view).context("camera placement is singular")?;
    multiply_into(&view, &model, &mut model_view)?;

    // Normals transform with the inverse transpose of the upper left 3x3 part.
    let upper_left = model_view.to_matrix()?.upper_left();
    inverse_into(&upper_left, &mut normal)?;
    normal.transpose_in_place()?;

    light.set_all(vec4(1.0, -1.0, -1.0, 0.0))?;
    light.normalize_in_place()?;

    log::info!("model-view matrix: {}", model_view.to_matrix()?);
    log::info!("normal matrix: {}", normal.to_matrix()?);
    log::info!("light direction: {}", light.to_vector()?);

    // A view that runs past the end of the buffer is rejected on access.
    let overflow = BufferMatrix::<f32, 4>::new(cells, LEN - 8);
    if let Err(e) = overflow.to_matrix() {
        log::info!("rejected out-of-range view: {e}");
    }

    // Singular input leaves the destination untouched.
    if let Err(e) = inverse_into(&Mat3f::ZERO, &mut normal) {
        log::info!("rejected inversion: {e}");
    }

    let bytes = bytemuck::cast_slice::<f32, u8>(&buffer);
    println!("{} bytes ready for upload", bytes.len());
    for chunk in bytes.chunks(32).take(4) {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{b:02x}")).collect();
        println!("{}", hex.join(" "));
    }

    Ok(())
}
