//! Fixed-size linear algebra over owned or shared memory.
//!
//! # Overview
//!
//! This crate provides vectors with 2, 3 or 4 elements ([`Vector`]), square matrices of order 2, 3
//! or 4 ([`Matrix`]) and rotation quaternions ([`Quat`]), along with the usual algebra over them:
//! dot and cross products, normalization, Gram-Schmidt orthonormalization, determinants, inverses
//! and conversions between quaternions and rotation matrices.
//!
//! Every value comes in two flavors:
//!
//! - Immutable snapshots ([`Vector`], [`Matrix`], [`Quat`]) are plain `Copy` values that never
//!   fail to access.
//! - Stored values ([`ArrayVector`], [`ArrayMatrix`], [`BufferVector`], [`BufferMatrix`]) address
//!   their elements through a [`Storage`], either owning the elements or viewing them in a
//!   caller-owned buffer. Several views may alias the same buffer, which lets callers fill memory
//!   that is later uploaded elsewhere (eg. to a GPU) without copying.
//!
//! Stored values are accessed through the [`ReadableVector`]/[`WritableVector`] and
//! [`ReadableMatrix`]/[`WritableMatrix`] traits, which the snapshots implement as well (read only).
//! Every access is bounds checked and reports a [`LinalgError`] instead of panicking.
//!
//! ```
//! # use tessera_linalg::*;
//! let mut buffer = [0.0f32; 32];
//! let cells = shared_cells(&mut buffer);
//!
//! let mut model = BufferMatrix::<f32, 4>::new(cells, 0);
//! let mut view = BufferMatrix::<f32, 4>::new(cells, 16);
//! model.set_all(Mat4f::from_translation(vec3(1.0, 2.0, 3.0)))?;
//! view.set_identity()?;
//!
//! // Column-major: the translation occupies slots 12, 13 and 14.
//! assert_eq!(cells[12].get(), 1.0);
//! assert_eq!(cells[14].get(), 3.0);
//!
//! // A view that does not fit into the buffer fails on access, not on construction.
//! let overflow = BufferMatrix::<f32, 4>::new(cells, 20);
//! assert!(overflow.get(3, 3).unwrap_err().is_index_out_of_range());
//! # Ok::<(), LinalgError>(())
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. Relying on const generics to specify
//!   vector and matrix dimensions keeps the API small.
//! - Support only a single, column-major, unpadded data layout for matrices and vectors.
//! - Be generic over the element type, but only over the [`Element`] types [`f32`], [`f64`],
//!   [`i32`] and [`i64`]. Operations that need square roots or division (normalization,
//!   inversion, quaternions) require a [`Float`] element.
//! - Never allocate outside of the byte serialization methods.
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger. Failed inversions are
//! logged at `debug` level; out-of-range accesses and degenerate-input fallbacks at `trace` level.

pub mod approx;
pub mod error;
mod matrix;
mod quat;
pub mod storage;
mod traits;
mod vector;


pub use crate::approx::{ApproxEq, DefaultTolerances, Tolerance};
pub use error::{LinalgError, Result};
pub use matrix::*;
pub use quat::*;
pub use storage::{shared_cells, Block, Storage};
pub use traits::*;
pub use vector::*;
