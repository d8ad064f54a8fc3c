//! Small-oscillation analysis of a chain about its hanging equilibrium.
//!
//! Linearising the chain's Lagrangian in the rod angles gives `M θ'' + K θ = 0`
//! with
//!
//! - `M[i][j] = (Σ_{k ≥ max(i, j)} m_k) · l_i · l_j`
//! - `K[i][i] = (Σ_{k ≥ i} m_k) · g · l_i`
//!
//! The normal mode frequencies are the square roots of the generalised
//! eigenvalues of `(K, M)`.

use crate::config::ChainConfig;
use nalgebra::{Cholesky, DMatrix, SymmetricEigen};
use std::f64::consts::TAU;

/// Periods of the chain's normal modes, longest first.
///
/// Returns `None` for an empty chain, for non-downward gravity, or when the
/// bead parameters do not yield a positive-definite mass matrix.
pub fn normal_mode_periods(config: &ChainConfig, gravity: f64) -> Option<Vec<f64>> {
    let beads = &config.beads;
    let n = beads.len();
    if n == 0 || gravity >= 0.0 {
        return None;
    }
    let g = -gravity;

    let mut tail_mass = vec![0.0; n];
    let mut acc = 0.0;
    for i in (0..n).rev() {
        acc += beads[i].mass;
        tail_mass[i] = acc;
    }

    let mass = DMatrix::from_fn(n, n, |i, j| {
        tail_mass[i.max(j)] * beads[i].length * beads[j].length
    });
    let stiffness = DMatrix::from_fn(n, n, |i, j| {
        if i == j {
            tail_mass[i] * g * beads[i].length
        } else {
            0.0
        }
    });

    // Reduce to a standard symmetric problem: L⁻¹ K L⁻ᵀ with M = L Lᵀ.
    let l = Cholesky::new(mass)?.l();
    let l_inv = l.try_inverse()?;
    let reduced = &l_inv * &stiffness * l_inv.transpose();
    let eigen = SymmetricEigen::new(reduced);

    let mut periods: Vec<f64> = eigen
        .eigenvalues
        .iter()
        .filter(|omega_sq| **omega_sq > 0.0)
        .map(|omega_sq| TAU / omega_sq.sqrt())
        .collect();
    periods.sort_by(|a, b| b.total_cmp(a));
    Some(periods)
}

/// Period of an ideal simple pendulum in the small-angle limit.
pub fn simple_pendulum_period(length: f64, gravity: f64) -> f64 {
    TAU * (length / gravity.abs()).sqrt()
}
