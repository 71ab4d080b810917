//! Kamada-Kawai layout: build `D`/`L`/`K`, then relax the worst vertex at a time.
//!
//! The optimizer runs three nested loops:
//!
//! - epsilon loop: starts at `initial_energy / n` and loses `epsilon_decay` of its value after
//!   every iteration until it reaches `min_epsilon`;
//! - descent loop: picks the vertex with the largest `ΔM` and continues while that maximum is
//!   above epsilon and still more than `stall_threshold` below the baseline taken when the
//!   epsilon iteration started (that iteration's starting maximum plus one);
//! - relax loop: applies Newton steps to the picked vertex until its `ΔM` drops below epsilon.
//!
//! Every Newton step counts against one run-wide `max_passes` budget. Exhausting the budget is a
//! soft stop: positions reached so far are still written back.

use crate::algo::KamadaKawaiOptions;
use crate::error::{Error, Result};
use narwhal_graphlib::{Graph, Point};

pub mod energy;
pub mod matrix;

pub use energy::{NewtonStep, delta_m, energy, newton_step};
pub use matrix::{Matrices, distance_matrix, ideal_length_matrix, stiffness_matrix};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The epsilon schedule reached `min_epsilon`. Vertices may still sit above the final
    /// threshold when descent loops ended on a stall; see [`LayoutReport::stalled_sweeps`].
    Converged,
    /// The Newton-step budget ran out first.
    PassLimitExceeded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutReport {
    pub termination: Termination,
    pub passes: usize,
    pub initial_energy: f64,
    pub final_energy: f64,
    pub final_epsilon: f64,
    /// Epsilon iterations started; epsilon shrinks strictly once per iteration.
    pub epsilon_iterations: usize,
    /// Epsilon iterations whose descent loop ended with the largest `ΔM` still above epsilon
    /// because it was no longer `stall_threshold` below the iteration's baseline.
    pub stalled_sweeps: usize,
    pub degenerate_pairs: usize,
    pub clamped_components: usize,
}

/// One layout run over one graph. Matrices are built on creation and dropped with the session.
pub struct LayoutSession<'g, N> {
    graph: &'g mut Graph<N>,
    options: KamadaKawaiOptions,
    matrices: Matrices,
    positions: Vec<Point>,
}

impl<'g, N> LayoutSession<'g, N> {
    pub fn new(graph: &'g mut Graph<N>, options: &KamadaKawaiOptions) -> Result<Self> {
        if graph.is_empty() {
            return Err(Error::EmptyGraph);
        }
        options.validate()?;

        let matrices = Matrices::build(
            graph,
            options.spring_constant,
            options.canvas.reference_length(),
        )?;
        let positions = graph.positions();
        Ok(Self {
            graph,
            options: *options,
            matrices,
            positions,
        })
    }

    pub fn matrices(&self) -> &Matrices {
        &self.matrices
    }

    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    pub fn energy(&self) -> f64 {
        energy(&self.positions, &self.matrices)
    }

    fn max_delta_m(&self) -> (usize, f64) {
        let mut best = (0, delta_m(0, &self.positions, &self.matrices));
        for i in 1..self.positions.len() {
            let dm = delta_m(i, &self.positions, &self.matrices);
            if dm > best.1 {
                best = (i, dm);
            }
        }
        best
    }

    /// Runs the optimizer to completion and writes the final positions back into the graph.
    pub fn run(mut self) -> LayoutReport {
        let opts = self.options;
        let n = self.positions.len();
        let _span = tracing::debug_span!("kamada_kawai", vertices = n).entered();

        let initial_energy = self.energy();
        let mut epsilon = initial_energy / n as f64;
        let mut passes = 0usize;
        let mut epsilon_iterations = 0usize;
        let mut exhausted = false;
        let mut stalled_sweeps = 0usize;
        let mut degenerate_pairs = 0usize;
        let mut clamped_components = 0usize;

        let (mut worst, mut worst_dm) = self.max_delta_m();
        tracing::debug!(initial_energy, epsilon, worst, worst_dm, "layout start");

        while epsilon > opts.min_epsilon && !exhausted {
            epsilon_iterations += 1;
            let baseline = worst_dm + 1.0;

            while worst_dm > epsilon && baseline - worst_dm > opts.stall_threshold && !exhausted {
                let mut moving_dm = worst_dm;
                while moving_dm > epsilon && !exhausted {
                    let step = newton_step(worst, &self.positions, &self.matrices);
                    degenerate_pairs += step.degenerate_pairs;
                    clamped_components += step.clamped;

                    let p = &mut self.positions[worst];
                    p.x += step.dx;
                    p.y += step.dy;
                    moving_dm = delta_m(worst, &self.positions, &self.matrices);

                    passes += 1;
                    if passes > opts.max_passes {
                        exhausted = true;
                    }
                    tracing::trace!(passes, vertex = worst, delta_m = moving_dm, "newton step");
                }

                (worst, worst_dm) = self.max_delta_m();
            }

            if !exhausted && worst_dm > epsilon {
                stalled_sweeps += 1;
            }
            match shrink_epsilon(epsilon, opts.epsilon_decay) {
                Some(next) => epsilon = next,
                None => {
                    tracing::warn!(epsilon, "epsilon can no longer shrink, stopping early");
                    break;
                }
            }
        }

        let termination = if exhausted {
            Termination::PassLimitExceeded
        } else {
            Termination::Converged
        };
        let final_energy = self.energy();
        tracing::debug!(
            ?termination,
            passes,
            final_energy,
            final_epsilon = epsilon,
            epsilon_iterations,
            stalled_sweeps,
            "layout finished"
        );

        self.graph.set_positions(&self.positions);
        LayoutReport {
            termination,
            passes,
            initial_energy,
            final_energy,
            final_epsilon: epsilon,
            epsilon_iterations,
            stalled_sweeps,
            degenerate_pairs,
            clamped_components,
        }
    }
}

/// Removes `decay` of `epsilon`, or `None` when the result would not be strictly smaller.
fn shrink_epsilon(epsilon: f64, decay: f64) -> Option<f64> {
    let next = epsilon - epsilon * decay;
    (next < epsilon).then_some(next)
}

/// Builds a session for `graph` and runs it.
pub fn layout<N>(graph: &mut Graph<N>, options: &KamadaKawaiOptions) -> Result<LayoutReport> {
    Ok(LayoutSession::new(graph, options)?.run())
}
