use crate::physics::chain::Chain;

pub trait Integrator {
    /// Advance the chain by one sub-step of length `dt`.
    fn step(&self, chain: &mut Chain, dt: f64);
}

/// Position-based step specialised to a linear chain.
///
/// Each sub-step runs three passes: unconstrained integration under gravity,
/// a single relaxation sweep over the rods in chain order, and velocity
/// reconstruction from the positional change. The sweep is not iterated to
/// convergence; accuracy comes from taking many small sub-steps.
#[derive(Debug, Clone, Copy)]
pub struct PositionBasedIntegrator {
    pub gravity: f64,
}

impl PositionBasedIntegrator {
    pub fn new(gravity: f64) -> Self {
        Self { gravity }
    }

    pub fn integrate_unconstrained(&self, chain: &mut Chain, dt: f64) {
        for body in chain.bodies.iter_mut().skip(1) {
            body.velocity.y += dt * self.gravity;
            body.previous_position = body.position;
            body.position = body.position.add_scaled(&body.velocity, dt);
        }
    }

    /// Adjacent bodies share the correction in proportion to inverse mass,
    /// so a pinned body is never displaced.
    pub fn project_constraints(&self, chain: &mut Chain) {
        for i in 1..chain.bodies.len() {
            let (head, tail) = chain.bodies.split_at_mut(i);
            let prev = &mut head[i - 1];
            let cur = &mut tail[0];

            let delta = cur.position - prev.position;
            let dist = delta.length();
            let w_prev = prev.inverse_mass();
            let w_cur = cur.inverse_mass();
            let correction = (cur.rest_length - dist) / (dist * (w_prev + w_cur));

            prev.position = prev.position.sub_scaled(&delta, w_prev * correction);
            cur.position = cur.position.add_scaled(&delta, w_cur * correction);
        }
    }

    pub fn reconstruct_velocities(&self, chain: &mut Chain, dt: f64) {
        for body in chain.bodies.iter_mut().skip(1) {
            body.velocity = (body.position - body.previous_position) / dt;
        }
    }
}

impl Integrator for PositionBasedIntegrator {
    fn step(&self, chain: &mut Chain, dt: f64) {
        self.integrate_unconstrained(chain, dt);
        self.project_constraints(chain);
        self.reconstruct_velocities(chain, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;
    use crate::physics::chain::Body;

    fn pendulum(angle: f64) -> Chain {
        let position = Vec2::new(angle.sin(), -angle.cos());
        Chain::new(vec![
            Body::pinned_at(Vec2::zero()),
            Body::movable(1.0, 1.0, position),
        ])
    }

    #[test]
    fn unconstrained_pass_applies_gravity_then_moves() {
        let integrator = PositionBasedIntegrator::new(-10.0);
        let mut chain = pendulum(0.3);
        let start = chain.bodies[1].position;

        integrator.integrate_unconstrained(&mut chain, 0.1);

        let bead = &chain.bodies[1];
        assert_eq!(bead.previous_position, start);
        assert!((bead.velocity.y + 1.0).abs() < 1e-12);
        assert!((bead.position.y - (start.y - 0.1)).abs() < 1e-12);
        assert_eq!(bead.position.x, start.x);
        assert_eq!(chain.bodies[0].position, Vec2::zero());
    }

    #[test]
    fn single_rod_projection_is_exact() {
        let integrator = PositionBasedIntegrator::new(-10.0);
        let mut chain = pendulum(1.1);
        chain.bodies[1].position = Vec2::new(0.7, -1.9);

        integrator.project_constraints(&mut chain);

        let dist = (chain.bodies[1].position - chain.bodies[0].position).length();
        assert!((dist - 1.0).abs() < 1e-12);
        assert_eq!(chain.bodies[0].position, Vec2::zero());
    }

    #[test]
    fn projection_splits_correction_by_inverse_mass() {
        let integrator = PositionBasedIntegrator::new(0.0);
        let mut chain = Chain::new(vec![
            Body::movable(1.0, 0.0, Vec2::new(0.0, 0.0)),
            Body::movable(3.0, 1.0, Vec2::new(2.0, 0.0)),
        ]);

        integrator.project_constraints(&mut chain);

        // Light body takes three quarters of the one unit of overshoot.
        assert!((chain.bodies[0].position.x - 0.75).abs() < 1e-12);
        assert!((chain.bodies[1].position.x - 1.75).abs() < 1e-12);
    }

    #[test]
    fn velocity_follows_positional_change() {
        let integrator = PositionBasedIntegrator::new(-10.0);
        let mut chain = pendulum(0.0);
        chain.bodies[1].previous_position = Vec2::new(0.0, -1.0);
        chain.bodies[1].position = Vec2::new(0.02, -1.0);

        integrator.reconstruct_velocities(&mut chain, 0.01);

        assert!((chain.bodies[1].velocity.x - 2.0).abs() < 1e-12);
        assert_eq!(chain.bodies[1].velocity.y, 0.0);
    }

    #[test]
    fn bead_hanging_at_rest_stays_at_rest() {
        let integrator = PositionBasedIntegrator::new(-10.0);
        let mut chain = pendulum(0.0);

        for _ in 0..1000 {
            integrator.step(&mut chain, 1e-3);
        }

        let bead = &chain.bodies[1];
        assert!(bead.position.x.abs() < 1e-12);
        assert!((bead.position.y + 1.0).abs() < 1e-9);
        assert!(bead.velocity.length() < 1e-6);
    }

    #[test]
    fn step_keeps_rod_length_for_single_bead() {
        let integrator = PositionBasedIntegrator::new(-10.0);
        let mut chain = pendulum(std::f64::consts::FRAC_PI_2);

        for _ in 0..5000 {
            integrator.step(&mut chain, 1e-4);
            assert!(chain.max_constraint_error() < 1e-12);
        }
        assert!(chain.bodies[1].position.y < 0.0);
    }
}
