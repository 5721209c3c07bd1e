//! Damped spring filter.
//!
//! A spring chases its target continuously: each `step(dt)` integrates
//! `a = (-k (x - target) - c v) / m` with semi-implicit Euler, sub-stepped so
//! frame hitches do not destabilize stiff configurations.

use serde::{Deserialize, Serialize};

/// Largest single integration step, in seconds.
const MAX_SUBSTEP: f32 = 1.0 / 120.0;
const MIN_MASS: f32 = 1.0e-4;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 150.0,
            damping: 25.0,
            mass: 1.0,
        }
    }
}

impl SpringConfig {
    fn sanitized(self) -> Self {
        let stiffness = if self.stiffness.is_finite() {
            self.stiffness.max(0.0)
        } else {
            0.0
        };
        let damping = if self.damping.is_finite() {
            self.damping.max(0.0)
        } else {
            0.0
        };
        let mass = if self.mass.is_finite() {
            self.mass.max(MIN_MASS)
        } else {
            1.0
        };
        Self {
            stiffness,
            damping,
            mass,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    cfg: SpringConfig,
    position: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Spring at rest on `initial`.
    pub fn new(cfg: SpringConfig, initial: f32) -> Self {
        Self {
            cfg: cfg.sanitized(),
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget without disturbing position or velocity. Non-finite targets are ignored.
    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Snap to `value` and stop.
    pub fn jump(&mut self, value: f32) {
        if value.is_finite() {
            self.position = value;
            self.target = value;
            self.velocity = 0.0;
        }
    }

    /// Advance by `dt` seconds and return the new position.
    pub fn step(&mut self, dt: f32) -> f32 {
        if !dt.is_finite() || dt <= 0.0 {
            return self.position;
        }
        let inv_mass = 1.0 / self.cfg.mass;
        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let displacement = self.position - self.target;
            let spring_force = -self.cfg.stiffness * displacement;
            let damping_force = -self.cfg.damping * self.velocity;
            let acceleration = (spring_force + damping_force) * inv_mass;
            self.velocity += acceleration * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        self.position
    }

    pub fn is_settled(&self, eps: f32) -> bool {
        (self.position - self.target).abs() <= eps && self.velocity.abs() <= eps
    }
}
