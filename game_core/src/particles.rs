//! Cosmetic particles
//!
//! Plain records plus free functions. Nothing in the simulation reads them
//! back; they only exist for the renderer.

use glam::Vec2;
use rand::Rng;

use crate::{Color, GameRng, ParticleBurst};

const DRAG: f32 = 0.98;
const SHRINK: f32 = 0.99;

/// A particle for visual effects
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    pub life: f32, // 1.0 at spawn, expired at <= 0
    pub decay: f32,
    pub size: f32,
}

/// Turn a burst request into particles spread evenly around its origin.
///
/// The list is capped at `max_particles`; the oldest records go first.
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    burst: &ParticleBurst,
    rng: &mut GameRng,
    max_particles: usize,
) {
    for i in 0..burst.count {
        let angle = std::f32::consts::TAU * i as f32 / burst.count as f32;
        let speed = 3.0 + rng.0.gen::<f32>() * 4.0;
        particles.push(Particle {
            pos: burst.origin,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            color: burst.color,
            life: 1.0,
            decay: 0.02 + rng.0.gen::<f32>() * 0.03,
            size: 2.0 + rng.0.gen::<f32>() * 4.0,
        });
    }

    if particles.len() > max_particles {
        let excess = particles.len() - max_particles;
        particles.drain(..excess);
    }
}

pub fn is_expired(particle: &Particle) -> bool {
    particle.life <= 0.0
}

/// Advance every particle one tick and drop the expired ones
pub fn update_particles(particles: &mut Vec<Particle>) {
    for p in particles.iter_mut() {
        p.pos += p.vel;
        p.vel *= DRAG;
        p.life -= p.decay;
        p.size *= SHRINK;
    }
    particles.retain(|p| !is_expired(p));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burst(count: usize) -> ParticleBurst {
        ParticleBurst {
            origin: Vec2::new(100.0, 50.0),
            color: Color::Pink,
            count,
        }
    }

    #[test]
    fn test_burst_spawns_requested_count() {
        let mut particles = Vec::new();
        let mut rng = GameRng::new(1);
        spawn_burst(&mut particles, &burst(8), &mut rng, 256);

        assert_eq!(particles.len(), 8);
        for p in &particles {
            assert_eq!(p.pos, Vec2::new(100.0, 50.0));
            assert_eq!(p.color, Color::Pink);
            assert_eq!(p.life, 1.0);
            let speed = p.vel.length();
            assert!((2.99..7.01).contains(&speed), "speed {speed} out of range");
            assert!((0.02..0.05).contains(&p.decay));
            assert!((2.0..6.0).contains(&p.size));
        }
    }

    #[test]
    fn test_burst_respects_cap() {
        let mut particles = Vec::new();
        let mut rng = GameRng::new(1);
        spawn_burst(&mut particles, &burst(6), &mut rng, 10);
        let newest = burst(6);
        spawn_burst(
            &mut particles,
            &ParticleBurst {
                color: Color::Orange,
                ..newest
            },
            &mut rng,
            10,
        );

        assert_eq!(particles.len(), 10);
        // The six newest survive
        assert!(particles[4..].iter().all(|p| p.color == Color::Orange));
    }

    #[test]
    fn test_particles_expire() {
        let mut particles = Vec::new();
        let mut rng = GameRng::new(3);
        spawn_burst(&mut particles, &burst(4), &mut rng, 256);

        // Slowest decay is 0.02 per tick, so 50 ticks always suffice
        for _ in 0..50 {
            update_particles(&mut particles);
        }
        assert!(particles.is_empty());
    }

    #[test]
    fn test_update_moves_and_slows() {
        let mut particles = vec![Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(4.0, 0.0),
            color: Color::Blue,
            life: 1.0,
            decay: 0.1,
            size: 4.0,
        }];
        update_particles(&mut particles);

        let p = particles[0];
        assert_eq!(p.pos, Vec2::new(4.0, 0.0));
        assert!((p.vel.x - 3.92).abs() < 1e-5);
        assert!((p.life - 0.9).abs() < 1e-6);
        assert!((p.size - 3.96).abs() < 1e-5);
        assert!(!is_expired(&p));
    }
}
