use crate::particles::{spawn_burst, update_particles};
use crate::{EffectTimers, GameState, Params};

/// Count every non-zero effect timer down by one
pub fn decay_effects(effects: &mut EffectTimers) {
    effects.decay();
}

/// Turn this tick's burst requests into particles, age all particles and
/// decay the effect timers
pub fn update_effects(state: &mut GameState) {
    for burst in &state.events.bursts {
        spawn_burst(
            &mut state.particles,
            burst,
            &mut state.rng,
            Params::MAX_PARTICLES,
        );
    }
    update_particles(&mut state.particles);
    decay_effects(&mut state.effects);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Config, ParticleBurst};
    use glam::Vec2;

    #[test]
    fn test_bursts_become_particles() {
        let mut state = GameState::new(Config::new(), 4).unwrap();
        state.events.bursts.push(ParticleBurst {
            origin: Vec2::new(10.0, 10.0),
            color: Color::Blue,
            count: 8,
        });

        update_effects(&mut state);

        assert_eq!(state.particles.len(), 8);
        assert!(state.particles.iter().all(|p| p.life < 1.0));
    }

    #[test]
    fn test_timers_decay_once_per_update() {
        let mut state = GameState::new(Config::new(), 4).unwrap();
        state.effects.paddle_glow = 3;
        state.effects.screen_shake = 1;

        update_effects(&mut state);

        assert_eq!(state.effects.paddle_glow, 2);
        assert_eq!(state.effects.screen_shake, 0);
        assert_eq!(state.effects.ball_glow, 0);
    }
}
