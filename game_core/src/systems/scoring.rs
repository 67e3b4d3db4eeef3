use glam::Vec2;

use crate::{GameState, ParticleBurst, Params, ScoreEvent, Side};

/// Check if the ball left the field past a goal line.
///
/// The side that did not concede gets exactly one point, the ball is served
/// again toward the side that conceded and a burst marks the goal line.
pub fn resolve_scoring(state: &mut GameState) -> Option<ScoreEvent> {
    let radius = state.config.ball_radius;
    let ball = state.ball.pos;

    let (scorer, goal_x) = if ball.x - radius < 0.0 {
        (Side::Ai, 0.0)
    } else if ball.x + radius > state.config.field_width {
        (Side::Player, state.config.field_width)
    } else {
        return None;
    };

    state.paddle_mut(scorer).score += 1;

    let event = ScoreEvent {
        player_score: state.player.score,
        ai_score: state.ai.score,
        scorer,
    };
    state.events.scored = Some(event);
    state.events.bursts.push(ParticleBurst {
        origin: Vec2::new(goal_x, ball.y),
        color: scorer.color(),
        count: Params::GOAL_BURST,
    });

    // Serve away from the scorer
    state.reset_ball(scorer.away() as i8);

    log::debug!(
        "{:?} scored: {} - {}",
        scorer,
        event.player_score,
        event.ai_score
    );
    Some(event)
}
