//! Collision detection and response for the integer play-field
//!
//! Paddle hits are tested against a single pixel column per side rather
//! than a range. A ball whose horizontal speed carries it past that column
//! without landing on it is not deflected.

use super::rng::RandomSource;
use super::state::{Coord, Direction, Side};
use crate::consts::*;

/// Ball x at which the player paddle deflects it
pub const PLAYER_HIT_COLUMN: i32 = (PADDLE_INSET + PADDLE_FACE) & !1;

/// Ball x at which the opponent paddle deflects it
pub const OPPONENT_HIT_COLUMN: i32 = (FIELD_WIDTH - PADDLE_INSET - PADDLE_FACE - BALL_SIZE) & !1;

/// Lowest ball y that still counts as inside the field
pub const WALL_BOTTOM: i32 = FIELD_HEIGHT - BALL_SIZE;

/// Ball x at or beyond which the player scores
pub const GOAL_RIGHT: i32 = FIELD_WIDTH - BALL_SIZE;

/// Hit column for the paddle on `side`
#[inline]
pub const fn hit_column(side: Side) -> i32 {
    match side {
        Side::Player => PLAYER_HIT_COLUMN,
        Side::Opponent => OPPONENT_HIT_COLUMN,
    }
}

/// Whether the ball touches (or has passed) the top or bottom wall
#[inline]
pub fn ball_wall_collision(ball_pos: Coord) -> bool {
    ball_pos.y <= 0 || ball_pos.y >= WALL_BOTTOM
}

/// Whether the ball sits on `side`'s hit column within the paddle's span
#[inline]
pub fn ball_paddle_collision(ball_pos: Coord, paddle_pos: Coord, side: Side) -> bool {
    ball_pos.x == hit_column(side)
        && ball_pos.y >= paddle_pos.y
        && ball_pos.y <= paddle_pos.y + PADDLE_SIZE
}

/// Side that scores when the ball is at `ball_pos`, if any
#[inline]
pub fn ball_goal(ball_pos: Coord) -> Option<Side> {
    if ball_pos.x <= 0 {
        Some(Side::Opponent)
    } else if ball_pos.x >= GOAL_RIGHT {
        Some(Side::Player)
    } else {
        None
    }
}

/// Bounce off a wall: vertical component flips, magnitude unchanged
#[inline]
pub fn reflect_off_wall(vel: Coord) -> Coord {
    Coord::new(vel.x, -vel.y)
}

/// Bounce off a paddle.
///
/// Horizontal velocity flips, then the vertical component takes a random
/// nudge of -1, 0 or +1, then the paddle's recorded direction applies:
/// `Up` subtracts two, `Down` adds two, `None` mirrors it.
pub fn reflect_off_paddle(vel: Coord, direction: Direction, rng: &mut impl RandomSource) -> Coord {
    let mut vel = Coord::new(-vel.x, vel.y);
    vel.y += rng.below(3) as i32 - 1;

    match direction {
        Direction::Up => vel.y -= 2,
        Direction::Down => vel.y += 2,
        Direction::None => vel.y = -vel.y,
    }

    vel
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SequenceRandom;

    #[test]
    fn test_hit_columns() {
        assert_eq!(PLAYER_HIT_COLUMN, 20);
        assert_eq!(OPPONENT_HIT_COLUMN, 226);
    }

    #[test]
    fn test_wall_collision_edges() {
        assert!(ball_wall_collision(Coord::new(100, 0)));
        assert!(ball_wall_collision(Coord::new(100, -3)));
        assert!(!ball_wall_collision(Coord::new(100, 1)));
        assert!(!ball_wall_collision(Coord::new(100, 183)));
        assert!(ball_wall_collision(Coord::new(100, 184)));
    }

    #[test]
    fn test_reflect_off_wall_twice_restores() {
        let vel = Coord::new(2, -3);
        let once = reflect_off_wall(vel);
        assert_eq!(once, Coord::new(2, 3));
        assert_eq!(reflect_off_wall(once), vel);
    }

    #[test]
    fn test_paddle_collision_requires_exact_column() {
        let paddle = Coord::new(0, 80);
        assert!(ball_paddle_collision(Coord::new(20, 80), paddle, Side::Player));
        assert!(ball_paddle_collision(Coord::new(20, 112), paddle, Side::Player));
        assert!(!ball_paddle_collision(Coord::new(19, 90), paddle, Side::Player));
        assert!(!ball_paddle_collision(Coord::new(21, 90), paddle, Side::Player));
        assert!(!ball_paddle_collision(Coord::new(20, 113), paddle, Side::Player));
        assert!(!ball_paddle_collision(Coord::new(20, 90), paddle, Side::Opponent));
    }

    #[test]
    fn test_goal_sides() {
        assert_eq!(ball_goal(Coord::new(0, 50)), Some(Side::Opponent));
        assert_eq!(ball_goal(Coord::new(-2, 50)), Some(Side::Opponent));
        assert_eq!(ball_goal(Coord::new(248, 50)), Some(Side::Player));
        assert_eq!(ball_goal(Coord::new(1, 50)), None);
        assert_eq!(ball_goal(Coord::new(247, 50)), None);
    }

    #[test]
    fn test_paddle_response_table() {
        // Draw of 1 means no random nudge.
        let vel = Coord::new(-2, 2);

        let up = reflect_off_paddle(vel, Direction::Up, &mut SequenceRandom::new([1]));
        assert_eq!(up, Coord::new(2, 0));

        let down = reflect_off_paddle(vel, Direction::Down, &mut SequenceRandom::new([1]));
        assert_eq!(down, Coord::new(2, 4));

        let none = reflect_off_paddle(vel, Direction::None, &mut SequenceRandom::new([1]));
        assert_eq!(none, Coord::new(2, -2));
    }

    #[test]
    fn test_paddle_nudge_applies_before_direction() {
        // Nudge -1 then mirror: -(2 - 1) = -1
        let mut rng = SequenceRandom::new([0]);
        let none = reflect_off_paddle(Coord::new(2, 2), Direction::None, &mut rng);
        assert_eq!(none, Coord::new(-2, -1));

        // Nudge +1 then mirror: -(2 + 1) = -3
        let mut rng = SequenceRandom::new([2]);
        let none = reflect_off_paddle(Coord::new(2, 2), Direction::None, &mut rng);
        assert_eq!(none, Coord::new(-2, -3));
    }
}
