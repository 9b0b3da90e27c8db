//! Falling confetti overlay drawn on top of the whole frame.

use std::time::Duration;

use ratatui::{Frame, layout::Rect, style::Style};
use slot_core::ConfettiParticle;

use crate::presentation::theme::RatatuiTheme;

/// Time a particle takes to fall from the top edge to the bottom edge.
pub const FALL: Duration = Duration::from_millis(2500);

/// Total animation length: the longest delay plus one fall.
pub const ANIMATION: Duration = Duration::from_millis(3000);

const GLYPH: &str = "●";

pub fn render(
    frame: &mut Frame,
    area: Rect,
    particles: &[ConfettiParticle],
    elapsed: Duration,
    theme: &RatatuiTheme,
) {
    let buffer = frame.buffer_mut();
    for particle in particles {
        if let Some((x, y)) = position(particle, elapsed, area) {
            buffer.set_string(x, y, GLYPH, Style::default().fg(theme.confetti(particle.color)));
        }
    }
}

/// Cell of `particle` after `elapsed`, or `None` before its delay or after
/// it left the area.
pub fn position(particle: &ConfettiParticle, elapsed: Duration, area: Rect) -> Option<(u16, u16)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }

    let falling = elapsed.as_secs_f32() - particle.delay;
    if falling < 0.0 {
        return None;
    }
    let progress = falling / FALL.as_secs_f32();
    if progress >= 1.0 {
        return None;
    }

    let column = (particle.left / 100.0 * f32::from(area.width)) as u16;
    let row = (progress * f32::from(area.height)) as u16;
    Some((
        area.x + column.min(area.width - 1),
        area.y + row.min(area.height - 1),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use slot_core::ConfettiColor;

    fn particle(left: f32, delay: f32) -> ConfettiParticle {
        ConfettiParticle {
            id: 0,
            left,
            color: ConfettiColor::Green,
            delay,
        }
    }

    #[test]
    fn waits_for_delay_then_falls() {
        let area = Rect::new(0, 0, 100, 40);
        let piece = particle(50.0, 0.5);

        assert_eq!(position(&piece, Duration::from_millis(200), area), None);
        assert_eq!(position(&piece, Duration::from_millis(500), area), Some((50, 0)));

        // Halfway through the fall.
        let (_, y) = position(&piece, Duration::from_millis(1750), area).unwrap();
        assert_eq!(y, 20);
    }

    #[test]
    fn leaves_the_area_after_one_fall() {
        let area = Rect::new(0, 0, 80, 24);
        let piece = particle(10.0, 0.0);
        assert_eq!(position(&piece, FALL, area), None);
    }

    #[test]
    fn stays_inside_narrow_areas() {
        let area = Rect::new(5, 2, 3, 3);
        let (x, y) = position(&particle(99.9, 0.0), Duration::ZERO, area).unwrap();
        assert!((5..8).contains(&x));
        assert_eq!(y, 2);
    }

    #[test]
    fn animation_covers_the_latest_particle() {
        let latest = slot_core::SlotConfig::CONFETTI_MAX_DELAY;
        assert!(ANIMATION.as_secs_f32() >= latest + FALL.as_secs_f32());
    }
}
