//! Widgets composing the slot machine screen.
pub mod confetti;
pub mod controls;
pub mod header;
pub mod messages;
pub mod reels;
pub mod tally;
