use crate::*;
pub use random::*;

mod random;

/// Host-provided source of shape draws. Draws are independent and uniform over
/// the catalog, with replacement, so the same shape may repeat within a hand.
pub trait ShapeSource {
    fn draw(&mut self) -> ShapeId;

    /// Draws a full hand of [`HAND_SIZE`] shapes.
    fn draw_hand(&mut self) -> Hand {
        core::array::from_fn(|_| Some(self.draw()))
    }
}
