//! Testimonials reel.

/// Card sequence for the infinitely scrolling testimonials track.
///
/// The cards are followed by a copy of themselves so the track can scroll by
/// half its width and wrap without a visible seam.
pub fn seamless_reel<T: Clone>(cards: &[T]) -> Vec<T> {
    let mut reel = Vec::with_capacity(cards.len() * 2);
    reel.extend_from_slice(cards);
    reel.extend_from_slice(cards);
    reel
}
