//! Gap placement for obstacles

use rand::Rng;

/// Draw the top edge of a gap
///
/// The result lies in `[margin, viewport_height - margin - gap_height]`.
/// Exactly one value is drawn from `rng` even when that range is empty, in
/// which case the gap is pinned to `margin`.
pub fn generate_gap_top<R: Rng>(
    rng: &mut R,
    viewport_height: f32,
    gap_height: f32,
    margin: f32,
) -> f32 {
    let t: f32 = rng.random();
    let span = viewport_height - 2.0 * margin - gap_height;
    if span <= 0.0 {
        if span < 0.0 {
            log::warn!(
                "gap height {} leaves no room in viewport {}; pinning to margin",
                gap_height,
                viewport_height
            );
        }
        return margin;
    }
    (margin + t * span).min(margin + span)
}
