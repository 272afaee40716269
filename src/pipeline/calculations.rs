//! Pure calculation functions for output dimensions.
//!
//! Everything here is pure and testable without decoding a single pixel.

/// Calculate output dimensions for a decoded image bounded by `max_width`.
///
/// Images wider than `max_width` scale down to exactly `max_width`, with
/// height rounded to preserve the aspect ratio. Narrower (or equal) images
/// keep their decoded dimensions — there is no upscaling. A zero bound is
/// treated as 1.
///
/// # Arguments
/// * `decoded` - Dimensions as decoded from the source (width, height)
/// * `max_width` - Upper bound on output width in pixels
///
/// # Examples
/// ```
/// # use media_prep::pipeline::calculate_target_dimensions;
/// // 3000x2000 bounded to 1200 → 1200x800
/// assert_eq!(calculate_target_dimensions((3000, 2000), 1200), (1200, 800));
///
/// // Already narrow enough: unchanged
/// assert_eq!(calculate_target_dimensions((400, 300), 1200), (400, 300));
/// ```
pub fn calculate_target_dimensions(decoded: (u32, u32), max_width: u32) -> (u32, u32) {
    let max_width = max_width.max(1);
    let (width, height) = decoded;

    if width <= max_width {
        return (width, height);
    }

    let scaled = (height as f64 * max_width as f64 / width as f64).round() as u32;
    // An extreme aspect ratio can round the height to zero; a one-pixel row
    // is the smallest surface an encoder accepts.
    (max_width, scaled.max(1))
}
