//! Arithmetic on the circular road.

/// Cells between consecutive items when spreading `count` of them over a
/// road of `road_length` cells.  1 when the road is not longer than `count`.
#[inline]
pub fn even_spacing(count: usize, road_length: u32) -> u64 {
    let road = road_length as u64;
    let count = count as u64;
    if count > 0 && road > count { road / count } else { 1 }
}

/// The cell reached by moving `step` cells forward from `position`.
///
/// Always in `[0, road_length)`.  `road_length` must be non-zero; config
/// validation guarantees it.
#[inline]
pub fn advance(position: u32, step: u32, road_length: u32) -> u32 {
    ((position as u64 + step as u64) % road_length as u64) as u32
}
