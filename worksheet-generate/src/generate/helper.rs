use rand::{
    Rng,
    RngCore,
    seq::SliceRandom,
};

/// Inclusive draw, `None` when the sub-range is empty.
pub fn gen_range_i32(rng: &mut dyn RngCore, min: i32, max: i32) -> Option<i32> {
    if min > max {
        return None;
    }
    Some(rng.gen_range(min..=max))
}

pub fn choose<'a, T>(rng: &mut dyn RngCore, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}
