pub(crate) mod animator;
pub(crate) mod geometry;
