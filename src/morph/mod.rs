pub(crate) mod region;
pub(crate) mod scroll;
pub(crate) mod shape;
