pub(crate) mod clamp;
pub(crate) mod range;
