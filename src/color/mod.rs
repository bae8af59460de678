pub(crate) mod blend;
pub(crate) mod convert;
pub(crate) mod literal;
pub(crate) mod texture;
