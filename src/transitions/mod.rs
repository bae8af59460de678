pub(crate) mod blend;
pub(crate) mod curl;
pub(crate) mod fragment;
pub(crate) mod mask;
pub(crate) mod noise;
pub(crate) mod perspective;
pub(crate) mod registry;
pub(crate) mod warp;
