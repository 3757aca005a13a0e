pub(crate) mod codec;
pub(crate) mod model;
pub(crate) mod share;
