pub(crate) mod color;
pub(crate) mod edit;
pub(crate) mod extend;
