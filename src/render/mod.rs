pub(crate) mod format;
pub(crate) mod raster;
pub(crate) mod svg;
