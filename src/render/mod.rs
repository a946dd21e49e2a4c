pub(crate) mod build;
pub(crate) mod pipeline;
pub(crate) mod raster;
pub(crate) mod scene;
pub(crate) mod svg;
