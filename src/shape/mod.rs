pub(crate) mod curve;
pub(crate) mod params;
pub(crate) mod query;
pub(crate) mod sampler;
