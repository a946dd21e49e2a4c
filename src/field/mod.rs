pub(crate) mod clouds;
pub(crate) mod craters;
pub(crate) mod element;
pub(crate) mod shooting;
pub(crate) mod starfield;
pub(crate) mod stars;
