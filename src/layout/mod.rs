pub(crate) mod cells;
pub(crate) mod grid;
