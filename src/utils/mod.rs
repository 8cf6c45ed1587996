#[macro_use]
mod macros;

pub(in crate)
mod prelude;

pub(in crate) use self::cell_option::CellOption;
mod cell_option;
