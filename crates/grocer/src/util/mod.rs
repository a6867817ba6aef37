pub mod io;
pub mod styles;
