//! Message handlers, one module per wizard screen.

mod genre;
mod information;
mod new_subgenre;
mod subgenre;
