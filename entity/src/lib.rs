pub mod prelude;

pub mod character;
