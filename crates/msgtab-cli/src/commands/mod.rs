pub mod catalog_loader;
pub mod check;
pub mod dump;
pub mod generate;

#[cfg(test)]
mod catalog_loader_tests;
