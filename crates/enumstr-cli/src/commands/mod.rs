pub mod generate;
pub mod input_loader;
pub mod plan;

#[cfg(test)]
mod input_loader_tests;
