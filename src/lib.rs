pub mod md_implementation;
