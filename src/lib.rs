pub mod scripts;
pub mod submodules;
