// crates/linescrub-cli/src/cmd/mod.rs

pub mod clean;
pub mod line;
