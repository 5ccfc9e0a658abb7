#[path = "utils/color.rs"]
mod color;
