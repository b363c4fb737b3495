pub mod imports;
pub mod theme;
