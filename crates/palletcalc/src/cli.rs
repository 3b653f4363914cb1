pub mod calc;
pub mod params;
pub mod serve;
