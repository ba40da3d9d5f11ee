pub mod demo;
pub mod kpis;
pub mod series;
