/// logger initialization: terminal plus timestamped file output
pub mod logger;
/// curve rendering through the plotters and gnuplot backends
pub mod plots;
/// text rendering of value tables
pub mod tables;
