mod classification;
mod common;
mod intake;
mod recommendations;
mod schedule;
