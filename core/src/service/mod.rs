pub mod accumulator;
pub mod price_service;

mod accumulator_test;
