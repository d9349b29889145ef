pub mod pre_test;
pub mod scenario;
