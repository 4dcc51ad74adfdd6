mod fixtures;

mod error_handling_test;
mod ordering_test;
mod passage_test;
mod sampler_test;
