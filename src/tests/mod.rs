mod teardown_tests;
mod component_tests;
