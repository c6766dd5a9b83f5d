mod classifier_tests;
mod resolver_tests;
