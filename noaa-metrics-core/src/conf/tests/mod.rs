mod loader_tests;
mod settings_tests;
