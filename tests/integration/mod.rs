mod config_tests;
mod engine_tests;
mod gear_tests;
mod lighting_tests;
mod livery_tests;
mod plugin_tests;
mod scenario_tests;
