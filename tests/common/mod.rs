mod assertions;
mod helpers;
mod test_app;

// Re-export
pub use assertions::{assert_gear_settled, assert_no_engine_groups, assert_skin_applied};
pub use helpers::*;
pub use test_app::{TestApp, TestAppBuilder};
