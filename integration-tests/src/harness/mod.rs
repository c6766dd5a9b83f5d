mod mailer;
pub mod tracing;
mod workspace;

pub use mailer::RecordingMailer;
pub use tracing::{CapturedEvent, init_test_tracing};
pub use workspace::{TestWorkspace, day, log_line};
