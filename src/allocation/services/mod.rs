//! Application services for the task detail read path.

mod error;
mod resolver;
mod session;
mod task_detail;

pub use error::{BACKEND_ERROR_TITLE, NOT_FOUND_TITLE, TaskDetailError, TaskDetailResult};
pub use resolver::{ResolvedTask, ResourceResolver};
pub use session::{NavigationTicket, TaskDetailSession, ViewState};
pub use task_detail::TaskDetailService;
