//! UI components for the frax labs site.

mod app;
mod flagship;
mod footer;
mod project_card;
mod section;
mod sections;
mod sidebar;

pub use app::*;
pub use flagship::*;
pub use footer::*;
pub use project_card::*;
pub use section::*;
pub use sections::*;
pub use sidebar::*;
