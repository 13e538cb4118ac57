pub mod error;
pub mod loading;
pub mod selection_action_bar;
pub mod skeleton;
pub mod slot_calendar;
pub mod status_badge;
pub mod success_view;

// Re-export commonly used types
pub use error::ErrorView;
pub use loading::LoadingView;
pub use selection_action_bar::SelectionActionBar;
pub use skeleton::SkeletonLoader;
pub use slot_calendar::{CalendarLegend, SlotCalendar};
pub use status_badge::StatusBadge;
pub use success_view::SuccessView;
