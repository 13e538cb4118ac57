pub mod legend;
pub mod slot_calendar;

pub use legend::CalendarLegend;
pub use slot_calendar::SlotCalendar;
