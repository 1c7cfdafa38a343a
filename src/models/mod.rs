pub mod daily_record;
pub mod event;
pub mod event_type;
pub mod period_summary;
pub mod shift;

pub use daily_record::{DailyRecord, NO_CLOCK_OUT};
pub use event::RawEvent;
pub use event_type::EventType;
pub use period_summary::PeriodSummary;
pub use shift::{ShiftConfig, ShiftKind, ShiftWindow};
