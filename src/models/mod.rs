pub mod charge_code;
pub mod daily;
pub mod time_entry;
pub mod weekly;

pub use charge_code::ChargeCode;
pub use daily::DailyEntries;
pub use time_entry::TimeEntry;
pub use weekly::WeeklySummary;
