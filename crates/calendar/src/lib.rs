//! # nvr-calendar
//!
//! Pure Gregorian date arithmetic and month-grid layout for the archive
//! calendar view.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Date (y, m, d)"] -->|".weekday()"| W["Weekday"]
//!     A -->|".year_month()"| B["YearMonth"]
//!     B -->|".prev() / .next()"| B
//!     B -->|"days_in_month()"| C["28..=31"]
//!     B -->|"first_weekday()"| W
//!     B -->|"MonthGrid::build()"| G["MonthGrid cells"]
//!     S["recording dates"] --> G
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use std::collections::BTreeSet;
//! use nvr_calendar::{Date, MonthGrid, Weekday, YearMonth, days_in_month, first_weekday};
//!
//! assert_eq!(days_in_month(2024, 2).unwrap(), 29);
//! assert_eq!(first_weekday(2024, 1).unwrap(), Weekday::Monday);
//!
//! let month = YearMonth::new(2023, 12).unwrap();
//! assert_eq!(month.next(), YearMonth::new(2024, 1).unwrap());
//!
//! let dates: BTreeSet<Date> = [Date::new(2023, 12, 24).unwrap()].into();
//! let grid = MonthGrid::build(month, &dates, None);
//! assert_eq!(grid.day_cells().filter(|c| c.selectable()).count(), 1);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Gregorian date over `chrono::NaiveDate`, day stepping, parsing |
//! | `month` | Leap years, month lengths, month navigation |
//! | `weekday` | Sunday-first weekday |
//! | `grid` | Month grid cells and classification |
//! | `error` | Error types |

mod date;
mod error;
mod grid;
mod month;
mod weekday;

pub use date::Date;
pub use error::CalendarError;
pub use grid::{Cell, GRID_COLUMNS, MonthGrid, has_recordings, is_selected};
pub use month::{YearMonth, days_in_month, first_weekday, is_leap_year};
pub use weekday::Weekday;
