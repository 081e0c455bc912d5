//! Month grid layout: leading blanks, then one cell per day, seven columns.

use std::collections::BTreeSet;

use crate::date::Date;
use crate::month::YearMonth;
use crate::weekday::Weekday;

/// Number of columns in the month grid (one per weekday).
pub const GRID_COLUMNS: usize = 7;

/// Returns `true` if `date` appears in the recording-date set.
///
/// Dates carry no time-of-day, so set membership is exactly the
/// year/month/day comparison.
pub fn has_recordings(date: Date, dates_with_recordings: &BTreeSet<Date>) -> bool {
    dates_with_recordings.contains(&date)
}

/// Returns `true` if `selected` is set and falls on the same day as `date`.
pub fn is_selected(date: Date, selected: Option<Date>) -> bool {
    selected == Some(date)
}

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    /// Padding before the first day of the month.
    Empty,
    /// A day of the displayed month.
    Day {
        date: Date,
        has_recordings: bool,
        selected: bool,
    },
}

impl Cell {
    /// Returns the date of a day cell.
    pub fn date(&self) -> Option<Date> {
        match self {
            Cell::Empty => None,
            Cell::Day { date, .. } => Some(*date),
        }
    }

    /// Only days with recordings accept a click.
    pub fn selectable(&self) -> bool {
        matches!(
            self,
            Cell::Day {
                has_recordings: true,
                ..
            }
        )
    }
}

/// A fully classified month grid.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use nvr_calendar::{Date, MonthGrid, YearMonth};
///
/// let month = YearMonth::new(2024, 2).unwrap();
/// let mut dates = BTreeSet::new();
/// dates.insert(Date::new(2024, 2, 14).unwrap());
///
/// let grid = MonthGrid::build(month, &dates, None);
/// assert_eq!(grid.leading_blanks(), 4); // 1 Feb 2024 was a Thursday
/// assert_eq!(grid.day_cells().count(), 29);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MonthGrid {
    month: YearMonth,
    cells: Vec<Cell>,
}

impl MonthGrid {
    /// Lays out `month` and classifies each day against the recording-date
    /// set and the current selection.
    pub fn build(
        month: YearMonth,
        dates_with_recordings: &BTreeSet<Date>,
        selected: Option<Date>,
    ) -> Self {
        let blanks = month.first_weekday().index() as usize;
        let n_days = month.days_in_month();
        let mut cells = Vec::with_capacity(blanks + n_days as usize);
        cells.extend(std::iter::repeat_n(Cell::Empty, blanks));

        for date in month.days() {
            cells.push(Cell::Day {
                date,
                has_recordings: has_recordings(date, dates_with_recordings),
                selected: is_selected(date, selected),
            });
        }
        Self { month, cells }
    }

    /// The displayed month.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// All cells in left-to-right, top-to-bottom order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of empty cells before day 1.
    pub fn leading_blanks(&self) -> usize {
        self.cells
            .iter()
            .take_while(|c| matches!(c, Cell::Empty))
            .count()
    }

    /// Iterates over the day cells only.
    pub fn day_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.date().is_some())
    }

    /// The cell for `date`, if it falls in the displayed month.
    pub fn cell_for(&self, date: Date) -> Option<&Cell> {
        if !self.month.contains(date) {
            return None;
        }
        self.cells.get(self.leading_blanks() + date.day() as usize - 1)
    }

    /// Cells grouped into rows of seven. The last row may be short.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(GRID_COLUMNS)
    }

    /// Column headers, Sunday first.
    pub fn header() -> [&'static str; GRID_COLUMNS] {
        Weekday::ALL.map(Weekday::short_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(dates: &[(i32, u8, u8)]) -> BTreeSet<Date> {
        dates
            .iter()
            .map(|&(y, m, d)| Date::new(y, m, d).unwrap())
            .collect()
    }

    #[test]
    fn october_2026_layout() {
        let month = YearMonth::new(2026, 10).unwrap();
        let grid = MonthGrid::build(month, &BTreeSet::new(), None);
        assert_eq!(grid.leading_blanks(), 4);
        assert_eq!(grid.cells().len(), 4 + 31);
        assert_eq!(grid.rows().count(), 5);
    }

    #[test]
    fn classification() {
        let month = YearMonth::new(2026, 10).unwrap();
        let dates = set(&[(2026, 10, 18), (2026, 10, 17), (2026, 9, 30)]);
        let selected = Some(Date::new(2026, 10, 18).unwrap());
        let grid = MonthGrid::build(month, &dates, selected);

        let c18 = grid.cell_for(Date::new(2026, 10, 18).unwrap()).unwrap();
        assert_eq!(
            *c18,
            Cell::Day {
                date: Date::new(2026, 10, 18).unwrap(),
                has_recordings: true,
                selected: true,
            }
        );
        assert!(c18.selectable());

        let c17 = grid.cell_for(Date::new(2026, 10, 17).unwrap()).unwrap();
        assert!(c17.selectable());
        assert!(matches!(c17, Cell::Day { selected: false, .. }));

        let c1 = grid.cell_for(Date::new(2026, 10, 1).unwrap()).unwrap();
        assert!(!c1.selectable());

        let selectable = grid.day_cells().filter(|c| c.selectable()).count();
        assert_eq!(selectable, 2);
    }

    #[test]
    fn cell_for_other_month_is_none() {
        let month = YearMonth::new(2026, 10).unwrap();
        let grid = MonthGrid::build(month, &BTreeSet::new(), None);
        assert!(grid.cell_for(Date::new(2026, 9, 30).unwrap()).is_none());
    }

    #[test]
    fn empty_cell_not_selectable() {
        assert!(!Cell::Empty.selectable());
        assert_eq!(Cell::Empty.date(), None);
    }

    #[test]
    fn header_sunday_first() {
        assert_eq!(
            MonthGrid::header(),
            ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        );
    }

    #[test]
    fn is_selected_none() {
        let d = Date::new(2024, 1, 1).unwrap();
        assert!(!is_selected(d, None));
        assert!(is_selected(d, Some(d)));
        assert!(!is_selected(d, Some(d.succ().unwrap())));
    }
}
