//! Monthly event calendar
//!
//! The grid is rebuilt from scratch for the month containing `today`; no
//! state survives between builds.

use std::fmt::Write as _;

use chrono::{Datelike, Days, NaiveDate};

use crate::config::{CalendarLabels, EventTable};

/// Styles shipped alongside the generated grid
pub const CALENDAR_CSS: &str = r#"
.calendar-header { margin-bottom: 1rem; text-align: center; }
.calendar-header h4 { font-size: 1.2rem; color: var(--primary-color); }
.calendar-weekdays { display: grid; grid-template-columns: repeat(7, 1fr); margin-bottom: 0.5rem; text-align: center; font-weight: bold; }
.calendar-weekdays div:first-child { color: #e74c3c; }
.calendar-weekdays div:last-child { color: #3498db; }
.calendar-days { display: grid; grid-template-columns: repeat(7, 1fr); grid-gap: 5px; }
.calendar-day { position: relative; min-height: 50px; padding: 5px; border-radius: 5px; background-color: #f5f5f5; }
.calendar-day.empty { background-color: transparent; }
.calendar-day.today { background-color: #e8f4fd; border: 1px solid #3498db; }
.calendar-day.has-event { background-color: #fef2e7; }
.day-number { position: absolute; top: 5px; left: 5px; font-weight: bold; }
.event-marker { position: absolute; bottom: 5px; left: 0; right: 0; font-size: 0.7rem; text-align: center; color: var(--accent-color); font-weight: 500; padding: 2px; }
"#;

/// One cell of the day grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarCell {
    /// Padding before the first day of the month
    Blank,
    Day {
        day: u32,
        today: bool,
        event: Option<String>,
    },
}

impl CalendarCell {
    pub fn is_today(&self) -> bool {
        matches!(self, CalendarCell::Day { today: true, .. })
    }

    pub fn event(&self) -> Option<&str> {
        match self {
            CalendarCell::Day { event, .. } => event.as_deref(),
            CalendarCell::Blank => None,
        }
    }
}

/// Day grid for a single month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year: i32,
    /// Zero-based month index
    pub month0: u32,
    /// Weekday of the 1st, 0 = Sunday
    pub first_weekday: u32,
    pub day_count: u32,
    pub cells: Vec<CalendarCell>,
}

impl CalendarMonth {
    /// Build the grid for the month containing `today`
    pub fn for_date(today: NaiveDate, events: &EventTable) -> Self {
        let first = today - Days::new(u64::from(today.day0()));
        let first_weekday = first.weekday().num_days_from_sunday();
        let day_count = days_in_month(today.year(), today.month());

        let mut cells = Vec::with_capacity((first_weekday + day_count) as usize);
        cells.extend((0..first_weekday).map(|_| CalendarCell::Blank));
        cells.extend((1..=day_count).map(|day| CalendarCell::Day {
            day,
            today: day == today.day(),
            event: events.get(&day).cloned(),
        }));

        Self {
            year: today.year(),
            month0: today.month0(),
            first_weekday,
            day_count,
            cells,
        }
    }

    pub fn blank_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, CalendarCell::Blank))
            .count()
    }

    pub fn day_cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.cells
            .iter()
            .filter(|c| matches!(c, CalendarCell::Day { .. }))
    }

    /// Cell for a 1-based day of month
    pub fn day(&self, day: u32) -> Option<&CalendarCell> {
        self.day_cells()
            .find(|c| matches!(c, CalendarCell::Day { day: d, .. } if *d == day))
    }

    /// Markup for the grid, without styles
    pub fn to_html(&self, labels: &CalendarLabels) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            "<div class=\"calendar-header\"><h4>{}</h4></div>",
            escape_html(&labels.title_for(self.year, self.month0))
        );
        html.push_str("<div class=\"calendar-body\"><div class=\"calendar-weekdays\">");
        for weekday in &labels.weekdays {
            let _ = write!(html, "<div>{}</div>", escape_html(weekday));
        }
        html.push_str("</div><div class=\"calendar-days\">");
        for cell in &self.cells {
            match cell {
                CalendarCell::Blank => html.push_str("<div class=\"calendar-day empty\"></div>"),
                CalendarCell::Day { day, today, event } => {
                    let mut class = String::from("calendar-day");
                    if *today {
                        class.push_str(" today");
                    }
                    if event.is_some() {
                        class.push_str(" has-event");
                    }
                    let _ = write!(
                        html,
                        "<div class=\"{}\"><span class=\"day-number\">{}</span>",
                        class, day
                    );
                    if let Some(label) = event {
                        let _ = write!(
                            html,
                            "<div class=\"event-marker\">{}</div>",
                            escape_html(label)
                        );
                    }
                    html.push_str("</div>");
                }
            }
        }
        html.push_str("</div></div>");
        html
    }

    /// Styles followed by markup, ready to replace the container contents
    pub fn render(&self, labels: &CalendarLabels) -> String {
        format!("<style>{}</style>{}", CALENDAR_CSS, self.to_html(labels))
    }
}

/// Number of days in a 1-based `month` of `year`
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_events;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn march_2024_layout() {
        let month = CalendarMonth::for_date(date(2024, 3, 15), &default_events());

        assert_eq!(month.year, 2024);
        assert_eq!(month.month0, 2);
        assert_eq!(month.first_weekday, 5);
        assert_eq!(month.day_count, 31);
        assert_eq!(month.blank_cells(), 5);
        assert_eq!(month.day_cells().count(), 31);
        assert_eq!(month.cells.iter().filter(|c| c.is_today()).count(), 1);
        assert!(month.day(15).unwrap().is_today());
        assert_eq!(month.day(15).unwrap().event(), Some("樹氷まつり"));
    }

    #[test]
    fn month_lengths_match_chrono() {
        for year in [1900, 2000, 2023, 2024, 2100] {
            for month in 1..=12 {
                let first = date(year, month, 1);
                let next = if month == 12 {
                    date(year + 1, 1, 1)
                } else {
                    date(year, month + 1, 1)
                };
                let expected = (next - first).num_days() as u32;
                assert_eq!(days_in_month(year, month), expected, "{}-{}", year, month);
            }
        }
    }

    #[test]
    fn month_starting_on_sunday_has_no_blanks() {
        // 2024-09-01 is a Sunday
        let month = CalendarMonth::for_date(date(2024, 9, 10), &EventTable::new());
        assert_eq!(month.first_weekday, 0);
        assert_eq!(month.blank_cells(), 0);
        assert_eq!(month.day_count, 30);
    }

    #[test]
    fn event_days_are_marked_in_markup() {
        let month = CalendarMonth::for_date(date(2025, 2, 1), &default_events());
        let html = month.to_html(&CalendarLabels::default());

        assert!(html.contains("<h4>2025年 2月</h4>"));
        assert_eq!(html.matches("has-event").count(), 4);
        assert_eq!(html.matches("calendar-day today").count(), 1);
        assert_eq!(html.matches("calendar-day empty").count(), 6);
        assert!(html.contains("<div class=\"event-marker\">雪上花火大会</div>"));
    }

    #[test]
    fn labels_are_escaped() {
        let mut events = EventTable::new();
        events.insert(3, "<b>Night & Day</b>".to_string());
        let month = CalendarMonth::for_date(date(2024, 1, 1), &events);
        let html = month.to_html(&CalendarLabels::default());

        assert!(html.contains("&lt;b&gt;Night &amp; Day&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn render_prepends_styles() {
        let month = CalendarMonth::for_date(date(2024, 1, 1), &EventTable::new());
        let fragment = month.render(&CalendarLabels::default());
        assert!(fragment.starts_with("<style>"));
        assert!(fragment.contains(".calendar-day.has-event"));
    }
}
