//! Event calendar rendering

use chrono::NaiveDate;

use crate::calendar::CalendarMonth;
use crate::config::CalendarConfig;
use crate::dom::Dom;
use crate::markup::CALENDAR_ID;

/// Renders the current month into the calendar container
#[derive(Debug, Clone)]
pub struct EventCalendarGenerator<N> {
    container: N,
    config: CalendarConfig,
}

impl<N: Clone + PartialEq> EventCalendarGenerator<N> {
    pub fn attach<D: Dom<Node = N>>(dom: &D, config: &CalendarConfig) -> Option<Self> {
        Some(Self {
            container: dom.by_id(CALENDAR_ID)?,
            config: config.clone(),
        })
    }

    /// Replace the container contents with the month containing `today`
    pub fn render<D: Dom<Node = N>>(&self, dom: &mut D, today: NaiveDate) -> CalendarMonth {
        let month = CalendarMonth::for_date(today, &self.config.events);
        dom.set_inner_html(&self.container, &month.render(&self.config.labels));
        tracing::debug!(year = month.year, month = month.month0 + 1, "calendar rendered");
        month
    }
}
