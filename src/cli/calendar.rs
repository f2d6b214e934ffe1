use anyhow::{Result, anyhow};
use chrono::{Datelike, Local, NaiveDate};

use crate::calendar::{MonthLayout, academic_events, layout_month};

/// Text rendering of a month: one line of dates per week followed by
/// the bars on that week, one line per track.
pub fn render(layout: &MonthLayout) -> String {
    let mut out = format!("{}\n", layout.month_start.format("%Y년 %m월"));
    out.push_str(" 일  월  화  수  목  금  토\n");

    for (week_index, week) in layout.weeks.iter().enumerate() {
        let days: Vec<String> = week
            .days
            .iter()
            .map(|day| {
                if day.month() == layout.month_start.month() {
                    format!("{:>3}", day.day())
                } else {
                    "  .".to_string()
                }
            })
            .collect();
        out.push_str(&days.join(" "));
        out.push('\n');

        for segment in layout.week_segments(week_index) {
            let indent = " ".repeat(segment.start_day as usize * 4);
            let bar = "=".repeat((segment.duration as usize * 4).saturating_sub(1));
            out.push_str(&format!(
                "{}{} [{}] {}\n",
                indent, bar, segment.track, segment.event.title
            ));
        }
    }

    out
}

pub fn run(month: Option<&str>) -> Result<()> {
    let reference = match month {
        Some(month) => NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
            .map_err(|_| anyhow!("Invalid month \"{}\", expected YYYY-MM", month))?,
        None => Local::now().date_naive(),
    };

    let layout = layout_month(reference, &academic_events())?;
    print!("{}", render(&layout));
    Ok(())
}
