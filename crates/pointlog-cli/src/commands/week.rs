use std::collections::HashMap;

use chrono::Local;
use clap::Args;

use pointlog_core::storage::parse_date;
use pointlog_core::{week_anchor, DayCell, Ledger, Settings, WeekHeatmap, MAX_INTENSITY};

#[derive(Args)]
pub struct WeekArgs {
    /// First day of the window, YYYY-MM-DD (defaults to the Monday of the
    /// current week)
    #[arg(long)]
    anchor: Option<String>,
    /// Shift the window by this many weeks
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    offset: i64,
    /// Daily goal override (defaults to the stored points_per_day)
    #[arg(long)]
    goal: Option<u32>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: WeekArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ledger = Ledger::open()?;
    let settings = Settings::load_or_default();

    let anchor = match &args.anchor {
        Some(raw) => parse_date(raw)?,
        None => week_anchor(Local::now().date_naive()),
    };
    let goal = args.goal.unwrap_or(settings.points_per_day);

    let mut view = WeekHeatmap::new(anchor, goal);
    let snapshot: HashMap<_, _> = ledger.all_points()?.into_iter().collect();
    view.set_data(snapshot);
    view.shift_week(args.offset);

    let cells = view.cells();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&cells)?);
    } else {
        print!("{}", render_week(&cells));
    }
    Ok(())
}

/// Render the 7 cells as one line per day with a shade column.
fn render_week(cells: &[DayCell; 7]) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Week of {} .. {}\n",
        cells[0].date, cells[6].date
    ));
    for cell in cells {
        output.push_str(&format!(
            "{} {}  {} {:>5}\n",
            cell.date.format("%a"),
            cell.date,
            shade(cell.intensity),
            cell.points
        ));
    }
    output
}

/// Shade character for an intensity value (0..=155).
fn shade(intensity: u32) -> char {
    if intensity == 0 {
        ' '
    } else if intensity < MAX_INTENSITY / 4 {
        '░'
    } else if intensity < MAX_INTENSITY / 2 {
        '▒'
    } else if intensity < MAX_INTENSITY {
        '▓'
    } else {
        '█'
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn renders_one_line_per_day() {
        let anchor = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        let view = WeekHeatmap::new(anchor, 10);
        let rendered = render_week(&view.cells());
        assert!(rendered.contains("Week of 2024-05-06 .. 2024-05-12"));
        assert_eq!(rendered.lines().count(), 8);
        assert!(rendered.contains("Mon 2024-05-06"));
        assert!(rendered.contains("Sun 2024-05-12"));
    }

    #[test]
    fn shade_scales_with_intensity() {
        assert_eq!(shade(0), ' ');
        assert_eq!(shade(20), '░');
        assert_eq!(shade(60), '▒');
        assert_eq!(shade(120), '▓');
        assert_eq!(shade(MAX_INTENSITY), '█');
    }
}
