use crate::calc::{weekday_header, CalendarGridCell, HijriDate, HijriMonth, Lang};
use crate::data::{AppSettings, OccasionData};
use anyhow::Result;
use crossterm::event::{self, Event as CEvent, KeyCode, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame, Terminal,
};
use std::io::Stdout;
use std::time::Duration as StdDuration;
use tracing::debug;

// The app has a single emerald theme
const EMERALD: Color = Color::Rgb(16, 185, 129);
const EMERALD_DARK: Color = Color::Rgb(4, 120, 87);
const OCCASION_COLOR: Color = Color::Yellow;

const SECTION_BG: Color = Color::Rgb(40, 44, 52);

/// Column index of Friday in a Sunday-first grid.
const FRIDAY: usize = 5;

/// Width of one day cell in the month grid.
const CELL_WIDTH: usize = 4;

pub struct App<'a> {
    occasions: &'a OccasionData,
    today: HijriDate,
    displayed: HijriMonth,
    /// Rebuilt whenever `displayed` changes.
    grid: Vec<CalendarGridCell>,
    lang: Lang,
    date_format: String,
}

impl<'a> App<'a> {
    pub fn new(occasions: &'a OccasionData, settings: &AppSettings, today: HijriDate) -> Self {
        let displayed = HijriMonth::of(&today);
        App {
            occasions,
            today,
            displayed,
            grid: displayed.grid(),
            lang: settings.language,
            date_format: settings.date_format.clone(),
        }
    }

    fn show(&mut self, month: HijriMonth) {
        debug!(year = month.year, month = month.month, "showing month");
        self.displayed = month;
        self.grid = month.grid();
    }

    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Left | KeyCode::Char('p') => self.show(self.displayed.prev()),
            KeyCode::Right | KeyCode::Char('n') => self.show(self.displayed.next()),
            KeyCode::Up => {
                let m = self.displayed;
                self.show(HijriMonth::new(m.year - 1, m.month));
            }
            KeyCode::Down => {
                let m = self.displayed;
                self.show(HijriMonth::new(m.year + 1, m.month));
            }
            KeyCode::Char('t') => self.show(HijriMonth::of(&self.today)),
            KeyCode::Char('l') => self.lang = self.lang.toggle(),
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            _ => {}
        }
        false
    }

    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),  // month title (en, ar, gregorian range)
                Constraint::Length(9),  // weekday header + 6 grid rows + borders
                Constraint::Length(5),  // today panel
                Constraint::Min(10),    // occasions + help
            ])
            .split(f.area());

        self.render_title(f, chunks[0]);
        self.render_grid(f, chunks[1]);
        self.render_today(f, chunks[2]);
        self.render_occasions_and_help(f, chunks[3]);
    }

    fn render_title(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let first = self.displayed.first_day();
        let range = match (first.to_gregorian(), self.displayed.last_day().to_gregorian()) {
            (Some(s), Some(e)) => format!("{} - {}", s.format("%d %b %Y"), e.format("%d %b %Y")),
            _ => String::new(),
        };
        let lines = vec![
            Line::from(Span::styled(
                format!("{} {}", first.month_name(Lang::En), self.displayed.year),
                Style::default().fg(EMERALD).add_modifier(Modifier::BOLD),
            )),
            Line::from(first.month_name(Lang::Ar)),
            Line::from(Span::styled(range, Style::default().add_modifier(Modifier::DIM))),
        ];
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_grid(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let header: Vec<Span> = weekday_header(self.lang)
            .iter()
            .enumerate()
            .map(|(col, name)| {
                let style = if col == FRIDAY {
                    Style::default().fg(EMERALD).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                Span::styled(format!("{:>w$}", name, w = CELL_WIDTH - 1), style)
            })
            .flat_map(|s| [s, Span::raw(" ")])
            .collect();

        let mut lines: Vec<Line> = vec![Line::from(header)];
        for row in self.grid.chunks(7) {
            let mut spans = Vec::with_capacity(14);
            for (col, cell) in row.iter().enumerate() {
                let has_occasion = cell.is_current_month
                    && !self
                        .occasions
                        .on(&HijriDate::new(cell.year, cell.month, cell.date))
                        .is_empty();
                let style = calendar_cell_style(
                    cell.is_current_month,
                    self.is_today(cell),
                    col == FRIDAY,
                    has_occasion,
                );
                spans.push(Span::styled(format!("{:>w$}", cell.date, w = CELL_WIDTH - 1), style));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }

        let widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, area);
    }

    fn render_today(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let t = &self.today;
        let gregorian = t
            .to_gregorian()
            .map(|g| g.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let lines = vec![
            Line::from(Span::styled(
                t.format(&self.date_format, Lang::En),
                Style::default().fg(EMERALD).add_modifier(Modifier::BOLD),
            )),
            Line::from(t.format(&self.date_format, Lang::Ar)),
            Line::from(Span::styled(gregorian, Style::default().add_modifier(Modifier::DIM))),
        ];
        let widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Today "));
        f.render_widget(widget, area);
    }

    fn render_occasions_and_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let mut rows = vec![section_header("Occasions")];
        for o in self.occasions.in_month(self.displayed.month) {
            let Some(date) = o.in_year(self.displayed.year) else {
                continue;
            };
            let gregorian = date
                .to_gregorian()
                .map(|g| g.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            rows.push(Row::new(vec![
                colored(format!("  {}", date.format("D MONTH", self.lang)), OCCASION_COLOR),
                Cell::from(gregorian),
                Cell::from(o.name.clone()),
            ]));
        }
        if rows.len() == 1 {
            rows.push(Row::new(vec![Cell::from("  none"), Cell::from(""), Cell::from("")]));
        }
        let table = Table::new(
            rows,
            [
                Constraint::Length(20),
                Constraint::Length(12),
                Constraint::Min(10),
            ],
        )
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(table, chunks[0]);

        let help = [
            ("←/p  →/n", "previous / next month"),
            ("↑  ↓", "previous / next year"),
            ("t", "today"),
            ("l", "toggle language"),
            ("q", "quit"),
        ];
        let mut help_rows = vec![section_header("Keys")];
        help_rows.extend(help.iter().map(|(key, desc)| {
            Row::new(vec![
                colored(format!("  {key}"), EMERALD),
                Cell::from(*desc),
                Cell::from(""),
            ])
        }));
        let table = Table::new(
            help_rows,
            [Constraint::Length(12), Constraint::Min(10), Constraint::Length(0)],
        )
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(table, chunks[1]);
    }

    fn is_today(&self, cell: &CalendarGridCell) -> bool {
        cell.date == self.today.date()
            && cell.month == self.today.month()
            && cell.year == self.today.year()
    }
}

/// A section header row with a dark background and bold text.
fn section_header(title: &str) -> Row<'static> {
    Row::new(vec![
        Cell::from(title.to_string())
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Cell::from(""),
        Cell::from(""),
    ])
    .style(Style::default().bg(SECTION_BG))
}

/// Colored cell.
fn colored(s: impl Into<String>, color: Color) -> Cell<'static> {
    Cell::from(s.into()).style(Style::default().fg(color))
}

// ── App event loop ────────────────────────────────────────────────────────────

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            if let CEvent::Key(key) = event::read()? {
                if app.handle_key(key.code, key.modifiers) {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Determines the ratatui `Style` for a day cell of the month grid.
pub(crate) fn calendar_cell_style(
    is_current_month: bool,
    is_today: bool,
    is_friday: bool,
    has_occasion: bool,
) -> Style {
    if !is_current_month {
        // Padding days from the neighbouring months, even when one is today
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else if is_today {
        Style::default()
            .fg(Color::White)
            .bg(EMERALD_DARK)
            .add_modifier(Modifier::BOLD)
    } else if has_occasion {
        Style::default()
            .fg(OCCASION_COLOR)
            .add_modifier(Modifier::UNDERLINED)
    } else if is_friday {
        Style::default().fg(EMERALD)
    } else {
        Style::default()
    }
}
