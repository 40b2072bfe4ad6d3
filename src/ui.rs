use anyhow::Result;
use log::error;
use bmi_tracker::classifier::Category;
use bmi_tracker::db::RecordStore;
use bmi_tracker::shell::{
    self, Command, FormState, History, Notice, NoticeLevel, Outcome, TrendSeries,
    HISTORY_TITLE, RESULT_PLACEHOLDER, TREND_TITLE, TREND_WINDOW_TITLE, X_AXIS_TITLE,
    Y_AXIS_TITLE,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Cell, Chart, Clear, Dataset, GraphType, Paragraph, Row, Table,
        TableState, Wrap,
    },
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Height,
    Weight,
}

impl Field {
    pub fn next(&self) -> Self {
        match self {
            Field::Name => Field::Height,
            Field::Height => Field::Weight,
            Field::Weight => Field::Name,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Field::Name => Field::Weight,
            Field::Height => Field::Name,
            Field::Weight => Field::Height,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Field::Name => "Name",
            Field::Height => "Height (meters)",
            Field::Weight => "Weight (kilograms)",
        }
    }
}

/// What is drawn on top of the form
#[derive(Debug, Clone)]
pub enum Overlay {
    None,
    Dialog(Notice),
    History(History),
    Trend(TrendSeries),
}

pub struct App {
    pub form: FormState,
    pub focus: Field,
    pub result: String,
    pub overlay: Overlay,
    pub history_state: TableState,
}

impl App {
    pub fn new() -> Self {
        Self {
            form: FormState::default(),
            focus: Field::Name,
            result: RESULT_PLACEHOLDER.to_string(),
            overlay: Overlay::None,
            history_state: TableState::default(),
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.form.name,
            Field::Height => &mut self.form.height,
            Field::Weight => &mut self.form.weight,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.form.name,
            Field::Height => &self.form.height,
            Field::Weight => &self.form.weight,
        }
    }

    /// Run one form action. A store fault ends only this action: it is
    /// logged and shown as an error dialog, and the form stays open.
    pub fn run_command(&mut self, store: &dyn RecordStore, command: Command) {
        match shell::dispatch(store, command, &self.form) {
            Ok(outcome) => self.apply(outcome),
            Err(e) => {
                error!("{} failed: {:#}", command.label(), e);
                self.overlay = Overlay::Dialog(Notice::storage_error(format!("{:#}", e)));
            }
        }
    }

    fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Calculated { display, .. } => self.result = display,
            Outcome::SaveFailed { display, notice } => {
                self.result = display;
                self.overlay = Overlay::Dialog(notice);
            }
            Outcome::Notice(notice) => self.overlay = Overlay::Dialog(notice),
            Outcome::History(history) => {
                self.history_state.select(Some(0));
                self.overlay = Overlay::History(history);
            }
            Outcome::Trend(series) => self.overlay = Overlay::Trend(series),
        }
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    /// Handle one key press. Returns true when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent, store: &dyn RecordStore) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match self.overlay {
            Overlay::None => return self.handle_form_key(key, store),
            Overlay::Dialog(_) | Overlay::Trend(_) => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.close_overlay(),
                _ => {}
            },
            Overlay::History(_) => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.close_overlay(),
                KeyCode::Down | KeyCode::Char('j') => self.next(),
                KeyCode::Up | KeyCode::Char('k') => self.previous(),
                _ => {}
            },
        }

        false
    }

    fn handle_form_key(&mut self, key: KeyEvent, store: &dyn RecordStore) -> bool {
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Enter | KeyCode::F(5) => self.run_command(store, Command::Calculate),
            KeyCode::F(6) => self.run_command(store, Command::ViewHistory),
            KeyCode::F(7) => self.run_command(store, Command::PlotTrend),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.previous(),
            KeyCode::Backspace => {
                let focus = self.focus;
                self.field_mut(focus).pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let focus = self.focus;
                self.field_mut(focus).push(c);
            }
            _ => {}
        }
        false
    }

    fn history_len(&self) -> usize {
        match &self.overlay {
            Overlay::History(history) => history.records.len(),
            _ => 0,
        }
    }

    pub fn next(&mut self) {
        let len = self.history_len();
        if len == 0 {
            return;
        }
        let i = match self.history_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.history_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.history_len();
        if len == 0 {
            return;
        }
        let i = match self.history_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.history_state.select(Some(i));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run_ui(app: &mut App, store: &dyn RecordStore) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, store);

    // Restore terminal before any error reaches the caller
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    store: &dyn RecordStore,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key, store) {
                return Ok(());
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Name
            Constraint::Length(3), // Height
            Constraint::Length(3), // Weight
            Constraint::Length(3), // Actions
            Constraint::Length(3), // Result
            Constraint::Min(0),
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0]);
    for (i, field) in [Field::Name, Field::Height, Field::Weight].iter().enumerate() {
        render_input(f, chunks[1 + i], app, *field);
    }
    render_actions(f, chunks[4]);
    render_result(f, chunks[5], app);
    render_status_bar(f, chunks[7], app);

    let area = f.size();
    let surface = centered_rect(90, area.height.saturating_sub(4), area);
    match &app.overlay {
        Overlay::None => {}
        Overlay::Dialog(notice) => render_dialog(f, centered_rect(50, 8, area), notice),
        Overlay::History(history) => render_history(f, surface, history, &mut app.history_state),
        Overlay::Trend(series) => render_trend(f, surface, series),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![Span::styled(
        "BMI Calculator",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )]))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn render_input(f: &mut Frame, area: Rect, app: &App, field: Field) {
    let focused = app.focus == field && matches!(app.overlay, Overlay::None);
    let border = if focused { Color::Yellow } else { Color::White };
    let value = app.field(field);

    let input = Paragraph::new(value).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", field.title())),
    );
    f.render_widget(input, area);

    if focused {
        let x = area.x + 1 + value.chars().count() as u16;
        f.set_cursor(x.min(area.right().saturating_sub(2)), area.y + 1);
    }
}

fn render_actions(f: &mut Frame, area: Rect) {
    let mut spans = vec![];
    for (i, (key, command)) in [
        ("Enter", Command::Calculate),
        ("F6", Command::ViewHistory),
        ("F7", Command::PlotTrend),
    ]
    .iter()
    .enumerate()
    {
        if i > 0 {
            spans.push(Span::raw(" │ "));
        }
        spans.push(Span::styled(format!("[{}] ", key), Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            command.label(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }

    let actions = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(actions, area);
}

fn render_result(f: &mut Frame, area: Rect, app: &App) {
    let result = Paragraph::new(app.result.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(" Result "));
    f.render_widget(result, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let hints: &[(&str, &str)] = match app.overlay {
        Overlay::None => &[("Tab", "Next field"), ("Enter", "Calculate"), ("Esc", "Quit")],
        Overlay::History(_) => &[("↑/↓", "Nav"), ("Esc", "Close")],
        _ => &[("Esc", "Close")],
    };

    let mut status_spans = vec![];
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            status_spans.push(Span::raw(" | "));
        }
        status_spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(format!(" {}", action)));
    }

    let status_bar = Paragraph::new(Line::from(status_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn render_dialog(f: &mut Frame, area: Rect, notice: &Notice) {
    let color = match notice.level {
        NoticeLevel::Error => Color::Red,
        NoticeLevel::Info => Color::Cyan,
    };

    let content = vec![
        Line::from(""),
        Line::from(notice.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to close",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let dialog = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", notice.title)),
    );

    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}

fn category_color(category: Category) -> Color {
    match category {
        Category::SeverelyUnderweight => Color::Red,
        Category::Underweight => Color::Yellow,
        Category::Healthy => Color::Green,
        Category::Overweight => Color::Yellow,
        Category::Obese => Color::Red,
    }
}

fn render_history(f: &mut Frame, area: Rect, history: &History, state: &mut TableState) {
    let header_cells = ["Record", "Height (m)", "Weight (kg)", "BMI", "Category", "Timestamp"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = history.records.iter().enumerate().map(|(idx, record)| {
        let color = category_color(record.category);
        let cells = vec![
            Cell::from(format!("{}", idx + 1)),
            Cell::from(format!("{}", record.height)),
            Cell::from(format!("{}", record.weight)),
            Cell::from(format!("{:.2}", record.bmi)).style(Style::default().fg(color)),
            Cell::from(record.category.as_str()).style(Style::default().fg(color)),
            Cell::from(record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()),
        ];

        Row::new(cells).height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(22),
            Constraint::Length(21),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {}: {} ", HISTORY_TITLE, truncate(&history.user_name, 30))),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_widget(Clear, area);
    f.render_stateful_widget(table, area, state);
}

fn render_trend(f: &mut Frame, area: Rect, series: &TrendSeries) {
    let [x0, x1] = series.x_bounds;
    let [y0, y1] = series.y_bounds;

    // Grid lines at every label position
    let grid: Vec<Vec<(f64, f64)>> = series
        .y_ticks
        .iter()
        .map(|y| vec![(x0, *y), (x1, *y)])
        .chain(series.x_ticks.iter().map(|x| vec![(*x, y0), (*x, y1)]))
        .collect();

    let mut datasets: Vec<Dataset> = grid
        .iter()
        .map(|line| {
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(line)
        })
        .collect();

    datasets.push(
        Dataset::default()
            .name(Y_AXIS_TITLE)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&series.points),
    );
    datasets.push(
        Dataset::default()
            .marker(symbols::Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Yellow))
            .data(&series.points),
    );

    let x_labels: Vec<Span> = series.x_labels().into_iter().map(Span::raw).collect();
    let y_labels: Vec<Span> = series.y_labels().into_iter().map(Span::raw).collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!(" {} ", TREND_WINDOW_TITLE))
                .title(
                    ratatui::widgets::block::Title::from(Span::styled(
                        TREND_TITLE,
                        Style::default().add_modifier(Modifier::BOLD),
                    ))
                    .alignment(Alignment::Center),
                ),
        )
        .x_axis(
            Axis::default()
                .title(X_AXIS_TITLE)
                .style(Style::default().fg(Color::Gray))
                .bounds(series.x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Y_AXIS_TITLE)
                .style(Style::default().fg(Color::Gray))
                .bounds(series.y_bounds)
                .labels(y_labels),
        );

    f.render_widget(Clear, area);
    f.render_widget(chart, area);
}

/// Rectangle of `percent_x` width and `height` rows centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmi_tracker::db::{MockRecordStore, SqliteStore};

    fn press(app: &mut App, store: &dyn RecordStore, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), store)
    }

    fn type_text(app: &mut App, store: &dyn RecordStore, text: &str) {
        for c in text.chars() {
            press(app, store, KeyCode::Char(c));
        }
    }

    fn fill_form(app: &mut App, store: &dyn RecordStore, name: &str, height: &str, weight: &str) {
        app.form = FormState::default();
        app.focus = Field::Name;
        type_text(app, store, name);
        press(app, store, KeyCode::Tab);
        type_text(app, store, height);
        press(app, store, KeyCode::Tab);
        type_text(app, store, weight);
    }

    #[test]
    fn test_calculate_updates_result_and_saves() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut app = App::new();
        assert_eq!(app.result, "BMI: N/A, Category: N/A");

        fill_form(&mut app, &store, "alice", "1.8", "70");
        assert_eq!(app.form, FormState::new("alice", "1.8", "70"));

        press(&mut app, &store, KeyCode::Enter);

        assert_eq!(app.result, "BMI: 21.60, Category: healthy");
        assert!(matches!(app.overlay, Overlay::None));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_empty_name_shows_input_error() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut app = App::new();
        fill_form(&mut app, &store, "", "1.8", "70");

        press(&mut app, &store, KeyCode::F(5));

        match &app.overlay {
            Overlay::Dialog(notice) => assert_eq!(notice.title, "Input Error"),
            other => panic!("unexpected overlay: {:?}", other),
        }
        assert_eq!(store.count().unwrap(), 0);

        // Typing while the dialog is open does not reach the form
        press(&mut app, &store, KeyCode::Char('x'));
        assert_eq!(app.form.name, "");
        press(&mut app, &store, KeyCode::Esc);
        assert!(matches!(app.overlay, Overlay::None));
    }

    #[test]
    fn test_history_and_trend_after_two_saves() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut app = App::new();

        fill_form(&mut app, &store, "bob", "1.75", "80");
        press(&mut app, &store, KeyCode::Enter);
        fill_form(&mut app, &store, "bob", "1.75", "76");
        press(&mut app, &store, KeyCode::Enter);

        press(&mut app, &store, KeyCode::F(6));
        match &app.overlay {
            Overlay::History(history) => {
                let weights: Vec<f64> = history.records.iter().map(|r| r.weight).collect();
                assert_eq!(weights, vec![80.0, 76.0]);
                assert_eq!(history.lines().len(), 2);
            }
            other => panic!("unexpected overlay: {:?}", other),
        }
        assert_eq!(app.history_state.selected(), Some(0));
        press(&mut app, &store, KeyCode::Down);
        assert_eq!(app.history_state.selected(), Some(1));
        press(&mut app, &store, KeyCode::Down);
        assert_eq!(app.history_state.selected(), Some(0));
        press(&mut app, &store, KeyCode::Esc);

        press(&mut app, &store, KeyCode::F(7));
        match &app.overlay {
            Overlay::Trend(series) => {
                assert_eq!(series.points.len(), 2);
                assert!(series.points[0].1 > series.points[1].1);
            }
            other => panic!("unexpected overlay: {:?}", other),
        }
    }

    #[test]
    fn test_no_data_notice_for_unknown_user() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut app = App::new();
        fill_form(&mut app, &store, "nobody", "", "");

        press(&mut app, &store, KeyCode::F(7));
        match &app.overlay {
            Overlay::Dialog(notice) => {
                assert_eq!(notice.title, "No Data");
                assert_eq!(notice.level, NoticeLevel::Info);
            }
            other => panic!("unexpected overlay: {:?}", other),
        }
    }

    #[test]
    fn test_focus_and_editing_keys() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut app = App::new();

        press(&mut app, &store, KeyCode::BackTab);
        assert_eq!(app.focus, Field::Weight);
        type_text(&mut app, &store, "655");
        press(&mut app, &store, KeyCode::Backspace);
        assert_eq!(app.form.weight, "65");

        press(&mut app, &store, KeyCode::Down);
        assert_eq!(app.focus, Field::Name);

        assert!(press(&mut app, &store, KeyCode::Esc));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key(ctrl_c, &store));
    }

    #[test]
    fn test_save_fault_keeps_form_open() {
        let mut store = MockRecordStore::new();
        store
            .expect_save()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("disk I/O error")));
        store
            .expect_fetch()
            .returning(|_| Err(anyhow::anyhow!("database is locked")));

        let mut app = App::new();
        fill_form(&mut app, &store, "alice", "1.8", "70");

        assert!(!press(&mut app, &store, KeyCode::Enter));
        assert_eq!(app.result, "BMI: 21.60, Category: healthy");
        match &app.overlay {
            Overlay::Dialog(notice) => {
                assert_eq!(notice.level, NoticeLevel::Error);
                assert_eq!(notice.title, "Storage Error");
                assert!(notice.message.contains("disk I/O error"));
            }
            other => panic!("unexpected overlay: {:?}", other),
        }

        // Dismiss, then a failing fetch is reported the same way
        press(&mut app, &store, KeyCode::Esc);
        assert!(!press(&mut app, &store, KeyCode::F(6)));
        match &app.overlay {
            Overlay::Dialog(notice) => assert!(notice.message.contains("database is locked")),
            other => panic!("unexpected overlay: {:?}", other),
        }
        press(&mut app, &store, KeyCode::Esc);
        assert!(matches!(app.overlay, Overlay::None));
        assert_eq!(app.form.name, "alice");
    }

    #[test]
    fn test_out_of_range_input_is_not_saved() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut app = App::new();
        fill_form(&mut app, &store, "z", "1e-200", "70");

        press(&mut app, &store, KeyCode::Enter);

        assert_eq!(app.result, "BMI: N/A, Category: N/A");
        match &app.overlay {
            Overlay::Dialog(notice) => assert_eq!(notice.title, "Input Error"),
            other => panic!("unexpected overlay: {:?}", other),
        }
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long user name", 10), "a very ...");
    }
}
