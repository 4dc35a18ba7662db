use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
};
use log::{debug, info, warn};
use plexus_config::Config;
use plexus_core::LineTheme;
use plexus_field::{Field, FieldWidget, Viewport};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Stylize},
    text::Line,
};

mod logger;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    logger::init(config.log_level_filter()?)?;
    match plexus_config::config_path() {
        Some(path) if path.exists() => info!("loaded config from {}", path.display()),
        _ => info!("no config file found, using defaults"),
    }
    info!(
        "starting with {} particles, tick {}ms",
        config.field.particle_count, config.tick_ms
    );

    let terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture)
        .map_err(Into::into)
        .and_then(|()| App::new(config).run(terminal));
    if let Err(err) = execute!(stdout(), DisableMouseCapture) {
        warn!("failed to disable mouse capture: {err}");
    }
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Is the simulation frozen?
    paused: bool,
    /// Show the help and status footer.
    show_help: bool,
    /// Current line colour theme.
    theme: LineTheme,
    /// Time between simulation ticks.
    tick_interval: Duration,
    /// The particle simulation.
    field: Field,
    /// Where the field was last drawn, for mapping mouse cells.
    viewport: Viewport,
}

impl App {
    /// Construct a new instance of [`App`] with a freshly seeded field.
    pub fn new(config: Config) -> Self {
        let field = Field::new(config.field.clone());
        Self::with_field(config, field)
    }

    /// Construct an [`App`] around an existing field.
    pub fn with_field(config: Config, field: Field) -> Self {
        Self {
            running: false,
            paused: false,
            show_help: config.show_help,
            theme: config.theme,
            tick_interval: config.tick_interval(),
            field,
            viewport: Viewport::default(),
        }
    }

    /// Run the application's main loop.
    ///
    /// Draws, waits for input until the next tick is due, then advances the
    /// field once per elapsed tick interval.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let mut next_tick = Instant::now() + self.tick_interval;

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            let timeout = next_tick.saturating_duration_since(Instant::now());
            self.handle_crossterm_events(timeout)?;

            let now = Instant::now();
            if now >= next_tick {
                self.on_tick();
                next_tick += self.tick_interval;
                // Skip ticks we fell behind on instead of bursting them.
                if next_tick < now {
                    next_tick = now + self.tick_interval;
                }
            }
        }

        info!("exiting with {} particles", self.field.len());
        Ok(())
    }

    /// Advance the simulation unless paused.
    fn on_tick(&mut self) {
        if !self.paused {
            self.field.tick();
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let footer = if self.show_help { 1 } else { 0 };
        let chunks =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(footer)]).split(frame.area());

        let widget = FieldWidget::new(&self.field, self.theme);
        self.viewport = widget.viewport(chunks[0]);
        frame.render_widget(widget, chunks[0]);

        if self.show_help {
            frame.render_widget(self.footer(), chunks[1]);
        }
    }

    /// Key help and status line.
    fn footer(&self) -> Line<'static> {
        let color = Color::from(self.theme.cursor_color());
        let mut spans = vec![
            "q".bold().fg(color),
            " quit  ".dark_gray(),
            "space".bold().fg(color),
            " pause  ".dark_gray(),
            "c".bold().fg(color),
            " theme  ".dark_gray(),
            "h".bold().fg(color),
            " hide  ".dark_gray(),
            format!("{} particles", self.field.len()).fg(color),
            format!("  {}", self.theme.name()).dark_gray(),
        ];
        if self.paused {
            spans.push("  paused".bold().yellow());
        }
        Line::from(spans).centered()
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most `timeout` so ticks stay on schedule.
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<()> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char(' ')) => self.toggle_pause(),
            (_, KeyCode::Char('c')) => self.cycle_theme(),
            (_, KeyCode::Char('h')) => self.show_help = !self.show_help,
            _ => {}
        }
    }

    /// Cursor movement attracts particles; a click with any button spawns one.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        let Some(point) = self.viewport.cell_to_field(mouse.column, mouse.row) else {
            return;
        };
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.field.attract(point),
            MouseEventKind::Down(_) => {
                self.field.spawn_at(point);
                debug!(
                    "spawned particle at ({:.1}, {:.1}), {} total",
                    point.x,
                    point.y,
                    self.field.len()
                );
            }
            _ => {}
        }
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        info!("line theme set to {}", self.theme.name());
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
