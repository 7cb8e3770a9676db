use crate::config::Config;
use crate::cube::Cube;
use crate::moves::{Direction, Face};
use crate::solver::SolveAnimation;
use crate::state::NET_LAYOUT;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, warn};
use rand::rngs::StdRng;
use std::io::{self, Write};
use std::time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(16);
const HISTORY_SHOWN: usize = 18;
const PANEL_WIDTH: u16 = 32;
const STICKER_WIDTH: u16 = 2;

const CONTROLS: [&str; 6] = [
    "Esc/q : Quit",
    "Space : Scramble",
    "Backspace : Undo",
    "0/Del : Reset   Enter : Solve",
    "u d f b l r : Rotate (CW)",
    "Shift+face : CCW rotation",
];

pub fn face_color(face: Face) -> Color {
    let (r, g, b) = match face {
        Face::Up => (255, 255, 255),
        Face::Down => (255, 255, 0),
        Face::Front => (0, 200, 70),
        Face::Back => (0, 85, 200),
        Face::Left => (255, 128, 0),
        Face::Right => (200, 30, 30),
    };
    Color::Rgb { r, g, b }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Quit,
    Scramble,
    Reset,
    Solve,
    Undo,
    Rotate(Face, Direction),
}

fn action_for(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(' ') => Some(Action::Scramble),
        KeyCode::Char('0') | KeyCode::Delete => Some(Action::Reset),
        KeyCode::Enter => Some(Action::Solve),
        KeyCode::Backspace => Some(Action::Undo),
        KeyCode::Char(c) => {
            let face = Face::try_from(c.to_ascii_uppercase()).ok()?;
            let direction = if key.modifiers.contains(KeyModifiers::SHIFT) {
                Direction::CounterClockwise
            } else {
                Direction::Clockwise
            };
            Some(Action::Rotate(face, direction))
        }
        _ => None,
    }
}

pub struct App {
    cube: Cube,
    animation: SolveAnimation,
    rng: StdRng,
    scramble_length: usize,
    dirty: bool,
}

/// Raw mode and the alternate screen, undone on drop so a panic still restores the terminal.
struct RawScreen;

impl RawScreen {
    fn enter(out: &mut impl Write) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let screen = Self;
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(screen)
    }
}

impl Drop for RawScreen {
    fn drop(&mut self) {
        if let Err(err) = restore(&mut io::stdout()) {
            warn!("failed to restore terminal: {err}");
        }
    }
}

/// Leaves the alternate screen, then disables raw mode even if the first step failed.
fn restore(out: &mut impl Write) -> io::Result<()> {
    let screen = execute!(out, ResetColor, Show, LeaveAlternateScreen);
    terminal::disable_raw_mode()?;
    screen
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            cube: Cube::new(),
            animation: SolveAnimation::new(config.solve_speed),
            rng: config.rng(),
            scramble_length: config.scramble_length,
            dirty: true,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        let _screen = RawScreen::enter(&mut stdout)?;
        self.event_loop(&mut stdout)
    }

    fn event_loop(&mut self, out: &mut impl Write) -> io::Result<()> {
        loop {
            if event::poll(FRAME)? {
                match event::read()? {
                    Event::Key(key) => match action_for(key) {
                        Some(Action::Quit) => return Ok(()),
                        Some(action) if !self.animation.is_running() => self.handle(action),
                        _ => {}
                    },
                    Event::Resize(..) => self.dirty = true,
                    _ => {}
                }
            }
            if self.animation.tick(&mut self.cube, Instant::now()) {
                self.dirty = true;
            }
            self.redraw(out)?;
        }
    }

    /// Draws only if something changed since the last frame. Returns whether it drew.
    fn redraw(&mut self, out: &mut impl Write) -> io::Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        self.draw(out)?;
        self.dirty = false;
        Ok(true)
    }

    fn handle(&mut self, action: Action) {
        debug!("action {action:?}");
        self.dirty = true;
        match action {
            Action::Scramble => {
                self.cube.scramble_with(self.scramble_length, &mut self.rng);
            }
            Action::Reset => self.cube.reset(),
            Action::Solve => {
                self.animation.start(&self.cube, Instant::now());
            }
            Action::Undo => {
                self.cube.undo();
            }
            Action::Rotate(face, direction) => self.cube.rotate_face(face, direction),
            Action::Quit => {}
        }
    }

    fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, ResetColor, Clear(ClearType::All))?;
        self.draw_panel(out)?;
        self.draw_net(out)?;
        out.flush()
    }

    fn draw_panel(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(
            out,
            MoveTo(2, 1),
            SetForegroundColor(Color::White),
            Print("Rubik's Cube"),
            MoveTo(2, 3),
            SetForegroundColor(Color::Grey),
            Print("Controls:")
        )?;
        let mut row = 4;
        for line in CONTROLS {
            queue!(out, MoveTo(2, row), Print(line))?;
            row += 1;
        }

        row += 1;
        queue!(out, MoveTo(2, row), Print("Move history:"))?;
        row += 1;
        queue!(out, SetForegroundColor(Color::Rgb { r: 250, g: 120, b: 120 }))?;
        let tail = self.cube.history().notation_tail(HISTORY_SHOWN);
        for line in wrap(&tail, (PANEL_WIDTH - 4) as usize) {
            queue!(out, MoveTo(2, row), Print(line))?;
            row += 1;
        }
        if self.animation.is_running() {
            queue!(out, MoveTo(2, row + 1), SetForegroundColor(Color::Yellow), Print("Solving..."))?;
        }
        queue!(out, ResetColor)
    }

    fn draw_net(&self, out: &mut impl Write) -> io::Result<()> {
        let origin_x = PANEL_WIDTH + 2;
        let origin_y = 2;
        for (face, block_row, block_col) in NET_LAYOUT {
            let face_x = origin_x + block_col as u16 * 3 * (STICKER_WIDTH + 1);
            let face_y = origin_y + block_row as u16 * 4;
            queue!(
                out,
                ResetColor,
                SetForegroundColor(Color::Grey),
                MoveTo(face_x, face_y),
                Print(face.label())
            )?;
            for (row, stickers) in self.cube.face(face).iter().enumerate() {
                for (col, &sticker) in stickers.iter().enumerate() {
                    queue!(
                        out,
                        MoveTo(
                            face_x + col as u16 * (STICKER_WIDTH + 1),
                            face_y + 1 + row as u16
                        ),
                        SetBackgroundColor(face_color(sticker)),
                        Print("  "),
                        ResetColor
                    )?;
                }
            }
        }
        Ok(())
    }
}

/// Splits space-separated moves into lines no wider than `width`.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn shift_selects_direction() {
        assert_eq!(
            action_for(key(KeyCode::Char('f'))),
            Some(Action::Rotate(Face::Front, Direction::Clockwise))
        );
        assert_eq!(
            action_for(KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT)),
            Some(Action::Rotate(Face::Right, Direction::CounterClockwise))
        );
        assert_eq!(
            action_for(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::SHIFT)),
            Some(Action::Rotate(Face::Left, Direction::CounterClockwise))
        );
        assert_eq!(action_for(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn caps_lock_without_shift_turns_clockwise() {
        assert_eq!(
            action_for(key(KeyCode::Char('B'))),
            Some(Action::Rotate(Face::Back, Direction::Clockwise))
        );
    }

    #[test]
    fn control_keys_map_to_actions() {
        assert_eq!(action_for(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(action_for(key(KeyCode::Char(' '))), Some(Action::Scramble));
        assert_eq!(action_for(key(KeyCode::Backspace)), Some(Action::Undo));
        assert_eq!(action_for(key(KeyCode::Enter)), Some(Action::Solve));
        assert_eq!(action_for(key(KeyCode::Delete)), Some(Action::Reset));
    }

    #[test]
    fn wrap_breaks_on_width() {
        assert_eq!(wrap("U R' F D", 5), vec!["U R'", "F D"]);
        assert!(wrap("", 10).is_empty());
    }

    fn test_app() -> App {
        App::new(&Config {
            scramble_length: 6,
            solve_speed: 8,
            seed: Some(3),
            plain: false,
        })
    }

    #[test]
    fn redraws_only_after_changes() {
        let mut app = test_app();
        let mut frame = Vec::new();
        assert!(app.redraw(&mut frame).unwrap());
        assert!(!frame.is_empty());

        let mut idle = Vec::new();
        assert!(!app.redraw(&mut idle).unwrap());
        assert!(idle.is_empty());

        app.handle(Action::Rotate(Face::Up, Direction::Clockwise));
        let mut after_turn = Vec::new();
        assert!(app.redraw(&mut after_turn).unwrap());
        assert!(!after_turn.is_empty());
    }

    #[test]
    fn restore_leaves_alternate_screen_and_shows_cursor() {
        let mut out = Vec::new();
        restore(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }

    #[test]
    fn handled_actions_drive_the_cube() {
        let mut app = test_app();
        app.handle(Action::Scramble);
        assert_eq!(app.cube.history().len(), 6);
        app.handle(Action::Undo);
        assert_eq!(app.cube.history().len(), 5);
        app.handle(Action::Solve);
        assert!(app.animation.is_running());
        app.handle(Action::Reset);
        assert!(app.cube.is_solved());
    }
}
