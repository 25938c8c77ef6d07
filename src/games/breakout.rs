use crossterm::event::{KeyCode, KeyEvent};
use log::{debug, info};
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::games::bricks::{BrickGrid, BRICK_COLUMNS, BRICK_ROWS};
use crate::games::Game;

pub const FIELD_WIDTH: i32 = 800;
pub const FIELD_HEIGHT: i32 = 600;
pub const BALL_DIAMETER: i32 = 20;
pub const PADDLE_WIDTH: i32 = 100;
pub const PADDLE_HEIGHT: i32 = 20;
pub const PADDLE_STEP: i32 = 10;
pub const MAX_LIVES: u32 = 3;
pub const BRICK_POINTS: u32 = 10;

const INITIAL_X: i32 = 350;
const INITIAL_Y: i32 = 500;
const INITIAL_DX: i32 = -1;
const INITIAL_DY: i32 = -2;

const FIELD_BG: Color = Color::Rgb(10, 10, 20);

/// Ball position (top-left of its bounding box) and per-tick velocity, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
}

impl Ball {
    pub fn initial() -> Self {
        Self {
            x: INITIAL_X,
            y: INITIAL_Y - BALL_DIAMETER,
            dx: INITIAL_DX,
            dy: INITIAL_DY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paddle {
    pub x: i32,
    pub y: i32,
}

impl Paddle {
    pub fn initial() -> Self {
        Self {
            x: INITIAL_X,
            y: INITIAL_Y,
        }
    }

    pub fn move_left(&mut self) {
        self.x = (self.x - PADDLE_STEP).max(0);
    }

    pub fn move_right(&mut self) {
        self.x = (self.x + PADDLE_STEP).min(FIELD_WIDTH - PADDLE_WIDTH);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunState {
    pub score: u32,
    pub lives: u32,
    pub running: bool,
    pub paused: bool,
}

impl RunState {
    fn new() -> Self {
        Self {
            score: 0,
            lives: MAX_LIVES,
            running: true,
            paused: false,
        }
    }
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Lost { score: u32 },
    Won { score: u32 },
}

pub struct Breakout {
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    pub run: RunState,
    outcome: Option<Outcome>,
    ticks: u64,
}

impl Breakout {
    pub fn new() -> Self {
        Self {
            ball: Ball::initial(),
            paddle: Paddle::initial(),
            bricks: BrickGrid::new(),
            run: RunState::new(),
            outcome: None,
            ticks: 0,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn lives(&self) -> u32 {
        self.run.lives
    }

    pub fn is_paused(&self) -> bool {
        self.run.paused
    }

    pub fn toggle_pause(&mut self) {
        if !self.run.running {
            return;
        }
        self.run.paused = !self.run.paused;
        info!(
            "game {} at tick {}",
            if self.run.paused { "paused" } else { "resumed" },
            self.ticks
        );
    }

    /// Advance one fixed step. Returns the outcome on the tick the session ends.
    pub fn tick(&mut self) -> Option<Outcome> {
        if !self.run.running || self.run.paused {
            return None;
        }
        self.ticks += 1;

        self.ball.x += self.ball.dx;
        self.ball.y += self.ball.dy;

        self.check_paddle();
        self.check_bricks();
        self.check_walls();
        self.check_floor();
        self.check_finished()
    }

    fn check_paddle(&mut self) {
        let ball = &mut self.ball;
        if ball.y + BALL_DIAMETER >= self.paddle.y
            && ball.x >= self.paddle.x
            && ball.x <= self.paddle.x + PADDLE_WIDTH
        {
            ball.dy = -ball.dy;
        }
    }

    // Every overlapping brick is struck; the scan keeps going after a hit.
    fn check_bricks(&mut self) {
        for row in 0..BRICK_ROWS {
            for col in 0..BRICK_COLUMNS {
                if !self.bricks.is_alive(row, col) {
                    continue;
                }
                let (left, top, right, bottom) = BrickGrid::bounds(row, col);
                let (x, y) = (self.ball.x, self.ball.y);
                if y >= top && y <= bottom && x >= left && x <= right {
                    self.bricks.destroy(row, col);
                    self.ball.dy = -self.ball.dy;
                    self.run.score += BRICK_POINTS;
                    debug!("brick ({row}, {col}) destroyed, score {}", self.run.score);
                }
            }
        }
    }

    fn check_walls(&mut self) {
        let ball = &mut self.ball;
        if ball.x <= 0 || ball.x >= FIELD_WIDTH - BALL_DIAMETER {
            ball.dx = -ball.dx;
        }
        if ball.y <= 0 {
            ball.dy = -ball.dy;
        }
    }

    fn check_floor(&mut self) {
        if self.ball.y < FIELD_HEIGHT {
            return;
        }
        self.run.lives = self.run.lives.saturating_sub(1);
        info!("ball lost, {} lives left", self.run.lives);
        self.ball = Ball::initial();
        self.paddle = Paddle::initial();
    }

    fn check_finished(&mut self) -> Option<Outcome> {
        let score = self.run.score;
        let outcome = if self.run.lives == 0 {
            Outcome::Lost { score }
        } else if self.bricks.all_destroyed() {
            Outcome::Won { score }
        } else {
            return None;
        };
        self.run.running = false;
        self.outcome = Some(outcome);
        info!("session over after {} ticks: {:?}", self.ticks, outcome);
        Some(outcome)
    }

    fn render_field(&self, width: usize, height: usize) -> Vec<Line<'static>> {
        let w = width;
        let h = height;

        let sx = w as f32 / FIELD_WIDTH as f32;
        let sy = h as f32 / FIELD_HEIGHT as f32;

        let blank = (' ', Style::default().bg(FIELD_BG));
        let mut grid: Vec<Vec<(char, Style)>> = vec![vec![blank; w]; h];

        if !self.run.running {
            let msg = "Game Over";
            let row = h / 2;
            let start = w.saturating_sub(msg.len()) / 2;
            let style = Style::default()
                .fg(Color::White)
                .bg(FIELD_BG)
                .add_modifier(Modifier::BOLD);
            if row < h {
                for (i, ch) in msg.chars().enumerate() {
                    if start + i < w {
                        grid[row][start + i] = (ch, style);
                    }
                }
            }
            return into_lines(grid);
        }

        // Bricks
        for (row, col) in self.bricks.alive_cells() {
            let (left, top, right, _) = BrickGrid::bounds(row, col);
            let bx_start = (left as f32 * sx) as usize;
            let bx_end = ((right as f32 * sx) as usize).min(w);
            let by = (top as f32 * sy) as usize;
            if by >= h {
                continue;
            }
            for bx in bx_start..bx_end {
                let ch = if bx == bx_start {
                    '▐'
                } else if bx + 1 >= bx_end {
                    '▌'
                } else {
                    '█'
                };
                grid[by][bx] = (ch, Style::default().fg(Color::Green).bg(FIELD_BG));
            }
        }

        // Paddle
        let px_start = (self.paddle.x as f32 * sx) as usize;
        let px_end = (((self.paddle.x + PADDLE_WIDTH) as f32 * sx) as usize).min(w);
        let py_start = (self.paddle.y as f32 * sy) as usize;
        let py_end = (((self.paddle.y + PADDLE_HEIGHT) as f32 * sy) as usize)
            .max(py_start + 1)
            .min(h);
        for py in py_start..py_end {
            for px in px_start..px_end {
                grid[py][px] = ('█', Style::default()
                    .fg(Color::Blue)
                    .bg(FIELD_BG)
                    .add_modifier(Modifier::BOLD));
            }
        }

        // Ball, drawn at the centre of its bounding box
        let cx = self.ball.x + BALL_DIAMETER / 2;
        let cy = self.ball.y + BALL_DIAMETER / 2;
        if cx >= 0 && cy >= 0 {
            let bx = (cx as f32 * sx) as usize;
            let by = (cy as f32 * sy) as usize;
            if bx < w && by < h {
                grid[by][bx] = ('●', Style::default()
                    .fg(Color::Red)
                    .bg(FIELD_BG)
                    .add_modifier(Modifier::BOLD));
            }
        }

        into_lines(grid)
    }
}

fn into_lines(grid: Vec<Vec<(char, Style)>>) -> Vec<Line<'static>> {
    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}

impl Default for Breakout {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Breakout {
    fn update(&mut self) {
        self.tick();
    }

    fn handle_input(&mut self, key: KeyEvent) {
        if !self.run.running {
            return;
        }
        match key.code {
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => self.toggle_pause(),
            KeyCode::Left => self.paddle.move_left(),
            KeyCode::Right => self.paddle.move_right(),
            _ => {}
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(220, 80, 80)))
            .title(" 🧱 Breakout Ball Game ")
            .title_style(Style::default().fg(Color::Rgb(255, 100, 100)).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(1)])
            .split(inner);

        let lines = self.render_field(chunks[0].width as usize, chunks[0].height as usize);
        frame.render_widget(Paragraph::new(lines), chunks[0]);

        let help = if self.run.paused {
            Line::from(vec![Span::styled(
                " ⏸ PAUSED - Press P to resume ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )])
        } else {
            Line::from(vec![
                Span::styled(" ←→ Move Paddle ", Style::default().fg(Color::DarkGray)),
                Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
                Span::styled("P/Space Pause ", Style::default().fg(Color::DarkGray)),
                Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
                Span::styled("Ctrl+C Quit", Style::default().fg(Color::DarkGray)),
            ])
        };
        frame.render_widget(Paragraph::new(help), chunks[1]);
    }

    fn get_score(&self) -> u32 {
        self.run.score
    }

    fn is_game_over(&self) -> bool {
        !self.run.running
    }
}
