use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use eyre::Result;
use futures::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Paragraph},
};

use crate::hardware::fan_sim::FanSim;

use self::bindings::Button;

pub mod bindings;

const GRID_COLUMNS: usize = 4;
const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;

pub async fn run(fan: FanSim) -> Result<()> {
    let terminal = ratatui::init();
    let result = App::new(fan).run(terminal).await;

    ratatui::restore();
    result
}

struct App {
    fan: FanSim,
    buttons: Vec<Button>,
    cursor: usize,
    last_sent: Option<Button>,
}

impl App {
    fn new(fan: FanSim) -> Self {
        App {
            fan,
            buttons: Button::all(),
            cursor: 0,
            last_sent: None,
        }
    }

    async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut events = EventStream::new();

        loop {
            terminal.draw(|frame| self.draw(frame))?;

            let Some(event) = events.next().await else {
                break;
            };

            let Event::Key(key) = event? else {
                continue;
            };

            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Esc | KeyCode::Char('q') => break,
                KeyCode::Enter | KeyCode::Char(' ') => self.press(),

                KeyCode::Left => self.step(-1),
                KeyCode::Right => self.step(1),
                KeyCode::Up => self.step(-(GRID_COLUMNS as isize)),
                KeyCode::Down => self.step(GRID_COLUMNS as isize),

                _ => {}
            }
        }

        Ok(())
    }

    fn press(&mut self) {
        let button = self.buttons[self.cursor];

        self.fan.dispatch(button.command());
        self.last_sent = Some(button);
    }

    fn step(&mut self, delta: isize) {
        let last = self.buttons.len() as isize - 1;
        self.cursor = (self.cursor as isize + delta).clamp(0, last) as usize;
    }

    /* == Rendering == */

    fn draw(&self, frame: &mut Frame) {
        let [power_area, temp_area, footer] = Layout::vertical([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(4 * CELL_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.draw_row(frame, power_area, 0, 2);

        let rows = Layout::vertical([Constraint::Length(CELL_HEIGHT); 4]).split(temp_area);

        for (i, row) in rows.iter().enumerate() {
            self.draw_row(frame, *row, 2 + i * GRID_COLUMNS, GRID_COLUMNS);
        }

        let line = match self.last_sent {
            Some(button) => Line::from(format!(" sent {button}  (q quits)")),
            None => Line::from(" arrows move, enter presses, q quits"),
        };

        frame.render_widget(line, footer);
    }

    fn draw_row(&self, frame: &mut Frame, area: Rect, start: usize, count: usize) {
        let cells = Layout::horizontal(vec![Constraint::Length(CELL_WIDTH); count]).split(area);

        for (slot, cell) in cells.iter().enumerate() {
            let index = start + slot;

            let Some(button) = self.buttons.get(index).copied() else {
                break;
            };

            let style = match index == self.cursor {
                true => Style::new().reversed().bold(),
                false => Style::new(),
            };

            let widget = Paragraph::new(button.label())
                .centered()
                .style(style)
                .block(Block::bordered());

            frame.render_widget(widget, *cell);
        }
    }
}
