//! Interactive session: one viewer event per input line.
//!
//! Lines are parsed into [`SessionCommand`]s and fed to the viewer one at a
//! time. The screen is re-rendered whenever an event changed something.

use crate::core::{
    command_init::{ViewerInit, ViewerOptions},
    error::Result,
    gesture::Point,
    output::{write_screen, write_usage},
    viewer::{ArrowKey, Focus, Viewer, ViewerEvent},
};
use rand::Rng;
use std::io::{self, BufRead, Write};

const SESSION_USAGE: &[(&str, &str)] = &[
    ("next, n", "next grammar point"),
    ("prev, p", "previous grammar point"),
    ("right, left", "arrow keys"),
    ("jump <number>", "go to a grammar point by number"),
    ("details, d", "show or hide details"),
    ("reveal, r", "show or hide the translation"),
    ("touch start <x> <y>", "begin a touch"),
    ("touch move <x> <y>", "move the touch point"),
    ("touch end", "release the touch"),
    ("swipe <x0> <y0> <x1> <y1>", "a complete touch gesture"),
    ("show", "print the current screen"),
    ("retry", "recover after a rendering error"),
    ("quit, q", "leave the session"),
];

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Event(ViewerEvent),
    Swipe { from: Point, to: Point },
    Show,
    Help,
    Quit,
    Blank,
    Unknown(String),
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Self::Blank;
        };
        let args: Vec<&str> = words.collect();

        match (command, args.as_slice()) {
            ("next" | "n", []) => Self::Event(ViewerEvent::Next),
            ("prev" | "p", []) => Self::Event(ViewerEvent::Previous),
            ("right", []) => Self::Event(ViewerEvent::Key {
                key: ArrowKey::Right,
                focus: Focus::Viewport,
            }),
            ("left", []) => Self::Event(ViewerEvent::Key {
                key: ArrowKey::Left,
                focus: Focus::Viewport,
            }),
            ("jump", _) => {
                let input = line["jump".len()..].trim();
                Self::Event(ViewerEvent::SubmitJump(input.to_string()))
            }
            ("details" | "d", []) => Self::Event(ViewerEvent::ToggleDetails),
            ("reveal" | "r", []) => Self::Event(ViewerEvent::ToggleTranslation),
            ("touch", ["start", x, y]) => match parse_point(x, y) {
                Some(point) => Self::Event(ViewerEvent::PointerStart(point)),
                None => Self::Unknown(line.to_string()),
            },
            ("touch", ["move", x, y]) => match parse_point(x, y) {
                Some(point) => Self::Event(ViewerEvent::PointerMove(point)),
                None => Self::Unknown(line.to_string()),
            },
            ("touch", ["end"]) => Self::Event(ViewerEvent::PointerEnd),
            ("swipe", [x0, y0, x1, y1]) => match (parse_point(x0, y0), parse_point(x1, y1)) {
                (Some(from), Some(to)) => Self::Swipe { from, to },
                _ => Self::Unknown(line.to_string()),
            },
            ("show", []) => Self::Show,
            ("retry", []) => Self::Event(ViewerEvent::Retry),
            ("help" | "?", []) => Self::Help,
            ("quit" | "q" | "exit", []) => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

fn parse_point(x: &str, y: &str) -> Option<Point> {
    let x = x.parse::<f64>().ok().filter(|v| v.is_finite())?;
    let y = y.parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some(Point::new(x, y))
}

pub fn execute_session(options: &ViewerOptions) -> Result<()> {
    let mut viewer = ViewerInit::initialize(options)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(&mut viewer, stdin.lock(), &mut stdout)
}

/// Drive the viewer from `input` until `quit` or end of input
pub fn run_session<R, I>(viewer: &mut Viewer<R>, input: I, out: &mut dyn Write) -> Result<()>
where
    R: Rng,
    I: BufRead,
{
    write_screen(out, &viewer.render())?;

    for line in input.lines() {
        let line = line?;
        let changed = match SessionCommand::parse(&line) {
            SessionCommand::Quit => break,
            SessionCommand::Blank => false,
            SessionCommand::Show => true,
            SessionCommand::Help => {
                write_usage(out, "Commands:", SESSION_USAGE)?;
                false
            }
            SessionCommand::Unknown(text) => {
                write_usage(out, &format!("Unknown command: {text}"), SESSION_USAGE)?;
                false
            }
            SessionCommand::Swipe { from, to } => {
                viewer.handle(ViewerEvent::PointerStart(from));
                viewer.handle(ViewerEvent::PointerMove(to));
                viewer.handle(ViewerEvent::PointerEnd)
            }
            SessionCommand::Event(event) => viewer.handle(event),
        };

        if changed {
            write_screen(out, &viewer.render())?;
        }
        out.flush()?;
    }

    log::debug!("Session ended");
    Ok(())
}
