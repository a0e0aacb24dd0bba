//! Resolved path commands and the immutable path description.
//!
//! A [`PathData`] is what [`PathBuilder::build`](crate::PathBuilder::build)
//! hands to a renderer. It serializes to the compact single-letter form used
//! in SVG `d` attributes (`M0,0L100,0Q100,0,100,10Z`) and parses back from it.

use crate::error::PathParseError;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One drawing command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadraticTo { ctrl: Point, to: Point },
    ClosePath,
}

impl PathCommand {
    /// Single-letter code used in the serialized form.
    pub fn code(&self) -> char {
        match self {
            PathCommand::MoveTo(_) => 'M',
            PathCommand::LineTo(_) => 'L',
            PathCommand::QuadraticTo { .. } => 'Q',
            PathCommand::ClosePath => 'Z',
        }
    }

    /// Point the pen is at after this command, if the command moves it.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::QuadraticTo { to, .. } => Some(to),
            PathCommand::ClosePath => None,
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                write!(f, "{}{},{}", self.code(), format_coord(p.x), format_coord(p.y))
            }
            PathCommand::QuadraticTo { ctrl, to } => write!(
                f,
                "Q{},{},{},{}",
                format_coord(ctrl.x),
                format_coord(ctrl.y),
                format_coord(to.x),
                format_coord(to.y)
            ),
            PathCommand::ClosePath => write!(f, "Z"),
        }
    }
}

/// Format a coordinate: integers without a decimal point, otherwise at most
/// three decimals with trailing zeros removed.
pub fn format_coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    if rounded.fract() == 0.0 && rounded.abs() < 1e15 {
        return format!("{}", rounded as i64);
    }
    let s = format!("{:.3}", rounded);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Axis-aligned bounding box of a path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// An immutable, ordered path description.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    /// Where the path begins (its first move).
    pub fn start(&self) -> Option<Point> {
        match self.commands.first() {
            Some(PathCommand::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// Last point reached by the pen.
    pub fn end_point(&self) -> Option<Point> {
        self.commands.iter().rev().find_map(PathCommand::end_point)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::ClosePath))
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_)))
            .count()
    }

    pub fn quadratic_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::QuadraticTo { .. }))
            .count()
    }

    /// Total length of the straight `LineTo` portions.
    pub fn straight_length(&self) -> f64 {
        let mut pen = Point::ORIGIN;
        let mut subpath_start = Point::ORIGIN;
        let mut total = 0.0;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    pen = p;
                    subpath_start = p;
                }
                PathCommand::LineTo(p) => {
                    total += pen.distance_to(&p);
                    pen = p;
                }
                PathCommand::QuadraticTo { to, .. } => pen = to,
                PathCommand::ClosePath => pen = subpath_start,
            }
        }
        total
    }

    /// Convert to a lyon path for geometric queries.
    pub fn to_lyon(&self) -> lyon::path::Path {
        let mut builder = lyon::path::Path::builder();
        let mut open = false;
        let mut pen = Point::ORIGIN;
        let mut subpath_start = Point::ORIGIN;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    if open {
                        builder.end(false);
                    }
                    builder.begin(p.into());
                    open = true;
                    pen = p;
                    subpath_start = p;
                }
                PathCommand::LineTo(p) => {
                    if !open {
                        builder.begin(pen.into());
                        open = true;
                    }
                    builder.line_to(p.into());
                    pen = p;
                }
                PathCommand::QuadraticTo { ctrl, to } => {
                    if !open {
                        builder.begin(pen.into());
                        open = true;
                    }
                    builder.quadratic_bezier_to(ctrl.into(), to.into());
                    pen = to;
                }
                PathCommand::ClosePath => {
                    if open {
                        builder.end(true);
                        open = false;
                    }
                    // Drawing after a close resumes from the subpath start.
                    pen = subpath_start;
                }
            }
        }
        if open {
            builder.end(false);
        }
        builder.build()
    }

    /// Tight bounding box of the drawn geometry, `None` when nothing is drawn.
    pub fn bounds(&self) -> Option<Bounds> {
        let draws = self.commands.iter().any(|c| {
            matches!(
                c,
                PathCommand::LineTo(_) | PathCommand::QuadraticTo { .. }
            )
        });
        if !draws {
            return None;
        }
        let path = self.to_lyon();
        let bb = lyon::algorithms::aabb::bounding_box(path.iter());
        Some(Bounds {
            min_x: bb.min.x as f64,
            min_y: bb.min.y as f64,
            max_x: bb.max.x as f64,
            max_y: bb.max.y as f64,
        })
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cmd in &self.commands {
            write!(f, "{}", cmd)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PathData {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

enum Token {
    Command(char, usize),
    Number(f64),
}

fn tokenize(s: &str) -> Result<Vec<Token>, PathParseError> {
    let mut tokens = Vec::new();
    let mut buf = String::new();

    let flush = |buf: &mut String, tokens: &mut Vec<Token>| -> Result<(), PathParseError> {
        if buf.is_empty() {
            return Ok(());
        }
        let value = buf
            .parse::<f64>()
            .map_err(|_| PathParseError::InvalidNumber(buf.clone()))?;
        tokens.push(Token::Number(value));
        buf.clear();
        Ok(())
    };

    for (offset, c) in s.char_indices() {
        if c.is_whitespace() || c == ',' {
            flush(&mut buf, &mut tokens)?;
        } else if c.is_ascii_alphabetic() && !((c == 'e' || c == 'E') && !buf.is_empty()) {
            flush(&mut buf, &mut tokens)?;
            tokens.push(Token::Command(c, offset));
        } else {
            buf.push(c);
        }
    }
    flush(&mut buf, &mut tokens)?;
    Ok(tokens)
}

fn operand_count(command: char) -> Option<usize> {
    match command {
        'M' | 'L' => Some(2),
        'Q' => Some(4),
        'Z' => Some(0),
        _ => None,
    }
}

impl FromStr for PathData {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(s)?;
        if tokens.is_empty() {
            return Err(PathParseError::Empty);
        }

        let mut commands = Vec::new();
        let mut iter = tokens.into_iter().peekable();
        while let Some(token) = iter.next() {
            let (mut command, offset) = match token {
                Token::Command(c, offset) => (c, offset),
                Token::Number(n) => return Err(PathParseError::InvalidNumber(n.to_string())),
            };
            let expected = operand_count(command)
                .ok_or(PathParseError::UnexpectedCommand { command, offset })?;

            if expected == 0 {
                commands.push(PathCommand::ClosePath);
                continue;
            }

            // Extra operand groups repeat the command; after a move they are lines.
            loop {
                let mut operands = Vec::with_capacity(expected);
                while operands.len() < expected {
                    match iter.next() {
                        Some(Token::Number(n)) => operands.push(n),
                        _ => return Err(PathParseError::MissingOperand { command, expected }),
                    }
                }
                commands.push(match command {
                    'M' => PathCommand::MoveTo(Point::new(operands[0], operands[1])),
                    'L' => PathCommand::LineTo(Point::new(operands[0], operands[1])),
                    _ => PathCommand::QuadraticTo {
                        ctrl: Point::new(operands[0], operands[1]),
                        to: Point::new(operands[2], operands[3]),
                    },
                });
                if !matches!(iter.peek(), Some(Token::Number(_))) {
                    break;
                }
                if command == 'M' {
                    command = 'L';
                }
            }
        }

        Ok(PathData::new(commands))
    }
}

/// Check that a serialized path description parses and starts with a move.
pub fn validate_path(path: &str) -> bool {
    match path.parse::<PathData>() {
        Ok(data) => data.start().is_some(),
        Err(_) => false,
    }
}
