//! Obstacle maps drawn as ASCII art.
//!
//! Each line is one row (row 0 at the top), each character one world cell:
//! `.` is free, `*` and `#` are blocked.

use std::fmt;

use sightgrid_core::{Point, Range};

use crate::error::MapError;
use crate::traits::Obstacles;

const FREE: char = '.';
const BLOCKED: [char; 2] = ['*', '#'];

/// A rectangular blocked/free map parsed from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharMap {
    cells: Vec<bool>,
    width: i32,
    height: i32,
}

impl CharMap {
    /// Parse a map.
    ///
    /// Leading and trailing blank lines are ignored and a trailing `\r` is
    /// stripped from every line. All remaining lines must have the same
    /// width.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let lines: Vec<&str> = s
            .trim_matches('\n')
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .collect();
        let width = lines.first().map_or(0, |l| l.chars().count());
        if width == 0 {
            return Err(MapError::Empty);
        }

        let mut cells = Vec::with_capacity(width * lines.len());
        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MapError::InconsistentWidth {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let blocked = match ch {
                    FREE => false,
                    c if BLOCKED.contains(&c) => true,
                    _ => {
                        return Err(MapError::InvalidChar {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                };
                cells.push(blocked);
            }
        }

        Ok(Self {
            cells,
            width: width as i32,
            height: lines.len() as i32,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The rectangle the map covers.
    pub fn range(&self) -> Range {
        Range::sized(self.width, self.height)
    }

    /// Whether `p` is blocked. Points off the map are blocked.
    #[inline]
    pub fn blocked(&self, p: Point) -> bool {
        if !self.range().contains(p) {
            return true;
        }
        self.cells[(p.y * self.width + p.x) as usize]
    }
}

impl Obstacles for CharMap {
    #[inline]
    fn is_blocked(&self, p: Point) -> bool {
        self.blocked(p)
    }
}

impl fmt::Display for CharMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                let ch = if self.blocked(Point::new(x, y)) { BLOCKED[0] } else { FREE };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
