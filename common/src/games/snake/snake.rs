use std::collections::{HashSet, VecDeque};

use super::types::{Direction, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub body_set: HashSet<Point>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
}

impl Snake {
    pub fn new(start_pos: Point, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();
        body.push_back(start_pos);
        body_set.insert(start_pos);

        Self {
            body,
            body_set,
            direction,
            pending_direction: None,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn occupies(&self, pos: Point) -> bool {
        self.body_set.contains(&pos)
    }

    pub fn push_head(&mut self, pos: Point) {
        self.body.push_front(pos);
        self.body_set.insert(pos);
    }

    pub fn pop_tail(&mut self) {
        let tail = self
            .body
            .pop_back()
            .expect("Snake body should never be empty");
        self.body_set.remove(&tail);
    }
}
