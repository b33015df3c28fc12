mod outcome;

pub use self::outcome::Outcome;

#[derive(Debug, Default, Eq, PartialEq)]
pub struct Context {
    pub discarded: u64,
    pub unmatched: u64,
    pub matched: u64,
}

impl Context {
    pub fn add_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Discard => self.discarded += 1,
            Outcome::NoMatch => self.unmatched += 1,
            Outcome::Match => self.matched += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.discarded + self.unmatched + self.matched
    }
}
