#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The record is dropped.
    Discard,
    /// The record is written to the unmatched output.
    NoMatch,
    /// The record is written to the matched output.
    Match,
}
