#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Ended within the escape radius once every iteration was run.
    Member,
    Escaped,
}
