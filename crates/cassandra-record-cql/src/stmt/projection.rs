/// What a `SELECT` returns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Projection {
    /// `*`
    #[default]
    All,

    /// An explicit column list
    Columns(Vec<String>),

    /// `COUNT(*)`
    Count,
}

impl Projection {
    pub fn is_all(&self) -> bool {
        matches!(self, Projection::All)
    }
}
