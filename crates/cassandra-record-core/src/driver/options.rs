/// Consistency level requested for a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Consistency {
    Any,
    One,
    Two,
    Three,
    Quorum,
    All,
    LocalQuorum,
    EachQuorum,
    LocalOne,
    Serial,
    LocalSerial,
}

/// Opaque driver token identifying where the next page of a result starts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PagingState(pub Vec<u8>);

/// Per-statement execution options handed to the driver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOptions {
    /// Maximum number of rows per page. `None` leaves it to the driver.
    pub page_size: Option<usize>,

    /// Resume a paged result at this position.
    pub paging_state: Option<PagingState>,

    /// Consistency level. `None` leaves it to the driver.
    pub consistency: Option<Consistency>,
}

impl ExecOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn paging_state(mut self, paging_state: Option<PagingState>) -> Self {
        self.paging_state = paging_state;
        self
    }

    pub fn consistency(mut self, consistency: Option<Consistency>) -> Self {
        self.consistency = consistency;
        self
    }
}
