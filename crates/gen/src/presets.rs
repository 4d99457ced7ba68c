/// Parameters of a generated graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Input {
    pub name: &'static str,
    pub low: i64,
    pub high: i64,
    pub vertex_count: usize,
    pub edge_count: usize,
}

/// 1 000 vertices from `[0, 10 000]` connected by 1 000 edges.
pub const USE_CASE: Input = Input {
    name: "use_case",
    low: 0,
    high: 10_000,
    vertex_count: 1_000,
    edge_count: 1_000,
};

pub const SMALL: Input = Input {
    name: "small",
    low: 0,
    high: 10_000,
    vertex_count: 1_000,
    edge_count: 10_000,
};

pub const MEDIUM: Input = Input {
    name: "medium",
    low: 0,
    high: 100_000,
    vertex_count: 10_000,
    edge_count: 100_000,
};

pub const LARGE: Input = Input {
    name: "large",
    low: 0,
    high: 1_000_000,
    vertex_count: 100_000,
    edge_count: 1_000_000,
};

pub const ALL: [Input; 4] = [USE_CASE, SMALL, MEDIUM, LARGE];

impl Input {
    pub fn by_name(name: &str) -> Option<Input> {
        ALL.into_iter().find(|input| input.name == name)
    }
}
