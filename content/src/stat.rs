use serde::Serialize;

// display-only statistic; the value is kept as text and never computed on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    pub value: &'static str,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[StatEntry] = &[
    StatEntry {
        value: "5",
        suffix: "+",
        label: "Years experience",
    },
    StatEntry {
        value: "2",
        suffix: ".1M",
        label: "YouTube tutorial views",
    },
    StatEntry {
        value: "4",
        suffix: "×",
        label: "Languages spoken",
    },
    StatEntry {
        value: "3",
        suffix: "+",
        label: "Industries shipped",
    },
];
