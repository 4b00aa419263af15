use std::path::PathBuf;

use cfspeed::args::BenchArgs;

pub(in crate::entry) struct SummaryPlan {
    pub(super) files: Vec<PathBuf>,
    pub(super) out: PathBuf,
    pub(super) diagnostics: bool,
}

pub(in crate::entry) struct BenchmarkPlan {
    pub(super) args: BenchArgs,
    pub(super) flags: Vec<String>,
}

pub(in crate::entry) enum RunPlan {
    SummaryTable(SummaryPlan),
    SysinfoOnly { mask_sensitive: bool },
    Benchmark(Box<BenchmarkPlan>),
}
