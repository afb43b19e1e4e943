#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
}
