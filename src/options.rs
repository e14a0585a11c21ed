#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Options {
    pub debug: bool,
    pub quiet: bool,
    pub log_prefix: Option<String>,
}
