use clap::ValueEnum;

pub const DEFAULT_PRECISION: usize = 5;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum OutputStyle {
    Expanded,
    #[default]
    Compressed,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompileOptions {
    output_style: OutputStyle,
    precision: usize,
    source_comments: bool,
}

impl CompileOptions {
    pub fn new(output_style: OutputStyle, precision: usize, source_comments: bool) -> Self {
        Self {
            output_style,
            precision,
            source_comments,
        }
    }

    pub fn output_style(&self) -> OutputStyle {
        self.output_style
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn source_comments(&self) -> bool {
        self.source_comments
    }
}
