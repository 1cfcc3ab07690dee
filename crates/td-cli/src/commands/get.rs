use clap::Args;
use td_random::{Base, Format, RandomRequest, Randomization, RequestKind};

use crate::GlobalArgs;

/// Arguments for `truedice get`.
#[derive(Args)]
pub struct GetArgs {
    /// What to request: integers, sequences, or strings (int, seq, str)
    pub kind: String,

    /// Number of integers or strings
    #[arg(short, long, default_value = "1")]
    pub num: u32,

    /// Smallest value (integers and sequences)
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    pub min: i64,

    /// Largest value (integers and sequences)
    #[arg(long, default_value = "2", allow_negative_numbers = true)]
    pub max: i64,

    /// Columns the service lays values out in
    #[arg(long, default_value = "1")]
    pub col: u32,

    /// Length of each string
    #[arg(short, long, default_value = "10")]
    pub len: u32,

    /// Leave digits out of strings
    #[arg(long)]
    pub no_digits: bool,

    /// Leave uppercase letters out of strings
    #[arg(long)]
    pub no_upper: bool,

    /// Leave lowercase letters out of strings
    #[arg(long)]
    pub no_lower: bool,

    /// Allow repeated strings
    #[arg(long)]
    pub no_unique: bool,

    /// Output base for integers: 2, 8, 10, or 16
    #[arg(long, default_value = "10")]
    pub base: u32,

    /// Ask the service for an HTML page instead of plain text
    #[arg(long)]
    pub html: bool,

    /// Randomization: new, id.<identifier>, or date.<today|yesterday|YYYY-MM-DD>
    #[arg(long, default_value = "new")]
    pub rnd: String,
}

impl GetArgs {
    /// Build the request these arguments describe.
    fn to_request(&self) -> Result<RandomRequest, String> {
        let kind: RequestKind = self.kind.parse().map_err(|e| format!("{e}"))?;
        let base = Base::try_from(self.base).map_err(|e| e.to_string())?;
        let rnd: Randomization = self.rnd.parse().map_err(|e| format!("{e}"))?;
        let format = if self.html { Format::Html } else { Format::Plain };

        let req = RandomRequest::new(kind)
            .with_count(self.num)
            .with_range(self.min, self.max)
            .with_columns(self.col)
            .with_length(self.len)
            .with_alphabet(!self.no_digits, !self.no_upper, !self.no_lower)
            .with_unique(!self.no_unique)
            .with_base(base)
            .with_format(format)
            .with_randomization(rnd);
        req.validate().map_err(|e| e.to_string())?;
        Ok(req)
    }
}

pub fn run(global: &GlobalArgs, args: GetArgs) -> Result<(), String> {
    let req = args.to_request()?;
    let mut source = super::open_source(global)?;
    let result = source.request(&req).map_err(|e| e.to_string())?;

    if global.json {
        let json = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    super::print_alert(&result);
    for value in &result.values {
        println!("{value}");
    }
    Ok(())
}
