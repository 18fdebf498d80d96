use ::std::path::PathBuf;
use clap::Parser;
use common_types::Generate::{DEFAULT_EXERCISE_COUNT, DEFAULT_MAX_NUMBER};
use worksheet_generate::render::{parse_columns, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "worksheet-generate",
    about = "Generate printable addition and subtraction practice sheets",
    version
)]
pub struct Cli {
    /// Number of exercises on the sheet
    #[arg(long, default_value_t = DEFAULT_EXERCISE_COUNT, allow_negative_numbers = true)]
    pub count: i64,

    /// Largest number that may appear: 20 or 100
    #[arg(long, default_value_t = DEFAULT_MAX_NUMBER)]
    pub range: i64,

    /// Comma separated categories: AddNoCarry, AddCarry, SubNoBorrow, SubBorrow
    #[arg(long, default_value = "AddNoCarry,AddCarry,SubNoBorrow,SubBorrow")]
    pub categories: String,

    /// Blank out operand one, operand two or the result at random
    #[arg(long)]
    pub random_answer_position: bool,

    /// pdf, text, json or archive (defaults to WORKSHEET_FORMAT, then pdf)
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to a name derived from range and count inside WORKSHEET_OUTPUT_DIR)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Columns in the exercise grid (defaults to WORKSHEET_COLUMNS, then 4)
    #[arg(long, value_parser = parse_columns)]
    pub columns: Option<usize>,

    /// Seed for a reproducible sheet
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log fallbacks and layout details
    #[arg(long, short)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_sheet() {
        let cli = Cli::try_parse_from(["worksheet-generate"]).unwrap();
        assert_eq!(cli.count, 80);
        assert_eq!(cli.range, 20);
        assert!(!cli.random_answer_position);
        assert!(cli.format.is_none());
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "worksheet-generate", "--count", "100", "--range", "100", "--categories", "AddCarry,sub_borrow",
            "--random-answer-position", "--format", "text", "--seed", "7", "-o", "sheet.txt",
        ]).unwrap();
        assert_eq!(cli.count, 100);
        assert_eq!(cli.format, Some(OutputFormat::Text));
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.output, Some(PathBuf::from("sheet.txt")));
        assert!(cli.random_answer_position);
    }

    #[test]
    fn zero_columns_is_rejected() {
        assert!(Cli::try_parse_from(["worksheet-generate", "--columns", "0"]).is_err());
        let cli = Cli::try_parse_from(["worksheet-generate", "--columns", "2"]).unwrap();
        assert_eq!(cli.columns, Some(2));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["worksheet-generate", "--format", "docx"]).is_err());
    }
}
