//! Command-line interface writing generated tuples one per line

use crate::algorithm::{
    Length, combinations, combinations_with_replacement, permutations, product,
};
use crate::io::configuration::{
    DEFAULT_RANGE_STEP, FULL_LENGTH_SENTINEL, SET_DELIMITER, TUPLE_SEPARATOR,
};
use crate::io::error::{GeneratorError, Result, WithContext};
use crate::io::progress::EnumerationProgress;
use crate::sequence::{Cycle, range, range_step};
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Stream of string tuples with an optional exact length
type Tuples = (Box<dyn Iterator<Item = Vec<String>>>, Option<usize>);

#[derive(Parser)]
#[command(name = "itergen")]
#[command(
    author,
    version,
    about = "Enumerate ranges, cycles, products, permutations and combinations"
)]
/// Command-line arguments for the enumeration tool
pub struct Cli {
    /// Print only the number of tuples
    #[arg(short, long, global = true)]
    pub count: bool,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write tuples to this file instead of standard output
    #[arg(short, long, global = true, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Generator to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available generators
#[derive(Subcommand)]
pub enum Command {
    /// Arithmetic range: `range END` or `range START END [--step STEP]`
    #[command(allow_negative_numbers = true)]
    Range {
        /// End when given alone, otherwise start
        first: i64,
        /// Exclusive end
        second: Option<i64>,
        /// Distance between consecutive values; needs an explicit end
        #[arg(short, long, default_value_t = DEFAULT_RANGE_STEP, requires = "second")]
        step: i64,
    },

    /// Repeat items in order
    Cycle {
        /// Items to repeat
        #[arg(required = true)]
        items: Vec<String>,
        /// Number of values to produce
        #[arg(short, long)]
        take: usize,
    },

    /// Cartesian product of comma-separated sets
    Product {
        /// One set of items, e.g. `--set a,b`; repeat for each set
        #[arg(short = 's', long = "set", value_name = "ITEMS")]
        sets: Vec<String>,
    },

    /// Orderings of distinct items
    #[command(allow_negative_numbers = true)]
    Permutations(SelectionArgs),

    /// Subsets of distinct items in source order
    #[command(allow_negative_numbers = true)]
    Combinations(SelectionArgs),

    /// Non-decreasing selections with repeated items
    #[command(allow_negative_numbers = true)]
    Replacement(SelectionArgs),
}

/// Source items and tuple length shared by the selection generators
#[derive(Args)]
pub struct SelectionArgs {
    /// Source items
    pub items: Vec<String>,

    /// Tuple length, `-1` for the number of items
    #[arg(short, long, default_value_t = FULL_LENGTH_SENTINEL)]
    pub length: isize,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && !self.count && self.output.is_some()
    }

    /// Run the selected generator and write its output
    ///
    /// # Errors
    ///
    /// Returns an error if generator arguments are invalid or writing fails
    pub fn run(&self) -> Result<()> {
        match &self.output {
            Some(path) => {
                let file = File::create(path).map_err(|source| GeneratorError::Output {
                    path: Some(path.clone()),
                    source,
                })?;
                let mut writer = BufWriter::new(file);
                self.write_to(&mut writer)?;
                writer.flush().map_err(|source| self.output_error(source))
            }
            None => {
                let mut writer = std::io::stdout().lock();
                self.write_to(&mut writer)?;
                writer.flush().map_err(|source| self.output_error(source))
            }
        }
    }

    /// Write the generator output to `out`, returning the number of tuples produced
    ///
    /// # Errors
    ///
    /// Returns an error if generator arguments are invalid or writing fails
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<usize> {
        let (tuples, expected) = self.tuples()?;

        if self.count {
            let total = expected.unwrap_or_else(|| tuples.count());
            writeln!(out, "{total}").map_err(|source| self.output_error(source))?;
            return Ok(total);
        }

        let mut progress = EnumerationProgress::new(expected, self.should_show_progress());
        for tuple in tuples {
            writeln!(out, "{}", tuple.join(TUPLE_SEPARATOR))
                .map_err(|source| self.output_error(source))?;
            progress.record();
        }
        progress.finish();

        Ok(progress.written() as usize)
    }

    fn tuples(&self) -> Result<Tuples> {
        match &self.command {
            Command::Range {
                first,
                second,
                step,
            } => {
                let values = match second {
                    Some(end) => range_step(*first, *end, *step),
                    None => range(*first),
                };
                let tuples: Box<dyn Iterator<Item = Vec<String>>> =
                    Box::new(values.map(|value| vec![value.to_string()]));
                Ok((tuples, None))
            }
            Command::Cycle { items, take } => {
                let cycle = Cycle::new(items.clone())?;
                let tuples: Box<dyn Iterator<Item = Vec<String>>> =
                    Box::new(cycle.take(*take).map(|item| vec![item]));
                Ok((tuples, Some(*take)))
            }
            Command::Product { sets } => {
                let collections: Vec<Vec<String>> =
                    sets.iter().map(|set| split_set(set)).collect();
                Ok(boxed(product(&collections)))
            }
            Command::Permutations(args) => {
                Ok(boxed(permutations(&args.items, args.resolve_length()?)?))
            }
            Command::Combinations(args) => {
                Ok(boxed(combinations(&args.items, args.resolve_length()?)?))
            }
            Command::Replacement(args) => Ok(boxed(combinations_with_replacement(
                &args.items,
                args.resolve_length()?,
            ))),
        }
    }

    fn output_error(&self, source: std::io::Error) -> GeneratorError {
        GeneratorError::Output {
            path: self.output.clone(),
            source,
        }
    }
}

impl SelectionArgs {
    fn resolve_length(&self) -> Result<Length> {
        Length::from_catch_len(self.length).with_operation("command line")
    }
}

/// Items of one `--set` argument; an empty argument is an empty set
fn split_set(set: &str) -> Vec<String> {
    if set.is_empty() {
        return Vec::new();
    }
    set.split(SET_DELIMITER).map(str::to_owned).collect()
}

fn boxed<I>(tuples: I) -> Tuples
where
    I: Iterator<Item = Vec<String>> + 'static,
{
    let (lower, upper) = tuples.size_hint();
    let expected = upper.filter(|&upper| upper == lower);
    let tuples: Box<dyn Iterator<Item = Vec<String>>> = Box::new(tuples);
    (tuples, expected)
}
