use advcalc::prelude::*;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli", version = advcalc::VERSION)]
#[command(about = "Arithmetic with history and small 2D geometry")]
struct Cmd {
    /// Log progress to stderr at info level (default: warnings only)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Defaults to `demo` when omitted
    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Print the banner and the fixed sample results
    Demo,
    /// Print `Sum = a + b`
    Add {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Print `Product = a * b`
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Print the Euclidean distance between (x1, y1) and (x2, y2)
    Distance {
        #[arg(allow_negative_numbers = true)]
        x1: f64,
        #[arg(allow_negative_numbers = true)]
        y1: f64,
        #[arg(allow_negative_numbers = true)]
        x2: f64,
        #[arg(allow_negative_numbers = true)]
        y2: f64,
    },
    /// Print the area of a circle with the given radius
    Area {
        #[arg(allow_negative_numbers = true)]
        radius: f64,
    },
    /// Print sum and average of the values
    Stats {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::INFO } else { Level::WARN };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cmd.action.unwrap_or(Action::Demo) {
        Action::Demo => demo(),
        Action::Add { a, b } => {
            tracing::info!(a, b, "add");
            let mut acc = Accumulator::new();
            print_lines([format_result("Sum", acc.add(a, b))]);
            Ok(())
        }
        Action::Multiply { a, b } => {
            tracing::info!(a, b, "multiply");
            let mut acc = Accumulator::new();
            print_lines([format_result("Product", acc.multiply(a, b))]);
            Ok(())
        }
        Action::Distance { x1, y1, x2, y2 } => {
            tracing::info!(x1, y1, x2, y2, "distance");
            let d = distance(Point::new(x1, y1), Point::new(x2, y2));
            print_lines([format_result("Distance", d)]);
            Ok(())
        }
        Action::Area { radius } => {
            tracing::info!(radius, "area");
            print_lines([format_result("Area", area(radius))]);
            Ok(())
        }
        Action::Stats { values } => {
            tracing::info!(count = values.len(), "stats");
            let avg = average(&values).context("value count not representable as f64")?;
            print_lines([
                format_result("Sum", sum(&values)),
                format_result("Average", avg),
            ]);
            Ok(())
        }
    }
}

fn demo() -> Result<()> {
    let run = DemoRun::run();
    tracing::info!(history_len = run.history.len(), "demo");
    print_lines(run.lines());
    Ok(())
}

fn print_lines<I>(lines: I)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for line in lines {
        println!("{}", line.as_ref());
    }
}
