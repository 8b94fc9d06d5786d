//! shuffle-major CLI - plan and apply traversal orders over a rows x cols grid.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use shuffle_major::{
    build_unchecked, flatten, make_grid, recursion_depth, validate_plan, AccessOrder, Bases,
    GridStore, Size,
};

#[derive(Parser)]
#[command(name = "shuffle-major")]
#[command(about = "Plan block-recursive traversal orders over a 2D grid")]
struct Cli {
    /// Number of grid rows
    rows: usize,

    /// Number of grid columns
    cols: usize,

    /// Block factors per recursion level, as ROWS,COLS
    #[arg(short, long, default_value = "4,4", value_parser = parse_bases)]
    bases: Bases,

    /// Visitation order to apply
    #[arg(short, long, value_enum, default_value_t = OrderKind::BlockRecursive)]
    order: OrderKind,

    /// Report the raw block-recursive sequence without the permutation check
    /// (always block-recursive, so it cannot be combined with --order)
    #[arg(long, conflicts_with = "order")]
    unchecked: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderKind {
    RowMajor,
    BlockRecursive,
}

fn parse_bases(s: &str) -> Result<Bases, String> {
    let (rows, cols) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROWS,COLS, got '{s}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid block factor '{part}': {e}"))
    };
    Bases::new(parse(rows)?, parse(cols)?).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    run(&Cli::parse())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let size = Size::new(cli.rows, cli.cols)?;

    if cli.unchecked {
        let raw = build_unchecked(size, cli.bases)?;
        let verdict = match validate_plan(size, &raw) {
            Ok(()) => "permutation".to_string(),
            Err(err) => err.to_string(),
        };
        println!(
            "raw plan: {} coordinates for {} cells ({verdict})",
            raw.len(),
            size.cell_count()?
        );
        return Ok(());
    }

    let order = match cli.order {
        OrderKind::RowMajor => AccessOrder::row_major(size)?,
        OrderKind::BlockRecursive => AccessOrder::block_recursive(size, cli.bases)
            .with_context(|| format!("planning {size} grid with bases {}", cli.bases))?,
    };

    let grid: GridStore<u64> = make_grid(cli.rows, cli.cols)?;
    let flat = flatten(&grid, &order)?;

    println!("order: {}", order.name());
    println!("size: {size}, cells: {}", flat.len());
    if let AccessOrder::BlockRecursive(_) = order {
        println!(
            "bases: {}, depth: {}",
            cli.bases,
            recursion_depth(size, cli.bases)?
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shuffle_major::GridError;

    #[test]
    fn test_parse_bases_accepts_trimmed_pair() {
        assert_eq!(parse_bases(" 2 , 3 ").unwrap(), Bases::new(2, 3).unwrap());
        assert_eq!(parse_bases("4,4").unwrap(), Bases::default());
    }

    #[test]
    fn test_parse_bases_errors() {
        let err = parse_bases("0,2").unwrap_err();
        assert_eq!(err, "invalid bases 0x2: block factors must be at least 1");

        assert!(parse_bases("2").unwrap_err().contains("expected ROWS,COLS"));
        assert!(parse_bases("a,b")
            .unwrap_err()
            .contains("invalid block factor 'a'"));
        assert!(parse_bases("-1,2")
            .unwrap_err()
            .contains("invalid block factor '-1'"));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["shuffle-major", "4", "4"]).unwrap();
        assert_eq!((cli.rows, cli.cols), (4, 4));
        assert_eq!(cli.bases, Bases::default());
        assert!(matches!(cli.order, OrderKind::BlockRecursive));
        assert!(!cli.unchecked);
        assert!(run(&cli).is_ok());
    }

    #[test]
    fn test_cli_zero_rows_fails_in_run() {
        let cli = Cli::try_parse_from(["shuffle-major", "0", "4"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GridError>(),
            Some(&GridError::InvalidDimension { rows: 0, cols: 4 })
        );
    }

    #[test]
    fn test_cli_rejects_bad_bases_flag() {
        assert!(Cli::try_parse_from(["shuffle-major", "4", "4", "--bases", "0,2"]).is_err());
        let cli = Cli::try_parse_from(["shuffle-major", "8", "8", "-b", "2,2"]).unwrap();
        assert_eq!(cli.bases, Bases::new(2, 2).unwrap());
    }

    #[test]
    fn test_cli_unchecked_conflicts_with_order() {
        let args = ["shuffle-major", "4", "4", "--unchecked", "--order", "row-major"];
        let err = Cli::try_parse_from(args).map(|_| ()).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

        let cli = Cli::try_parse_from(["shuffle-major", "3", "3", "--unchecked", "-b", "2,2"])
            .unwrap();
        assert!(run(&cli).is_ok());
    }

    #[test]
    fn test_run_uneven_plan_carries_context() {
        let cli = Cli::try_parse_from(["shuffle-major", "3", "3", "-b", "2,2"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("planning 3x3 grid with bases 2x2"));
        assert!(matches!(
            err.downcast_ref::<GridError>(),
            Some(GridError::MalformedPlan { .. })
        ));
    }
}
