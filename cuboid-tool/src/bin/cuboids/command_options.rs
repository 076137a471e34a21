//! Command line option parsing.

use std::path::PathBuf;

use clap::Parser;

use cuboid_algebra::math::PointCount;
use cuboid_tool::Report;
use cuboid_tool::logging::LoggingArgs;

#[derive(Clone, Debug, Parser)]
#[command(author, about, version)]
pub(crate) struct CuboidsArgs {
    /// Script of cuboids to add and remove, one per line.
    ///
    /// Each line is an action (`on`, `add` or `+` to add; `off`, `remove` or `-` to remove)
    /// followed by a cuboid written as `x1,y1,z1,x2,y2,z2`. A line with only a cuboid adds it.
    /// Blank lines and lines starting with `#` are ignored.
    ///
    /// If omitted or `-`, the script is read from standard input.
    #[arg(value_name = "FILE")]
    pub(crate) input: Option<PathBuf>,

    /// What to print about the resulting region.
    #[arg(long = "report", short = 'r', value_enum, default_value_t = Report::PointsCount)]
    pub(crate) report: Report,

    /// Largest number of points `--report points` will list.
    #[arg(long = "points-limit", value_name = "N", default_value_t = 100_000)]
    pub(crate) points_limit: PointCount,

    #[command(flatten)]
    pub(crate) logging: LoggingArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory as _;

    #[test]
    fn command_is_valid() {
        CuboidsArgs::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = CuboidsArgs::try_parse_from(["cuboids"]).unwrap();
        assert_eq!(args.input, None);
        assert_eq!(args.report, Report::PointsCount);
        assert_eq!(args.points_limit, 100_000);
        assert_eq!(args.logging.verbose, 0);
    }

    #[test]
    fn report_names() {
        let args =
            CuboidsArgs::try_parse_from(["cuboids", "--report", "points-count", "in.txt", "-vv"])
                .unwrap();
        assert_eq!(args.report, Report::PointsCount);
        assert_eq!(args.input, Some(PathBuf::from("in.txt")));
        assert_eq!(args.logging.verbose, 2);

        for (name, report) in [
            ("volume", Report::Volume),
            ("boxes", Report::Boxes),
            ("points", Report::Points),
        ] {
            let short = CuboidsArgs::try_parse_from(["cuboids", "-r", name]).unwrap();
            assert_eq!(short.report, report);
        }
    }
}
