//! Writing a summary of a region to the output.

use std::io;

use cuboid_algebra::math::PointCount;
use cuboid_algebra::set::Cuboids;

/// What to report about the region a script builds.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, clap::ValueEnum)]
#[non_exhaustive]
pub enum Report {
    /// The number of distinct points in the region.
    #[default]
    PointsCount,
    /// The sum of the continuous volumes of the region's cuboids.
    Volume,
    /// The region's cuboids, one per line.
    Boxes,
    /// Every point in the region, one per line, in sorted order.
    Points,
}

/// Writes `report` about `region` to `out`.
///
/// [`Report::Points`] refuses to list more than `points_limit` points.
pub fn write_report(
    region: &Cuboids,
    report: Report,
    points_limit: PointCount,
    out: &mut impl io::Write,
) -> Result<(), ReportError> {
    match report {
        Report::PointsCount => {
            let count = region.points_count().ok_or(ReportError::Overflow)?;
            writeln!(out, "{count}")?;
        }
        Report::Volume => {
            let volume = region.volume().ok_or(ReportError::Overflow)?;
            writeln!(out, "{volume}")?;
        }
        Report::Boxes => {
            write!(out, "{region}")?;
        }
        Report::Points => {
            let count = region.points_count().ok_or(ReportError::Overflow)?;
            if count > points_limit {
                return Err(ReportError::TooManyPoints {
                    count,
                    limit: points_limit,
                });
            }
            for point in region.points() {
                writeln!(out, "{point}")?;
            }
        }
    }
    Ok(())
}

/// Error from [`write_report()`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
#[allow(clippy::module_name_repetitions)]
pub enum ReportError {
    /// Listing the points was refused.
    #[non_exhaustive]
    #[error("region has {count} points, which is more than --points-limit {limit}")]
    TooManyPoints {
        /// Number of points that would have been listed.
        count: PointCount,
        /// The limit in effect.
        limit: PointCount,
    },

    /// The requested count is too large to represent.
    #[error("region is too large to measure")]
    Overflow,

    /// Writing failed.
    #[error("failed to write report")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuboid_algebra::math::{Coordinate, Cuboid};
    use pretty_assertions::assert_eq;

    fn report_string(region: &Cuboids, report: Report, limit: PointCount) -> String {
        let mut out = Vec::new();
        write_report(region, report, limit, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample() -> Cuboids {
        Cuboids::new()
            .merge(Cuboid::new([0, 0, 0], [1, 0, 0]))
            .merge(Cuboid::new([0, 0, 0], [0, 0, 1]))
    }

    #[test]
    fn counts() {
        assert_eq!(report_string(&sample(), Report::PointsCount, 0), "3\n");
        // Both pieces are lines, which have no volume.
        assert_eq!(report_string(&sample(), Report::Volume, 0), "0\n");
        let cube = Cuboids::from(Cuboid::new([0, 0, 0], [2, 2, 2]));
        assert_eq!(report_string(&cube, Report::Volume, 0), "8\n");
        assert_eq!(report_string(&cube, Report::PointsCount, 0), "27\n");
        assert_eq!(report_string(&Cuboids::new(), Report::PointsCount, 0), "0\n");
    }

    #[test]
    fn boxes() {
        assert_eq!(
            report_string(&Cuboids::from(Cuboid::new([0, 0, 0], [9, 9, 9])), Report::Boxes, 0),
            "0,0,0,9,9,9\n"
        );
    }

    #[test]
    fn points() {
        assert_eq!(
            report_string(&sample(), Report::Points, 3),
            "0,0,0\n0,0,1\n1,0,0\n"
        );
    }

    #[test]
    fn points_limit() {
        let mut out = Vec::new();
        let error = write_report(&sample(), Report::Points, 2, &mut out).unwrap_err();
        assert!(matches!(
            error,
            ReportError::TooManyPoints { count: 3, limit: 2 }
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn overflow() {
        let everything = Cuboids::from(Cuboid::new(
            [Coordinate::MIN; 3],
            [Coordinate::MAX; 3],
        ));
        let mut out = Vec::new();
        assert!(matches!(
            write_report(&everything, Report::PointsCount, 0, &mut out),
            Err(ReportError::Overflow)
        ));
    }
}
