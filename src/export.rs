use csv::Writer;
use log::info;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::stats::StatsReport;

pub const HEADERS: [&str; 5] = ["department", "emp_cnt", "max_sal", "min_sal", "avg_sal"];

/// Writes the report as CSV, one row per department.
pub fn write_stats<W: Write>(out: W, report: &StatsReport) -> Result<()> {
    let mut writer = Writer::from_writer(out);

    writer.write_record(&HEADERS)?;

    for (department, stats) in report {
        writer.write_record(&[
            department.clone(),
            stats.count.to_string(),
            stats.max.to_string(),
            stats.min.to_string(),
            stats.avg.to_string(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

/// Saves the report to `path`, creating its parent directories if needed.
pub fn save_stats<P: AsRef<Path>>(path: P, report: &StatsReport) -> Result<()> {
    let path = path.as_ref();

    if let Some(dirname) = path.parent() {
        fs::create_dir_all(dirname)?;
    }

    write_stats(fs::File::create(path)?, report)?;

    info!("saved stats of {} departments to {:?}", report.len(), path);

    Ok(())
}
