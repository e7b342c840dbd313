//! Console rendering of the reports.
use std::collections::HashMap;
use std::io::Write;
use strfmt::strfmt;

use crate::error::Result;
use crate::hierarchy::Hierarchy;
use crate::stats::StatsReport;

pub const HIERARCHY_TITLE: &str = "----Department-Teams hierarchy----";
pub const STATS_TITLE: &str = "----Salary stats for each department----";

const DEPARTMENT_LINE: &str = "{department}";
const TEAM_LINE: &str = "\t{team}";
const STATS_LINES: &str = "{department}
\tEMP_CNT = {emp_cnt}
\tMAX_SAL = {max_sal}
\tMIN_SAL = {min_sal}
\tAVG_SAL = {avg_sal}";

fn vars(pairs: &[(&str, String)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

pub fn write_hierarchy<W: Write>(out: &mut W, hierarchy: &Hierarchy) -> Result<()> {
    writeln!(out, "{}", HIERARCHY_TITLE)?;

    for (department, teams) in hierarchy.iter() {
        let line = strfmt(DEPARTMENT_LINE, &vars(&[("department", department.to_string())]))?;
        writeln!(out, "{}", line)?;

        for team in teams {
            writeln!(out, "{}", strfmt(TEAM_LINE, &vars(&[("team", team.clone())]))?)?;
        }
    }

    Ok(())
}

pub fn write_stats<W: Write>(out: &mut W, report: &StatsReport) -> Result<()> {
    writeln!(out, "{}", STATS_TITLE)?;

    for (department, stats) in report {
        let values = vars(&[
            ("department", department.clone()),
            ("emp_cnt", stats.count.to_string()),
            ("max_sal", stats.max.to_string()),
            ("min_sal", stats.min.to_string()),
            ("avg_sal", format!("{:.2}", stats.avg)),
        ]);

        writeln!(out, "{}", strfmt(STATS_LINES, &values)?)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write_hierarchy, write_stats};
    use crate::groupby::Aggregation;
    use crate::hierarchy::Hierarchy;
    use crate::stats::{NumericPolicy, StatsReport};

    #[test]
    fn test_write_hierarchy() {
        let hierarchy = Hierarchy::load("test/assets/corp_summary.csv", Aggregation::new(1, 2));
        let mut out = Vec::new();

        write_hierarchy(&mut out, &hierarchy).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "----Department-Teams hierarchy----
Engineering
\tBackend
\tFrontend
Sales
\tRetail
\tEnterprise
Marketing
\tBrand
"
        );
    }

    #[test]
    fn test_write_stats() {
        let data = "name;department;team;position;rating;salary
a;Eng;x;y;1;50000
b;Eng;x;y;1;70000
c;Eng;x;y;1;60000
";
        let groups = Aggregation::new(1, 5).read(data.as_bytes()).unwrap();
        let report = StatsReport::from_groups(&groups, NumericPolicy::Fail).unwrap();
        let mut out = Vec::new();

        write_stats(&mut out, &report).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "----Salary stats for each department----
Eng
\tEMP_CNT = 3
\tMAX_SAL = 70000
\tMIN_SAL = 50000
\tAVG_SAL = 60000.00
"
        );
    }

    #[test]
    fn test_empty_reports() {
        let mut out = Vec::new();

        write_stats(&mut out, &StatsReport::default()).unwrap();
        write_hierarchy(&mut out, &Hierarchy::default()).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "----Salary stats for each department----\n----Department-Teams hierarchy----\n"
        );
    }
}
