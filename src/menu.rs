//! The interactive loop: show the actions, read a choice, run it.
use log::error;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::config::Config;
use crate::error::Result;
use crate::export::save_stats;
use crate::hierarchy::Hierarchy;
use crate::print::{write_hierarchy, write_stats};
use crate::stats::StatsReport;

const MENU: &str = "
Select an action:
1. Print department-teams hierarchy
2. Print summary report for departments
3. Save summary report to CSV file
4. Exit";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    PrintHierarchy,
    PrintStats,
    ExportStats,
    Exit,
}

#[derive(Debug, PartialEq)]
pub struct InvalidChoice(pub String);

impl FromStr for Action {
    type Err = InvalidChoice;

    fn from_str(choice: &str) -> std::result::Result<Action, Self::Err> {
        match choice.trim() {
            "1" => Ok(Action::PrintHierarchy),
            "2" => Ok(Action::PrintStats),
            "3" => Ok(Action::ExportStats),
            "4" => Ok(Action::Exit),
            other => Err(InvalidChoice(other.to_string())),
        }
    }
}

fn stats_report(config: &Config) -> Result<StatsReport> {
    let groups = config.salary_aggregation().read_path_or_empty(&config.input);

    StatsReport::from_groups(&groups, config.numeric_policy)
}

/// Runs a single action, writing whatever it prints to `out`.
pub fn run_action<W: Write>(config: &Config, action: Action, out: &mut W) -> Result<()> {
    match action {
        Action::PrintHierarchy => {
            let hierarchy = Hierarchy::load(&config.input, config.hierarchy_aggregation());

            write_hierarchy(out, &hierarchy)
        }
        Action::PrintStats => write_stats(out, &stats_report(config)?),
        Action::ExportStats => {
            save_stats(&config.output, &stats_report(config)?)?;
            writeln!(out, "Summary report successfully saved to a CSV file.")?;

            Ok(())
        }
        Action::Exit => {
            writeln!(out, "Thank you for using the program!")?;

            Ok(())
        }
    }
}

pub struct Menu {
    config: Config,
}

impl Menu {
    pub fn new(config: Config) -> Menu {
        Menu { config }
    }

    /// Loops until the exit action is chosen or `input` runs out of lines.
    /// A failing action is reported and the menu is shown again.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut out: W) -> Result<()> {
        writeln!(out, "Welcome!")?;

        loop {
            writeln!(out, "{}", MENU)?;
            write!(out, "Enter the action number: ")?;
            out.flush()?;

            let mut line = String::new();

            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(());
            }

            match line.parse::<Action>() {
                Ok(action) => {
                    if let Err(e) = run_action(&self.config, action, &mut out) {
                        error!("{:?} failed: {}", action, e);
                        writeln!(out, "Could not complete the action: {}", e)?;
                    }

                    if action == Action::Exit {
                        return Ok(());
                    }
                }
                Err(InvalidChoice(_)) => {
                    writeln!(out, "Invalid choice. Please select a valid action number.")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, InvalidChoice, Menu};
    use crate::config::Config;
    use std::path::PathBuf;

    fn config(input: &str) -> Config {
        Config {
            input: PathBuf::from(input),
            ..Default::default()
        }
    }

    fn run(config: Config, input: &str) -> String {
        let mut out = Vec::new();

        Menu::new(config).run(input.as_bytes(), &mut out).unwrap();

        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(" 2\n".parse::<Action>(), Ok(Action::PrintStats));
        assert_eq!("4".parse::<Action>(), Ok(Action::Exit));
        assert_eq!("5".parse::<Action>(), Err(InvalidChoice("5".to_string())));
        assert_eq!("".parse::<Action>(), Err(InvalidChoice("".to_string())));
    }

    #[test]
    fn test_invalid_choice_prompts_again() {
        let out = run(config("test/assets/corp_summary.csv"), "9\n4\n");

        assert!(out.contains("Invalid choice. Please select a valid action number."));
        assert_eq!(out.matches("Select an action:").count(), 2);
        assert!(out.ends_with("Thank you for using the program!\n"));
    }

    #[test]
    fn test_print_hierarchy() {
        let out = run(config("test/assets/corp_summary.csv"), "1\n");

        assert!(out.contains("----Department-Teams hierarchy----\nEngineering\n\tBackend\n\tFrontend\n"));
    }

    #[test]
    fn test_missing_input_prints_empty_report() {
        let out = run(config("test/assets/nope.csv"), "2\n4\n");

        assert!(out.contains("----Salary stats for each department----\n\nSelect an action:"));
    }

    #[test]
    fn test_bad_salary_does_not_stop_the_menu() {
        let out = run(config("test/assets/bad_salary.csv"), "2\n1\n4\n");

        assert!(out.contains("Could not complete the action: non numeric value \"seventy\""));
        assert!(out.contains("----Department-Teams hierarchy----"));
    }

    #[test]
    fn test_export() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out_dept_sal_stats.csv");
        let config = Config {
            output: output.clone(),
            ..config("test/assets/corp_summary.csv")
        };

        let out = run(config, "3\n4\n");

        assert!(out.contains("Summary report successfully saved to a CSV file."));
        assert!(std::fs::read_to_string(&output)
            .unwrap()
            .starts_with("department,emp_cnt,max_sal,min_sal,avg_sal"));
    }
}
