//! `kiln filter-warnings`: run engine warnings through a warning policy.
//!
//! Input is one JSON [`WarningEvent`] per line; blank lines are skipped.
//! Suppressed events are dropped, the rest go to the default reporting
//! handler or, with `--json`, back to stdout unchanged.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use kiln_bundler::{TargetFamily, WarningEvent, WarningPolicy, report_warning};
use kiln_config::KilnConfig;

use crate::cli::FilterWarningsArgs;
use crate::error::{CliError, Result, ResultExt};

/// Counts of one filtering run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub reported: usize,
    pub suppressed: usize,
}

pub fn execute(args: FilterWarningsArgs, config: &KilnConfig) -> Result<()> {
    let family = TargetFamily::from(args.family);
    let policy = WarningPolicy::for_family(family, &config.warnings);

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path).with_path(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    let summary = if args.json {
        let mut stdout = io::stdout().lock();
        let mut echoed = Ok(());
        let summary = filter(reader, &policy, |event| {
            if echoed.is_ok() {
                echoed = write_event(&mut stdout, event);
            }
        })?;
        echoed?;
        summary
    } else {
        filter(reader, &policy, report_warning)?
    };

    tracing::info!(
        %family,
        reported = summary.reported,
        suppressed = summary.suppressed,
        "warnings filtered"
    );
    Ok(())
}

/// Apply `policy` to every event in `reader`, forwarding unsuppressed ones.
pub fn filter(
    reader: impl BufRead,
    policy: &WarningPolicy,
    mut report: impl FnMut(&WarningEvent),
) -> Result<FilterSummary> {
    let mut summary = FilterSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let event: WarningEvent = serde_json::from_str(&line).map_err(|source| {
            CliError::InvalidEvent {
                line: index + 1,
                source,
            }
        })?;

        if policy.handle(&event, &mut report) {
            summary.reported += 1;
        } else {
            summary.suppressed += 1;
        }
    }

    Ok(summary)
}

fn write_event(out: &mut impl Write, event: &WarningEvent) -> Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_config::WarningOptions;

    const EVENTS: &str = r#"{"code":"FILE_NAME_CONFLICT","importer":"x","message":"conflict"}
{"code":"CIRCULAR_DEPENDENCY","importer":"src/js/core/column/Column.js","message":"cycle"}

{"code":"CIRCULAR_DEPENDENCY","importer":"src/Other.js","message":"cycle"}
{"code":"EVAL","importer":"x","message":"use of eval"}
"#;

    fn run(policy: &WarningPolicy) -> (FilterSummary, Vec<String>) {
        let mut codes = Vec::new();
        let summary = filter(EVENTS.as_bytes(), policy, |event| {
            codes.push(format!("{}@{}", event.code, event.importer.as_deref().unwrap_or("")));
        })
        .unwrap();
        (summary, codes)
    }

    #[test]
    fn test_script_policy_drops_known_cycles() {
        let policy = WarningPolicy::full(&WarningOptions::default());
        let (summary, reported) = run(&policy);
        assert_eq!(
            summary,
            FilterSummary {
                reported: 2,
                suppressed: 2
            }
        );
        assert_eq!(reported, vec!["CIRCULAR_DEPENDENCY@src/Other.js", "EVAL@x"]);
    }

    #[test]
    fn test_stylesheet_policy_reports_every_cycle() {
        let policy = WarningPolicy::generic(&WarningOptions::default());
        let (summary, _) = run(&policy);
        assert_eq!(summary.reported, 3);
        assert_eq!(summary.suppressed, 1);
    }

    #[test]
    fn test_event_without_importer_is_accepted() {
        let policy = WarningPolicy::full(&WarningOptions::default());
        let input = r#"{"code":"EVAL","message":"use of eval"}"#;
        let summary = filter(input.as_bytes(), &policy, |_| {}).unwrap();
        assert_eq!(summary.reported, 1);
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let policy = WarningPolicy::full(&WarningOptions::default());
        let input = "{\"code\":\"EVAL\",\"message\":\"\"}\nnot json\n";
        let err = filter(input.as_bytes(), &policy, |_| {}).unwrap_err();
        assert!(matches!(err, CliError::InvalidEvent { line: 2, .. }));
    }

    #[test]
    fn test_write_event_is_one_line() {
        let mut out = Vec::new();
        write_event(&mut out, &WarningEvent::new("EVAL", "use of eval")).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);
    }
}
